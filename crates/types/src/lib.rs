//! Shared types and constants
//!
//! Plain data used by every other crate in the workspace (core rules, the turn
//! driver, text rendering). Nothing here allocates or depends on game state.
//!
//! # Board Dimensions
//!
//! The board is square and sized from the number of players at setup:
//!
//! | Players | Size |
//! |---------|------|
//! | 2-4 | 20x20 |
//! | 5-9 | 30x30 |
//!
//! Any other player count is rejected before a grid is allocated.
//!
//! # Coordinates
//!
//! `(x, y)` with x growing to the right (columns) and y growing downward
//! (rows). Grids are stored flat, row-major (`y * width + x`).
//!
//! # Examples
//!
//! ```
//! use tile_claim_types::{board_side_for_players, BonusKind, CellMark};
//!
//! assert_eq!(board_side_for_players(4), Some(20));
//! assert_eq!(board_side_for_players(5), Some(30));
//! assert_eq!(board_side_for_players(1), None);
//!
//! assert_eq!(BonusKind::Stone.symbol(), 'R');
//! assert_eq!(BonusKind::from_symbol('e'), Some(BonusKind::Exchange));
//!
//! assert!(CellMark::Empty.is_empty());
//! ```

use serde::{Deserialize, Serialize};

/// A grid cell offset or absolute board position `(x, y)`
pub type Point = (i32, i32);

/// Player identifier. Assigned from 1 upward by the session setup.
pub type PlayerId = u8;

/// Owner value of a cell no player holds (also used for obstacles)
pub const NO_OWNER: PlayerId = 0;

/// Fewest players a game can be set up with
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can be set up with
pub const MAX_PLAYERS: usize = 9;

/// Side of the board for 2-4 players
pub const SMALL_BOARD_SIDE: usize = 20;

/// Side of the board for 5-9 players
pub const LARGE_BOARD_SIDE: usize = 30;

/// Number of upcoming tiles a player may exchange against
pub const WINDOW_SIZE: usize = 5;

/// Rounds played before the final purchase phase
pub const DEFAULT_ROUNDS: u32 = 9;

/// Exchange coupons every player starts with
pub const STARTING_EXCHANGE_COUPONS: u32 = 1;

/// Sampling attempts allowed per bonus before setup gives up
pub const BONUS_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// The four orthogonal neighbor offsets
pub const ORTHOGONAL: [Point; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Board side length for a player count, `None` if the count is unsupported
pub fn board_side_for_players(players: usize) -> Option<usize> {
    match players {
        2..=4 => Some(SMALL_BOARD_SIDE),
        5..=9 => Some(LARGE_BOARD_SIDE),
        _ => None,
    }
}

/// State of a single board cell
///
/// Cells only ever leave `Empty`; `Territory` and `Obstacle` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellMark {
    #[default]
    Empty,
    /// Permanently owned by a player
    Territory,
    /// Permanently blocked, owned by no one
    Obstacle,
}

impl CellMark {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellMark::Empty)
    }

    /// Single-character form used by text rendering
    pub fn as_char(&self) -> char {
        match self {
            CellMark::Empty => '.',
            CellMark::Territory => '#',
            CellMark::Obstacle => 'X',
        }
    }
}

/// The three kinds of bonus cell
///
/// Only display metadata lives here. What a capture grants is decided by
/// whoever consumes the [`CaptureEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BonusKind {
    /// Grants one exchange coupon
    Exchange,
    /// Grants one forced obstacle placement
    Stone,
    /// Grants one steal entitlement
    Steal,
}

impl BonusKind {
    pub const ALL: [BonusKind; 3] = [BonusKind::Exchange, BonusKind::Stone, BonusKind::Steal];

    /// Symbol shown on the board
    pub fn symbol(&self) -> char {
        match self {
            BonusKind::Exchange => 'E',
            BonusKind::Stone => 'R',
            BonusKind::Steal => 'S',
        }
    }

    /// Human readable name for game messages
    pub fn name(&self) -> &'static str {
        match self {
            BonusKind::Exchange => "Exchange a tile",
            BonusKind::Stone => "Rock",
            BonusKind::Steal => "Stealth",
        }
    }

    /// Parse from the board symbol (case-insensitive)
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'E' => Some(BonusKind::Exchange),
            'R' => Some(BonusKind::Stone),
            'S' => Some(BonusKind::Steal),
            _ => None,
        }
    }

    /// How many bonuses of this kind a game with `players` players gets
    ///
    /// ```
    /// use tile_claim_types::BonusKind;
    ///
    /// assert_eq!(BonusKind::Exchange.count_for_players(3), 5);
    /// assert_eq!(BonusKind::Stone.count_for_players(3), 2);
    /// assert_eq!(BonusKind::Steal.count_for_players(3), 3);
    /// ```
    pub fn count_for_players(&self, players: usize) -> usize {
        match self {
            // ceil(1.5 * n)
            BonusKind::Exchange => (3 * players).div_ceil(2),
            // ceil(0.5 * n)
            BonusKind::Stone => players.div_ceil(2),
            BonusKind::Steal => players,
        }
    }
}

/// Reported by the board when a bonus cell is captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptureEvent {
    pub kind: BonusKind,
    pub position: Point,
}

/// What the deck does when its pile runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhaustionPolicy {
    /// Refill the pile from the catalog and shuffle it
    #[default]
    Reshuffle,
    /// Report exhaustion as an error
    Fail,
}
