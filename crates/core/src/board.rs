//! Board module - ownership grid, bonus overlay and placement rules
//!
//! Two flat row-major grids of equal size: the cell mark (empty, territory,
//! obstacle) and the owning player (`NO_OWNER` unless territory). Bonuses sit
//! in an ordered overlay on top of empty cells.
//!
//! Placement rules for a footprint owned by player `p`:
//!
//! 1. every cell is on the board
//! 2. every cell is empty and carries no bonus
//! 3. no cell touches (orthogonally) another player's territory
//! 4. some cell is, or touches, `p`'s territory
//!
//! A player's very first cell bypasses rule 4 through [`Board::place_seed`].
//! The board never touches player state: captures come back as
//! [`CaptureEvent`]s for the caller to interpret.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;
use rand::Rng;

use crate::error::SetupError;
use crate::snapshot::BoardSnapshot;
use crate::types::{
    board_side_for_players, BonusKind, CaptureEvent, CellMark, PlayerId, Point,
    BONUS_PLACEMENT_ATTEMPTS, MAX_PLAYERS, MIN_PLAYERS, NO_OWNER, ORTHOGONAL,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major cell marks (y * width + x)
    marks: Vec<CellMark>,
    /// Row-major owners, `NO_OWNER` for empty cells and obstacles
    owners: Vec<PlayerId>,
    bonuses: BTreeMap<Point, BonusKind>,
}

impl Board {
    /// Board sized for `players` players
    ///
    /// The player count is checked before anything is allocated.
    pub fn for_players(players: usize) -> Result<Self, SetupError> {
        let side = board_side_for_players(players).ok_or(SetupError::InvalidPlayerCount(players))?;
        Ok(Self::with_size(side, side))
    }

    /// An empty board of arbitrary size
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            marks: vec![CellMark::Empty; width * height],
            owners: vec![NO_OWNER; width * height],
            bonuses: BTreeMap::new(),
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_none()
    }

    /// Mark at `(x, y)`, `None` when out of bounds
    pub fn mark(&self, x: i32, y: i32) -> Option<CellMark> {
        self.index(x, y).map(|i| self.marks[i])
    }

    /// Owner at `(x, y)`, `None` when out of bounds
    pub fn owner(&self, x: i32, y: i32) -> Option<PlayerId> {
        self.index(x, y).map(|i| self.owners[i])
    }

    pub fn bonus_at(&self, x: i32, y: i32) -> Option<BonusKind> {
        self.bonuses.get(&(x, y)).copied()
    }

    /// In bounds, empty and without a bonus
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        matches!(self.mark(x, y), Some(CellMark::Empty)) && !self.bonuses.contains_key(&(x, y))
    }

    /// Whether any cell could still take a seed or an obstacle
    pub fn has_free_cell(&self) -> bool {
        self.marks
            .iter()
            .enumerate()
            .any(|(i, m)| m.is_empty() && !self.bonuses.contains_key(&self.point(i)))
    }

    fn point(&self, index: usize) -> Point {
        ((index % self.width) as i32, (index / self.width) as i32)
    }

    /// In-bounds orthogonal neighbors of `(x, y)`
    pub fn neighbors(&self, x: i32, y: i32) -> ArrayVec<Point, 4> {
        ORTHOGONAL
            .iter()
            .map(|&(dx, dy)| (x + dx, y + dy))
            .filter(|&(nx, ny)| !self.is_out_of_bounds(nx, ny))
            .collect()
    }

    /// Check a footprint against all four placement rules
    pub fn can_place_footprint(&self, points: &[Point], player: PlayerId) -> bool {
        if player == NO_OWNER || points.is_empty() {
            return false;
        }
        if !points.iter().all(|&(x, y)| self.is_free(x, y)) {
            return false;
        }

        let mut touches_own = false;
        for &(x, y) in points {
            for (nx, ny) in self.neighbors(x, y) {
                match self.owner(nx, ny) {
                    Some(NO_OWNER) | None => {}
                    Some(owner) if owner == player => touches_own = true,
                    Some(_) => return false,
                }
            }
        }
        touches_own
    }

    /// Claim a footprint for `player`
    ///
    /// Returns false and changes nothing when any rule fails.
    pub fn place_footprint(&mut self, points: &[Point], player: PlayerId) -> bool {
        if !self.can_place_footprint(points, player) {
            return false;
        }
        for &(x, y) in points {
            if let Some(i) = self.index(x, y) {
                self.marks[i] = CellMark::Territory;
                self.owners[i] = player;
            }
        }
        true
    }

    /// Claim a player's starting cell
    ///
    /// Only bounds, emptiness and bonus cells are checked: no adjacency rule
    /// applies to the first cell.
    pub fn place_seed(&mut self, x: i32, y: i32, player: PlayerId) -> bool {
        if player == NO_OWNER || !self.is_free(x, y) {
            return false;
        }
        let Some(i) = self.index(x, y) else {
            return false;
        };
        self.marks[i] = CellMark::Territory;
        self.owners[i] = player;
        true
    }

    /// Turn a single free cell into an obstacle
    pub fn place_obstacle(&mut self, x: i32, y: i32) -> bool {
        if !self.is_free(x, y) {
            return false;
        }
        let Some(i) = self.index(x, y) else {
            return false;
        };
        self.marks[i] = CellMark::Obstacle;
        true
    }

    /// Capture every bonus fully surrounded by `player`
    ///
    /// All four neighbors must be on the board and owned by `player`; an
    /// off-board neighbor blocks the capture. Captured cells become the
    /// player's territory and leave the overlay. Events come back in
    /// ascending position order.
    pub fn check_bonus_capture(&mut self, player: PlayerId) -> Vec<CaptureEvent> {
        if player == NO_OWNER {
            return Vec::new();
        }
        let captured: Vec<CaptureEvent> = self
            .bonuses
            .iter()
            .filter(|&(&(x, y), _)| {
                ORTHOGONAL
                    .iter()
                    .all(|&(dx, dy)| self.owner(x + dx, y + dy) == Some(player))
            })
            .map(|(&position, &kind)| CaptureEvent { kind, position })
            .collect();

        for event in &captured {
            let (x, y) = event.position;
            self.bonuses.remove(&event.position);
            if let Some(i) = self.index(x, y) {
                self.marks[i] = CellMark::Territory;
                self.owners[i] = player;
            }
            log::debug!("player {player} captured {:?} bonus at ({x}, {y})", event.kind);
        }
        captured
    }

    /// Put a bonus on a free cell
    pub fn place_bonus_at(&mut self, x: i32, y: i32, kind: BonusKind) -> bool {
        if !self.is_free(x, y) {
            return false;
        }
        self.bonuses.insert((x, y), kind);
        true
    }

    /// Whether `(x, y)` may receive a randomly placed bonus
    fn bonus_site_ok(&self, x: i32, y: i32) -> bool {
        if !self.is_free(x, y) {
            return false;
        }
        for dy in -1..=1 {
            for dx in -1..=1 {
                if self.bonuses.contains_key(&(x + dx, y + dy)) {
                    return false;
                }
            }
        }
        true
    }

    /// Scatter the bonuses for a `players`-player game
    ///
    /// Each bonus lands on a uniformly sampled interior cell (never the outer
    /// ring) with no other bonus in its 3x3 neighborhood. Gives up with
    /// [`SetupError::BonusPlacementExhausted`] after
    /// [`BONUS_PLACEMENT_ATTEMPTS`] misses for one bonus.
    pub fn place_bonuses<R: Rng>(&mut self, players: usize, rng: &mut R) -> Result<(), SetupError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            return Err(SetupError::InvalidPlayerCount(players));
        }
        for kind in BonusKind::ALL {
            for _ in 0..kind.count_for_players(players) {
                self.place_random_bonus(kind, rng)?;
            }
        }
        log::debug!("placed {} bonuses on {}x{} board", self.bonuses.len(), self.width, self.height);
        Ok(())
    }

    fn place_random_bonus<R: Rng>(&mut self, kind: BonusKind, rng: &mut R) -> Result<(), SetupError> {
        let exhausted = SetupError::BonusPlacementExhausted {
            kind,
            attempts: BONUS_PLACEMENT_ATTEMPTS,
        };
        if self.width < 3 || self.height < 3 {
            return Err(exhausted);
        }
        for _ in 0..BONUS_PLACEMENT_ATTEMPTS {
            let x = rng.gen_range(1..self.width - 1) as i32;
            let y = rng.gen_range(1..self.height - 1) as i32;
            if self.bonus_site_ok(x, y) {
                self.bonuses.insert((x, y), kind);
                return Ok(());
            }
        }
        Err(exhausted)
    }

    /// Number of cells `player` owns
    pub fn owned_count(&self, player: PlayerId) -> usize {
        self.owners.iter().filter(|&&o| o == player && o != NO_OWNER).count()
    }

    /// Row-major cell marks
    pub fn marks(&self) -> &[CellMark] {
        &self.marks
    }

    /// Row-major owners
    pub fn owners(&self) -> &[PlayerId] {
        &self.owners
    }

    pub fn bonuses(&self) -> &BTreeMap<Point, BonusKind> {
        &self.bonuses
    }

    /// Borrowed ownership view for scoring
    pub fn owner_grid(&self) -> OwnerGrid<'_> {
        OwnerGrid::from_parts(self.width, self.height, &self.owners)
    }

    /// Owned copy for collaborators that outlive the turn
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(
            self.width,
            self.height,
            self.marks.clone(),
            self.owners.clone(),
            self.bonuses.iter().map(|(&p, &k)| (p, k)).collect(),
        )
    }
}

/// Read-only row-major owner grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerGrid<'a> {
    width: usize,
    height: usize,
    cells: &'a [PlayerId],
}

impl<'a> OwnerGrid<'a> {
    /// `None` if `cells` does not hold exactly `width * height` entries
    pub fn new(width: usize, height: usize, cells: &'a [PlayerId]) -> Option<Self> {
        (cells.len() == width * height).then_some(Self { width, height, cells })
    }

    pub(crate) fn from_parts(width: usize, height: usize, cells: &'a [PlayerId]) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &'a [PlayerId] {
        self.cells
    }

    pub fn get(&self, x: usize, y: usize) -> Option<PlayerId> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }
}
