//! Core game logic - pure, deterministic, and testable
//!
//! Board rules, tile geometry, the draw pile and endgame scoring. Nothing in
//! this crate performs I/O apart from [`TileCatalog::load_from_file`], and
//! nothing knows about players beyond their numeric id.
//!
//! - **Deterministic**: a deck seed fully fixes the draw order
//! - **Decoupled**: captures are reported as events, never applied to players
//! - **Atomic**: a rejected placement leaves the board unchanged
//!
//! # Module Structure
//!
//! - [`tile`]: normalized shapes with rotation, mirroring and footprints
//! - [`catalog`]: the reference list of shapes and its JSON loader
//! - [`deck`]: draw pile with look-ahead window and exchange
//! - [`board`]: ownership grid, bonus overlay, placement and capture
//! - [`scoring`]: largest-square ranking
//! - [`snapshot`]: owned copies of the board for long-lived readers
//!
//! # Example
//!
//! ```
//! use tile_claim_core::{Board, Tile};
//!
//! let mut board = Board::for_players(2).unwrap();
//! assert!(board.place_seed(5, 5, 1));
//!
//! let tile = Tile::new("bar", vec![(0, 0), (1, 0), (2, 0)]);
//! let cells = tile.footprint(6, 5, 0, false);
//! assert!(board.place_footprint(&cells, 1));
//! assert_eq!(board.owned_count(1), 4);
//!
//! // Player 2 may not touch player 1.
//! let cells = tile.footprint(9, 5, 0, false);
//! assert!(!board.can_place_footprint(&cells, 2));
//! ```

pub mod board;
pub mod catalog;
pub mod deck;
pub mod error;
pub mod scoring;
pub mod snapshot;
pub mod tile;

pub use tile_claim_types as types;

pub use board::{Board, OwnerGrid};
pub use catalog::TileCatalog;
pub use deck::TileDeck;
pub use error::{CatalogError, DeckError, SetupError};
pub use scoring::{compute_scores, compute_scores_for, leader, ScoreRecord};
pub use snapshot::BoardSnapshot;
pub use tile::{normalize, Tile};
