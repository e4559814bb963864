//! Plain-text rendering for tile-claim
//!
//! Pure string builders, no terminal control and no I/O. Callers print the
//! result wherever they like.
//!
//! - [`tile_view`]: single tiles, placed footprints and the deck window
//! - [`board_view`]: the whole board with column letters and row numbers

pub mod board_view;
pub mod tile_view;

pub use tile_claim_core as core;
pub use tile_claim_types as types;

pub use board_view::{column_label, draw_board, parse_column};
pub use tile_view::{draw_footprint, draw_tile, draw_window, tile_rows, DEFAULT_FILL};
