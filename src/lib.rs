//! Tile claim (workspace facade crate).
//!
//! Re-exports the workspace crates as `tile_claim::{core,engine,term,types}` so
//! binaries, tests and benches depend on a single package.

pub use tile_claim_core as core;
pub use tile_claim_engine as engine;
pub use tile_claim_term as term;
pub use tile_claim_types as types;
