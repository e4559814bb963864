//! Error types for setup, the deck and catalog loading.
//!
//! Placement failures are not errors: the board reports them as `false` and
//! leaves its state untouched.

use std::path::PathBuf;

use crate::types::BonusKind;

/// Fatal problems while setting up a board
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("player count {0} is outside the supported range 2..=9")]
    InvalidPlayerCount(usize),

    #[error("could not find a free cell for a {kind:?} bonus after {attempts} attempts")]
    BonusPlacementExhausted { kind: BonusKind, attempts: u32 },
}

/// Deck failures that stop the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("draw on empty deck with reshuffle disabled")]
    Exhausted,

    #[error("deck has not been initialized from a catalog")]
    Uninitialized,
}

/// Catalog loading failures
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("cannot read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog has no \"tiles\" array")]
    MissingTiles,
}
