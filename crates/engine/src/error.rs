use crate::core::{DeckError, SetupError};
use crate::session::Phase;

/// Why a turn action was refused
///
/// A refused action never changes the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("action not allowed in the {0:?} phase")]
    WrongPhase(Phase),
    #[error("a tile is already held")]
    TileAlreadyHeld,
    #[error("no tile is held")]
    NoTileHeld,
    #[error("a captured stone must be placed first")]
    StonePending,
    #[error("no stone to place")]
    NoStone,
    #[error("no exchange coupon left")]
    NoCoupon,
    #[error("window index out of range or tile unknown")]
    ExchangeFailed,
    #[error("placement breaks a board rule")]
    InvalidPlacement,
}

impl TurnError {
    /// Stable machine-readable code
    pub fn code(self) -> &'static str {
        match self {
            TurnError::WrongPhase(_) => "wrong_phase",
            TurnError::TileAlreadyHeld | TurnError::NoTileHeld => "bad_hand",
            TurnError::StonePending | TurnError::NoStone => "stone",
            TurnError::NoCoupon | TurnError::ExchangeFailed => "exchange",
            TurnError::InvalidPlacement => "invalid_place",
        }
    }
}

/// Failures that end or prevent a session
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error("tile catalog is empty")]
    EmptyCatalog,
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Turn(#[from] TurnError),
}
