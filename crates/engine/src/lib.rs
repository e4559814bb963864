//! Turn driver for tile-claim
//!
//! Sits on top of the pure rules in `tile_claim_core` and adds what a whole
//! game needs: player ids and bookkeeping, seat order, rounds, forced stone
//! placement, exchange coupons and the final purchase phase.
//!
//! # Example
//!
//! ```
//! use tile_claim_core::{Tile, TileCatalog};
//! use tile_claim_engine::{GameSession, Phase, PlayerProfile, SessionConfig};
//!
//! let catalog = TileCatalog::from_tiles(vec![Tile::new("mono", vec![(0, 0)])]);
//! let config = SessionConfig {
//!     shuffle_turn_order: false,
//!     ..SessionConfig::seeded(7)
//! };
//! let players = vec![PlayerProfile::new("Ada", "red"), PlayerProfile::new("Bo", "blue")];
//! let mut session = GameSession::new(config, &catalog, players).unwrap();
//!
//! // Corners are never bonus cells.
//! session.place_seed(0, 0).unwrap();
//! session.place_seed(19, 19).unwrap();
//! assert_eq!(session.phase(), Phase::Playing);
//!
//! session.begin_turn().unwrap();
//! session.place_held(1, 0).unwrap();
//! assert_eq!(session.board().owned_count(1), 2);
//! ```

pub mod config;
pub mod error;
pub mod player;
pub mod session;

pub use tile_claim_core as core;
pub use tile_claim_types as types;

pub use config::SessionConfig;
pub use error::{SessionError, TurnError};
pub use player::{PlayerProfile, PlayerState};
pub use session::{GameSession, Phase};
