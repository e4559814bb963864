//! Session configuration

use serde::{Deserialize, Serialize};

use crate::types::{ExhaustionPolicy, DEFAULT_ROUNDS};

/// Knobs for a [`GameSession`](crate::GameSession)
///
/// Every field has a default, so a partial JSON object deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Rounds before the final purchase phase
    pub rounds: u32,
    /// Shuffle the initial deck
    pub shuffle_deck: bool,
    /// Shuffle the seating order
    pub shuffle_turn_order: bool,
    /// RNG seed for bonuses, seating and the deck; `None` uses entropy
    pub seed: Option<u64>,
    pub exhaustion: ExhaustionPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            shuffle_deck: true,
            shuffle_turn_order: true,
            seed: None,
            exhaustion: ExhaustionPolicy::Reshuffle,
        }
    }
}

impl SessionConfig {
    /// Default configuration with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{ "rounds": 3, "exhaustion": "fail" }"#).unwrap();
        assert_eq!(config.rounds, 3);
        assert_eq!(config.exhaustion, ExhaustionPolicy::Fail);
        assert!(config.shuffle_deck);
        assert_eq!(config.seed, None);
    }
}
