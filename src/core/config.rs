//! Match configuration.
//!
//! The rules themselves (multiplicities, win condition, card effects) are
//! fixed. What can be configured is who plays and how the match is run:
//! - `MatchConfig`: seats, seed, invariant auditing
//! - `SimulationConfig`: how many matches a batch runs

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Cards dealt to every player before round one.
pub const OPENING_HAND: usize = 4;

/// Hand size above which a player discards after drawing.
pub const HAND_LIMIT: u32 = 6;

/// Fewest players a match supports.
pub const MIN_PLAYERS: usize = 2;

/// Most players a match supports.
pub const MAX_PLAYERS: usize = 8;

/// Configuration for a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Player names in turn order. The length is the player count.
    pub player_names: Vec<String>,

    /// Random seed. Same seed and providers produce the same match.
    pub seed: u64,

    /// Check card conservation and Token uniqueness after every turn
    /// and at every round boundary.
    pub verify_invariants: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_names: ["Jan", "Megie", "Katka", "Tobik"]
                .into_iter()
                .map(String::from)
                .collect(),
            seed: 42,
            verify_invariants: false,
        }
    }
}

impl MatchConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the players, in turn order.
    pub fn with_players<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Use `count` players with generated names.
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_names = (1..=count).map(|i| format!("Player {i}")).collect();
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable invariant auditing.
    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.verify_invariants = enabled;
        self
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Check the configuration can start a match.
    pub fn validate(&self) -> EngineResult<()> {
        let count = self.player_count();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(EngineError::InvalidConfig {
                message: format!("player count must be {MIN_PLAYERS}-{MAX_PLAYERS}, got {count}"),
            });
        }
        if let Some(name) = self.player_names.iter().find(|name| name.trim().is_empty()) {
            return Err(EngineError::InvalidConfig {
                message: format!("player name {name:?} is blank"),
            });
        }
        Ok(())
    }
}

/// Configuration for a batch of matches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Template for every match. Its seed seeds the whole batch.
    pub base: MatchConfig,

    /// Number of matches to play.
    pub matches: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            base: MatchConfig::default(),
            matches: 1000,
        }
    }
}

impl SimulationConfig {
    /// Create a new simulation config.
    pub fn new(base: MatchConfig) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Set the number of matches.
    pub fn with_matches(mut self, matches: u32) -> Self {
        self.matches = matches;
        self
    }
}
