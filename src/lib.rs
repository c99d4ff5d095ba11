//! # haystack
//!
//! A deterministic engine for a round-based card bluffing game: collect
//! sheep, hold the Token, and survive everyone else's Strikes, Penalties and
//! Trades. Every contested play can be vetoed, and every veto can be
//! vetoed back.
//!
//! ## Design Principles
//!
//! 1. **Decisions Are Injected**: The engine never chooses for a player.
//!    Every choice point calls that player's [`DecisionProvider`].
//!
//! 2. **Conservation Is Checked**: Every card is always in the deck, a hand
//!    or the discard tally. Audit mode verifies this after every turn.
//!
//! 3. **Deterministic**: One explicit [`GameRng`] per match. Same seed, same
//!    providers, same match.
//!
//! ## Modules
//!
//! - `core`: Players, state, actions, rounds, RNG, configuration, errors
//! - `cards`: Card kinds, hands and deck construction
//! - `strategy`: The `DecisionProvider` trait and `BasicStrategy`
//! - `observe`: Match events and observers
//! - `rules`: The `Engine`: match controller and round engine
//! - `resolution`: Contest chain and action resolvers
//! - `simulation`: Batch runs and aggregate stats
//!
//! ```
//! use haystack::{Engine, MatchConfig, NullObserver};
//!
//! let config = MatchConfig::new().with_seed(7);
//! let mut engine = Engine::with_basic_strategies(&config, NullObserver).unwrap();
//! let outcome = engine.play_match().unwrap();
//! assert!((1..=3).contains(&outcome.rounds_played));
//! ```

pub mod cards;
pub mod core;
pub mod observe;
pub mod resolution;
pub mod rules;
pub mod simulation;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, ActionRecord, EngineError, EngineResult, GameRng, MatchConfig, MatchState, Player,
    PlayerId, PlayerMap, Round, SimulationConfig,
};

pub use crate::cards::{Card, CardCounts, Hand};

pub use crate::strategy::{BasicStrategy, DecisionProvider};

pub use crate::observe::{EventLog, MatchEvent, MatchObserver, NullObserver, TracingObserver};

pub use crate::rules::{Engine, MatchOutcome, MatchResult, Providers, Standing};

pub use crate::resolution::ContestOutcome;

pub use crate::simulation::{ActionTally, SimulationStats};
