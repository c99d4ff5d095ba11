//! Core engine types: players, state, actions, rounds, RNG, configuration, errors.
//!
//! This module contains the building blocks every other module works on.
//! Turn logic lives in `rules`; action effects live in `resolution`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod round;
pub mod state;

pub use action::{Action, ActionKind, ActionRecord};
pub use config::{MatchConfig, SimulationConfig, HAND_LIMIT, OPENING_HAND};
pub use error::{EngineError, EngineResult};
pub use player::{Player, PlayerId, PlayerMap, WINNING_SCORE};
pub use rng::GameRng;
pub use round::Round;
pub use state::MatchState;
