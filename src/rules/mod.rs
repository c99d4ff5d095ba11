//! Match rules.
//!
//! - `engine`: the [`Engine`] type and the plumbing shared by every rule
//! - `round`: turns, drawing and the hand limit
//! - `controller`: dealing, the round schedule, rebuilds and the result

mod controller;
mod engine;
mod round;

pub use controller::{MatchOutcome, MatchResult, Standing};
pub use engine::{Engine, Providers};
