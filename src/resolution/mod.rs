//! Action resolution.
//!
//! - `contest`: the veto sweep every contested play goes through
//! - `strike`: Strike, counter-strikes and the wide blast
//! - `effects`: Penalty, Trade, purchase reactions and the round-three swap
//!
//! Resolvers are methods on [`Engine`](crate::rules::Engine). They run after
//! the triggering card has been paid for.

mod contest;
mod effects;
mod strike;

pub use contest::ContestOutcome;
pub use effects::SWAP_PRICE;
