//! Cards, hands and the card supply.
//!
//! - `Card`: the six card kinds and their fixed multiplicities
//! - `CardCounts`: per-kind tallies
//! - `Hand`: a player's multiset of cards
//! - `supply`: full and residual deck construction

mod card;
mod hand;
pub mod supply;

pub use card::{Card, CardCounts, TOTAL_CARDS};
pub use hand::{Hand, SHEEP_PRICE};
pub use supply::{build_full_deck, build_residual_deck, held_counts};
