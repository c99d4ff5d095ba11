//! Engine errors.
//!
//! Every variant is fatal for the match: it means the engine or a decision
//! provider broke a rule that legal play can never break. Nothing is retried
//! and no substitute decision is made.

use thiserror::Error;

use super::action::Action;
use super::player::PlayerId;
use super::round::Round;
use crate::cards::Card;

/// Result alias used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("cannot give up {requested} {card} card(s): only {held} held")]
    MissingCard { card: Card, requested: u32, held: u32 },

    #[error("draw from an empty deck")]
    EmptyDeck,

    #[error("hands hold {held} {card} card(s) but only {multiplicity} exist")]
    SupplyOverdrawn { card: Card, held: u32, multiplicity: u32 },

    #[error("{card} cards out of balance: expected {expected}, found {found}")]
    ConservationBroken { card: Card, expected: u32, found: u32 },

    #[error("expected exactly one Token in play, found {found}")]
    TokenCount { found: u32 },

    #[error("{player} chose {action}, which is not legal in {round}")]
    IllegalAction { player: PlayerId, action: Action, round: Round },

    #[error("{player} reacted with {action}, which is not a legal reaction")]
    IllegalReaction { player: PlayerId, action: Action },

    #[error("{player} targeted {target}, who is not an opponent")]
    InvalidTarget { player: PlayerId, target: PlayerId },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}
