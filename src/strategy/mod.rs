//! Decision providers.
//!
//! The engine never decides anything on a player's behalf. At every choice
//! point it calls the player's `DecisionProvider` and applies the answer.
//!
//! ## Contract
//!
//! - Answers must be consistent with the player's hand. The engine does not
//!   repair them: spending a card that is not held fails the match with
//!   [`EngineError::MissingCard`](crate::core::EngineError::MissingCard).
//! - Actions must be legal for the round and target an opponent, otherwise
//!   the match fails with `IllegalAction`, `IllegalReaction` or
//!   `InvalidTarget`.
//!
//! Providers receive the whole table; what they choose to look at is their
//! own business.

mod basic;

pub use basic::BasicStrategy;

use crate::cards::Card;
use crate::core::{Action, GameRng, MatchState, PlayerId};

/// A player's decision-making capability.
pub trait DecisionProvider {
    /// Choose the next action of the turn.
    ///
    /// The kind must be in `hand.legal_action_kinds(state.round())` and a
    /// target must be another player. Returning `Pass` ends the action phase.
    fn choose_action(&mut self, state: &MatchState, me: PlayerId, rng: &mut GameRng) -> Action;

    /// React to another player buying a sheep in round one.
    ///
    /// `Pass` or `PlayPenalty` (conventionally targeting `me`).
    fn react_to_sheep_purchase(&mut self, state: &MatchState, me: PlayerId, rng: &mut GameRng) -> Action;

    /// React to a Strike from `aggressor` that survived its contest.
    ///
    /// `Pass` or `PlayStrike { target: aggressor }`.
    fn react_to_strike(
        &mut self,
        state: &MatchState,
        me: PlayerId,
        aggressor: PlayerId,
        rng: &mut GameRng,
    ) -> Action;

    /// In round three, optionally swap for an opponent's card instead of drawing.
    ///
    /// Only asked when the hand has at least two cards and no Token.
    fn maybe_round3_swap(&mut self, state: &MatchState, me: PlayerId, rng: &mut GameRng) -> Option<PlayerId>;

    /// Decide whether to spend a Veto to flip `current_outcome` of `pending`.
    fn decide_veto(&mut self, state: &MatchState, me: PlayerId, pending: &Action, current_outcome: bool) -> bool;

    /// Pick a held card to discard.
    fn choose_card_to_discard(&mut self, state: &MatchState, me: PlayerId) -> Card;
}
