//! A simple rule-of-thumb strategy.

use crate::cards::Card;
use crate::core::{Action, ActionKind, GameRng, MatchState, PlayerId, WINNING_SCORE};

use super::DecisionProvider;

/// Simple strategy used by the simulator.
///
/// - Buys a sheep whenever it can, otherwise plays a uniformly random legal
///   kind at a uniformly random opponent
/// - Answers purchases with a Penalty and Strikes with a counter-Strike
///   whenever it holds one
/// - Only vetoes actions aimed at itself that would currently go through
/// - Swaps in round three once it has enough sheep but no Token, aiming at
///   the richest opponent
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicStrategy;

impl BasicStrategy {
    /// Create the strategy.
    pub fn new() -> Self {
        Self
    }
}

/// Discard preference once enough sheep are owned: Resource is no longer needed.
const DISCARD_ORDER: [Card; 5] = [Card::Trade, Card::Strike, Card::Penalty, Card::Resource, Card::Veto];

impl DecisionProvider for BasicStrategy {
    fn choose_action(&mut self, state: &MatchState, me: PlayerId, rng: &mut GameRng) -> Action {
        let kinds = state.player(me).hand.legal_action_kinds(state.round());
        if kinds.contains(&ActionKind::BuySheep) {
            return Action::BuySheep;
        }

        let Some(&kind) = rng.choose(&kinds) else {
            return Action::Pass;
        };
        if kind.is_targeted() {
            let opponents: Vec<PlayerId> = state.other_players(me).collect();
            match rng.choose(&opponents) {
                Some(&target) => Action::targeted(kind, target).unwrap_or(Action::Pass),
                None => Action::Pass,
            }
        } else {
            Action::argless(kind).unwrap_or(Action::Pass)
        }
    }

    fn react_to_sheep_purchase(&mut self, state: &MatchState, me: PlayerId, _rng: &mut GameRng) -> Action {
        if state.player(me).hand.count(Card::Penalty) > 0 {
            Action::PlayPenalty { target: me }
        } else {
            Action::Pass
        }
    }

    fn react_to_strike(
        &mut self,
        state: &MatchState,
        me: PlayerId,
        aggressor: PlayerId,
        _rng: &mut GameRng,
    ) -> Action {
        if state.player(me).hand.count(Card::Strike) > 0 {
            Action::PlayStrike { target: aggressor }
        } else {
            Action::Pass
        }
    }

    fn maybe_round3_swap(&mut self, state: &MatchState, me: PlayerId, _rng: &mut GameRng) -> Option<PlayerId> {
        let player = state.player(me);
        if player.hand.holds_token() || player.score < WINNING_SCORE {
            return None;
        }

        // First opponent in turn order with the highest score
        state.other_players(me).fold(None, |best: Option<PlayerId>, candidate| match best {
            Some(current) if state.player(current).score >= state.player(candidate).score => Some(current),
            _ => Some(candidate),
        })
    }

    fn decide_veto(&mut self, state: &MatchState, me: PlayerId, pending: &Action, current_outcome: bool) -> bool {
        state.player(me).hand.count(Card::Veto) > 0 && current_outcome && pending.target() == Some(me)
    }

    fn choose_card_to_discard(&mut self, state: &MatchState, me: PlayerId) -> Card {
        let player = state.player(me);
        let hand = &player.hand;

        if player.score >= WINNING_SCORE && hand.count(Card::Resource) > 0 {
            return Card::Resource;
        }
        DISCARD_ORDER
            .into_iter()
            .find(|&card| hand.count(card) > 0)
            .unwrap_or(Card::Token)
    }
}
