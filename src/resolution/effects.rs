//! Penalty, Trade, the purchase reaction cascade and the round-three swap.

use tracing::debug;

use crate::core::{Action, EngineError, EngineResult, PlayerId};
use crate::observe::{MatchEvent, MatchObserver};
use crate::rules::Engine;

/// Cards discarded to pay for a round-three swap.
pub const SWAP_PRICE: u32 = 2;

impl<O: MatchObserver> Engine<O> {
    /// Resolve a paid-for Penalty at `target`: one sheep lost, floored at zero.
    ///
    /// Returns `true` if the Penalty landed.
    pub fn resolve_penalty(&mut self, aggressor: PlayerId, target: PlayerId) -> EngineResult<bool> {
        let pending = Action::PlayPenalty { target };
        let round = self.state.round();
        if !round.allows_penalty() {
            return Err(EngineError::IllegalAction {
                player: aggressor,
                action: pending,
                round,
            });
        }

        if !self.resolve_contest(&pending)? {
            return Ok(false);
        }

        let player = self.state.player_mut(target);
        player.suffer_penalty();
        let score = player.score;
        self.emit(MatchEvent::Penalized { target, score });
        Ok(true)
    }

    /// Resolve a paid-for Trade: the two hands are exchanged wholesale.
    ///
    /// Returns `true` if the hands were exchanged.
    pub fn resolve_trade(&mut self, aggressor: PlayerId, target: PlayerId) -> EngineResult<bool> {
        let pending = Action::PlayTrade { target };
        if !self.resolve_contest(&pending)? {
            return Ok(false);
        }

        self.state.exchange_hands(aggressor, target);
        self.emit(MatchEvent::Traded {
            player: aggressor,
            target,
        });
        Ok(true)
    }

    /// Give every other player the chance to answer a purchase with a Penalty.
    ///
    /// Sweeps the table after the buyer in turn order, repeating while the
    /// last sweep drew a reaction. A Penalty reaction is contested with the
    /// reacting player as its nominal target; if it goes through, that player
    /// gets a sheep for free.
    pub fn resolve_purchase_reactions(&mut self, buyer: PlayerId) -> EngineResult<()> {
        let others: Vec<PlayerId> = self.state.other_players(buyer).collect();

        loop {
            let mut reacted = false;

            for &seat in &others {
                let reaction = self.providers[seat].react_to_sheep_purchase(&self.state, seat, &mut self.rng);
                match reaction {
                    Action::Pass => {}
                    Action::PlayPenalty { .. } => {
                        self.play(seat, reaction)?;
                        reacted = true;

                        let pending = Action::PlayPenalty { target: seat };
                        if self.resolve_contest(&pending)? {
                            let player = self.state.player_mut(seat);
                            player.gain_sheep();
                            let score = player.score;
                            self.emit(MatchEvent::BonusSheep { player: seat, score });
                        }
                    }
                    other => {
                        return Err(EngineError::IllegalReaction {
                            player: seat,
                            action: other,
                        });
                    }
                }
            }

            if !reacted {
                return Ok(());
            }
        }
    }

    /// Offer the round-three swap in place of the draw.
    ///
    /// Returns `true` if the swap was taken (the player then does not draw).
    pub fn try_round_three_swap(&mut self, me: PlayerId) -> EngineResult<bool> {
        if !self.state.round().offers_card_swap() {
            return Ok(false);
        }
        let hand = &self.state.player(me).hand;
        if hand.size() < SWAP_PRICE || hand.holds_token() {
            return Ok(false);
        }

        let Some(target) = self.providers[me].maybe_round3_swap(&self.state, me, &mut self.rng) else {
            return Ok(false);
        };
        if !self.state.is_opponent(me, target) {
            return Err(EngineError::InvalidTarget { player: me, target });
        }

        self.record(me, Action::PlayRoundThreeSwap { target });
        for _ in 0..SWAP_PRICE {
            self.discard_one(me)?;
        }

        let card = self.state.player_mut(target).hand.drop_random(&mut self.rng);
        if let Some(card) = card {
            self.state.player_mut(me).hand.take(card);
        }
        debug!(player = %me, %target, ?card, "round-three swap");
        self.emit(MatchEvent::Swapped {
            player: me,
            target,
            card,
        });
        Ok(true)
    }
}
