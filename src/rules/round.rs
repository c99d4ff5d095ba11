//! Round engine: turn order, actions, drawing and the hand limit.
//!
//! A round runs while the deck has cards. Players take turns in seat order;
//! the round stops the moment the deck is empty, even part-way through a
//! pass over the seats.
//!
//! A turn is:
//! 1. Actions until the player passes. Each action is paid for before it
//!    resolves.
//! 2. One card: the round-three swap if eligible and taken, otherwise the
//!    top card of the deck.
//! 3. At most one discard if the hand is over the limit.

use tracing::{debug, trace};

use crate::core::{Action, EngineError, EngineResult, PlayerId, HAND_LIMIT};
use crate::observe::{MatchEvent, MatchObserver};

use super::engine::Engine;

impl<O: MatchObserver> Engine<O> {
    /// Play the current round until the deck is exhausted.
    pub fn play_round(&mut self) -> EngineResult<()> {
        let round = self.state.round();
        self.emit(MatchEvent::RoundStarted {
            round,
            deck_size: self.state.deck().len(),
        });

        let seats: Vec<PlayerId> = self.state.players().player_ids().collect();
        'round: while !self.state.deck().is_empty() {
            for &seat in &seats {
                if self.state.deck().is_empty() {
                    break 'round;
                }
                self.take_turn(seat)?;
                self.audit()?;
            }
        }

        self.emit(MatchEvent::RoundEnded { round });
        Ok(())
    }

    /// Play one full turn for `me`.
    pub fn take_turn(&mut self, me: PlayerId) -> EngineResult<()> {
        loop {
            let action = self.providers[me].choose_action(&self.state, me, &mut self.rng);
            if action == Action::Pass {
                break;
            }
            self.check_action(me, &action)?;
            debug!(player = %me, %action, "action");
            self.play(me, action)?;
            self.resolve_action(me, action)?;
        }

        self.draw_step(me)?;

        if self.state.player(me).hand.size() > HAND_LIMIT {
            self.discard_one(me)?;
        }
        Ok(())
    }

    /// Reject actions the player may not start right now.
    fn check_action(&self, me: PlayerId, action: &Action) -> EngineResult<()> {
        let round = self.state.round();
        let legal = self.state.player(me).hand.legal_action_kinds(round);
        if !legal.contains(&action.kind()) {
            return Err(EngineError::IllegalAction {
                player: me,
                action: *action,
                round,
            });
        }
        match action.target() {
            Some(target) if !self.state.is_opponent(me, target) => {
                Err(EngineError::InvalidTarget { player: me, target })
            }
            _ => Ok(()),
        }
    }

    /// Apply the effect of a paid action.
    fn resolve_action(&mut self, me: PlayerId, action: Action) -> EngineResult<()> {
        match action {
            Action::BuySheep => {
                let player = self.state.player_mut(me);
                player.gain_sheep();
                let score = player.score;
                self.emit(MatchEvent::SheepBought { player: me, score });
                if self.state.round().has_purchase_reactions() {
                    self.resolve_purchase_reactions(me)?;
                }
            }
            Action::PlayStrike { target } => {
                self.resolve_strike(me, target)?;
            }
            Action::PlayPenalty { target } => {
                self.resolve_penalty(me, target)?;
            }
            Action::PlayTrade { target } => {
                self.resolve_trade(me, target)?;
            }
            Action::Pass | Action::PlayVeto | Action::PlayRoundThreeSwap { .. } => {
                return Err(EngineError::IllegalAction {
                    player: me,
                    action,
                    round: self.state.round(),
                });
            }
        }
        Ok(())
    }

    /// Give the player their one card for the turn.
    fn draw_step(&mut self, me: PlayerId) -> EngineResult<()> {
        if self.try_round_three_swap(me)? {
            return Ok(());
        }

        let card = self.state.draw()?;
        self.state.player_mut(me).hand.take(card);
        trace!(player = %me, %card, "drew");
        self.emit(MatchEvent::Drew { player: me, card });
        Ok(())
    }
}
