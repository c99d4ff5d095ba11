//! Strike resolution, including counter-strikes.
//!
//! A Strike that survives its contest gives the target one chance to answer
//! with a Strike of their own at the aggressor. The counter is resolved by
//! the same procedure, so counters to counters nest naturally; each level
//! spends a Strike card, which bounds the depth by the five Strikes in the
//! game. If a counter lands, the original target is spared.
//!
//! A landed Strike empties the target's hand. In the wide-blast round the
//! target's neighbours (other than the aggressor) also lose half their hand.

use tracing::debug;

use crate::core::{Action, EngineError, EngineResult, PlayerId};
use crate::observe::{MatchEvent, MatchObserver};
use crate::rules::Engine;

impl<O: MatchObserver> Engine<O> {
    /// Resolve a paid-for Strike from `aggressor` at `target`.
    ///
    /// Returns `true` if the Strike landed on someone: the target, or the
    /// aggressor via a successful counter.
    pub fn resolve_strike(&mut self, aggressor: PlayerId, target: PlayerId) -> EngineResult<bool> {
        let pending = Action::PlayStrike { target };
        if !self.resolve_contest(&pending)? {
            return Ok(false);
        }

        let reaction = self.providers[target].react_to_strike(&self.state, target, aggressor, &mut self.rng);
        match reaction {
            Action::Pass => {}
            Action::PlayStrike { target: countered } if countered == aggressor => {
                self.play(target, reaction)?;
                debug!(player = %target, %aggressor, "counter-strike");
                if self.resolve_strike(target, aggressor)? {
                    return Ok(true);
                }
            }
            other => {
                return Err(EngineError::IllegalReaction {
                    player: target,
                    action: other,
                });
            }
        }

        self.suffer_strike(aggressor, target)?;
        Ok(true)
    }

    /// Empty the target's hand and apply the wide blast if the round has it.
    fn suffer_strike(&mut self, aggressor: PlayerId, target: PlayerId) -> EngineResult<()> {
        let forfeited = self.state.player_mut(target).hand.drop_all();
        self.state.put_hand_out_of_play(&forfeited, &mut self.rng);
        self.emit(MatchEvent::Struck {
            aggressor,
            target,
            cards: forfeited.size(),
        });

        if self.state.round().has_wide_blast() {
            for neighbour in self.state.neighbours(target, aggressor) {
                self.forfeit_half(neighbour)?;
            }
        }
        Ok(())
    }

    /// Discard half the hand, rounded down, one chosen card at a time.
    fn forfeit_half(&mut self, player: PlayerId) -> EngineResult<()> {
        let count = self.state.player(player).hand.size() / 2;
        for _ in 0..count {
            self.discard_one(player)?;
        }
        self.emit(MatchEvent::Forfeited { player, cards: count });
        Ok(())
    }
}
