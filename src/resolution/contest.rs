//! Contest chain: the repeated veto sweep every targeted or reactive play
//! goes through before it resolves.
//!
//! The outcome starts as "proceeds". Every player, in seat order, is asked
//! whether to spend a Veto to flip the current outcome. Sweeps repeat until a
//! full sweep passes without a Veto. Who may veto is entirely up to the
//! decision providers.
//!
//! Every Veto spends a card and there are only eight, so the chain always
//! settles after at most `vetoes + 1` sweeps.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Action, EngineResult, PlayerId};
use crate::observe::{MatchEvent, MatchObserver};
use crate::rules::Engine;

/// How a contest ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestOutcome {
    /// The contested action goes ahead.
    pub proceeds: bool,
    /// Veto cards spent.
    pub vetoes: u32,
    /// Sweeps over the table, including the final quiet one.
    pub sweeps: u32,
}

impl<O: MatchObserver> Engine<O> {
    /// Run the contest chain for `pending`.
    ///
    /// Returns `true` if the action proceeds.
    pub fn resolve_contest(&mut self, pending: &Action) -> EngineResult<bool> {
        Ok(self.contest(pending)?.proceeds)
    }

    /// Run the contest chain for `pending`, reporting vetoes and sweeps.
    pub fn contest(&mut self, pending: &Action) -> EngineResult<ContestOutcome> {
        let seats: Vec<PlayerId> = self.state.players().player_ids().collect();
        let mut outcome = ContestOutcome {
            proceeds: true,
            vetoes: 0,
            sweeps: 0,
        };

        loop {
            outcome.sweeps += 1;
            let mut vetoed = false;

            for &seat in &seats {
                let veto = self.providers[seat].decide_veto(&self.state, seat, pending, outcome.proceeds);
                if veto {
                    self.play(seat, Action::PlayVeto)?;
                    outcome.proceeds = !outcome.proceeds;
                    outcome.vetoes += 1;
                    vetoed = true;
                }
            }

            if !vetoed {
                break;
            }
        }

        debug!(%pending, vetoes = outcome.vetoes, proceeds = outcome.proceeds, "contest settled");
        self.emit(MatchEvent::Contested {
            action: *pending,
            vetoes: outcome.vetoes,
            sweeps: outcome.sweeps,
            proceeds: outcome.proceeds,
        });
        Ok(outcome)
    }
}
