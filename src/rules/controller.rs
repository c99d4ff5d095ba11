//! Match controller: dealing, the round schedule, rebuilds and the result.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::build_residual_deck;
use crate::core::{EngineResult, PlayerId, Round, OPENING_HAND};
use crate::observe::{MatchEvent, MatchObserver};

use super::engine::Engine;

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// Single winner.
    Winner(PlayerId),
    /// No one met the win condition by the end of the last round.
    Draw,
}

impl MatchResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, MatchResult::Winner(p) if *p == player)
    }
}

/// One player's position at the end of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub score: u32,
    pub holds_token: bool,
    pub hand_size: u32,
}

/// Everything a finished match reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub result: MatchResult,
    /// Rounds actually played, 1 to 3.
    pub rounds_played: u32,
    /// Final standings in turn order.
    pub standings: Vec<Standing>,
}

impl<O: MatchObserver> Engine<O> {
    /// Play a whole match: deal, then up to three rounds.
    ///
    /// After each round the first player in turn order holding the Token
    /// with enough sheep wins. Otherwise the deck is rebuilt from the cards
    /// nobody holds and the next round starts. No winner after the last
    /// round is a draw.
    pub fn play_match(&mut self) -> EngineResult<MatchOutcome> {
        self.deal_opening_hands()?;
        self.audit()?;

        let mut result = MatchResult::Draw;
        let mut rounds_played = 0;

        for (i, &round) in Round::PLAYED.iter().enumerate() {
            if i > 0 {
                self.state.set_round(round);
                self.rebuild_deck()?;
            }

            self.play_round()?;
            rounds_played += 1;

            if let Some(winner) = self.state.winner() {
                result = MatchResult::Winner(winner);
                break;
            }
        }

        let standings = self.standings();
        self.emit(MatchEvent::MatchEnded {
            result,
            standings: standings.clone(),
        });

        Ok(MatchOutcome {
            result,
            rounds_played,
            standings,
        })
    }

    /// Deal the opening hands: each player in turn order draws four cards.
    pub fn deal_opening_hands(&mut self) -> EngineResult<()> {
        let seats: Vec<PlayerId> = self.state.players().player_ids().collect();
        for seat in seats {
            for _ in 0..OPENING_HAND {
                let card = self.state.draw()?;
                self.state.player_mut(seat).hand.take(card);
            }
            debug!(player = %seat, hand = %self.state.player(seat).hand, "dealt");
        }
        Ok(())
    }

    /// Replace the deck with the residual deck and clear the discard tally.
    pub fn rebuild_deck(&mut self) -> EngineResult<()> {
        let deck = build_residual_deck(self.state.players(), &mut self.rng)?;
        debug!(deck_size = deck.len(), "deck rebuilt");
        self.state.rebuild(deck);
        self.audit()
    }

    /// Current standings in turn order.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        self.state
            .players()
            .iter()
            .map(|(id, player)| Standing {
                player: id,
                name: player.name.clone(),
                score: player.score,
                holds_token: player.hand.holds_token(),
                hand_size: player.hand.size(),
            })
            .collect()
    }
}
