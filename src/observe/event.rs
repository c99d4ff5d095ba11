//! Match events.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Action, ActionRecord, PlayerId, Round};
use crate::rules::{MatchResult, Standing};

/// Something observable that happened during a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A round began with a deck of `deck_size` cards.
    RoundStarted { round: Round, deck_size: usize },

    /// A player played an action or a reaction (cost already paid).
    ActionPlayed(ActionRecord),

    /// A contest finished. `proceeds` is false when the action was vetoed.
    Contested {
        action: Action,
        vetoes: u32,
        sweeps: u32,
        proceeds: bool,
    },

    /// A player bought a sheep.
    SheepBought { player: PlayerId, score: u32 },

    /// An unopposed purchase reaction earned a free sheep.
    BonusSheep { player: PlayerId, score: u32 },

    /// A Strike landed; the target forfeited `cards` cards.
    Struck {
        aggressor: PlayerId,
        target: PlayerId,
        cards: u32,
    },

    /// A neighbour of a Strike target forfeited `cards` cards.
    Forfeited { player: PlayerId, cards: u32 },

    /// A Penalty landed.
    Penalized { target: PlayerId, score: u32 },

    /// Two players exchanged hands.
    Traded { player: PlayerId, target: PlayerId },

    /// A round-three swap took `card` from the target (`None` if the
    /// target's hand was empty).
    Swapped {
        player: PlayerId,
        target: PlayerId,
        card: Option<Card>,
    },

    /// A player drew from the deck.
    Drew { player: PlayerId, card: Card },

    /// A player discarded a card of their choice.
    Discarded { player: PlayerId, card: Card },

    /// A round ended because the deck ran out.
    RoundEnded { round: Round },

    /// The match is over.
    MatchEnded {
        result: MatchResult,
        standings: Vec<Standing>,
    },
}

impl MatchEvent {
    /// The played action, if this event records one.
    #[must_use]
    pub fn action(&self) -> Option<&ActionRecord> {
        match self {
            MatchEvent::ActionPlayed(record) => Some(record),
            _ => None,
        }
    }
}
