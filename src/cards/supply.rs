//! Deck construction.
//!
//! The full deck is built once per match. At every round boundary the deck is
//! rebuilt from whatever is not currently held by a player.

use super::card::{Card, CardCounts};
use crate::core::error::{EngineError, EngineResult};
use crate::core::player::{Player, PlayerMap};
use crate::core::rng::GameRng;

/// Build the whole card population, shuffled.
#[must_use]
pub fn build_full_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = CardCounts::full_supply().to_cards();
    rng.shuffle(&mut deck);
    deck
}

/// Per-kind sum of every player's hand.
#[must_use]
pub fn held_counts(players: &PlayerMap<Player>) -> CardCounts {
    let mut held = CardCounts::new();
    for (_, player) in players.iter() {
        held.add_all(&player.hand.counts());
    }
    held
}

/// Build the deck for the next round from cards not held by any player.
///
/// For every kind the new deck holds `multiplicity - held`. The Token is
/// included only if no hand holds it. Fails with
/// [`EngineError::SupplyOverdrawn`] if the hands hold more of a kind than
/// exists.
pub fn build_residual_deck(players: &PlayerMap<Player>, rng: &mut GameRng) -> EngineResult<Vec<Card>> {
    let held = held_counts(players);

    let mut residual = CardCounts::new();
    for card in Card::ALL {
        let multiplicity = card.multiplicity();
        let in_hands = held.get(card);
        if in_hands > multiplicity {
            return Err(EngineError::SupplyOverdrawn {
                card,
                held: in_hands,
                multiplicity,
            });
        }
        residual.add(card, multiplicity - in_hands);
    }

    let mut deck = residual.to_cards();
    rng.shuffle(&mut deck);
    Ok(deck)
}
