//! Card kinds and their fixed multiplicities.
//!
//! The game has six kinds of card. Every kind has a fixed number of copies
//! that exists for the whole match; cards only ever move between the deck,
//! hands and the discard tally.

use serde::{Deserialize, Serialize};

/// A kind of card.
///
/// Cards are interchangeable within a kind, so the engine never tracks
/// individual card identities - only counts per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    /// The single scarce card needed to win ("Needle").
    Token,
    /// Spent four at a time to buy sheep ("Hay").
    Resource,
    /// Makes the target forfeit their hand ("Yeet").
    Strike,
    /// Flips the pending outcome of a contested action ("No").
    Veto,
    /// Costs the target one sheep ("Skrrt").
    Penalty,
    /// Exchanges hands with the target ("Swap").
    Trade,
}

impl Card {
    /// Every card kind, in canonical order.
    pub const ALL: [Card; 6] = [
        Card::Token,
        Card::Resource,
        Card::Strike,
        Card::Veto,
        Card::Penalty,
        Card::Trade,
    ];

    /// Number of copies of this kind in the whole game.
    #[must_use]
    pub const fn multiplicity(self) -> u32 {
        match self {
            Card::Token => 1,
            Card::Resource => 45,
            Card::Strike => 5,
            Card::Veto => 8,
            Card::Penalty => 2,
            Card::Trade => 5,
        }
    }

    /// Position of this kind in [`Card::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Card::Token => "Token",
            Card::Resource => "Resource",
            Card::Strike => "Strike",
            Card::Veto => "Veto",
            Card::Penalty => "Penalty",
            Card::Trade => "Trade",
        };
        f.write_str(name)
    }
}

/// Total number of cards in the game.
pub const TOTAL_CARDS: u32 = {
    let mut total = 0;
    let mut i = 0;
    while i < Card::ALL.len() {
        total += Card::ALL[i].multiplicity();
        i += 1;
    }
    total
};

/// Per-kind card tally.
///
/// Used for the discard pile, census checks and supply arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardCounts {
    counts: [u32; 6],
}

impl CardCounts {
    /// An empty tally.
    #[must_use]
    pub const fn new() -> Self {
        Self { counts: [0; 6] }
    }

    /// A tally holding every card in the game.
    #[must_use]
    pub fn full_supply() -> Self {
        let mut counts = Self::new();
        for card in Card::ALL {
            counts.add(card, card.multiplicity());
        }
        counts
    }

    /// Count for one kind.
    #[must_use]
    pub fn get(&self, card: Card) -> u32 {
        self.counts[card.index()]
    }

    /// Add `count` cards of a kind.
    pub fn add(&mut self, card: Card, count: u32) {
        self.counts[card.index()] += count;
    }

    /// Add every card of another tally.
    pub fn add_all(&mut self, other: &CardCounts) {
        for card in Card::ALL {
            self.add(card, other.get(card));
        }
    }

    /// Remove `count` cards of a kind.
    ///
    /// Returns `false` and leaves the tally untouched if fewer are present.
    pub fn remove(&mut self, card: Card, count: u32) -> bool {
        let slot = &mut self.counts[card.index()];
        if *slot < count {
            return false;
        }
        *slot -= count;
        true
    }

    /// Total number of cards across all kinds.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Check if the tally is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Reset every count to zero.
    pub fn clear(&mut self) {
        self.counts = [0; 6];
    }

    /// Iterate over `(kind, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Card, u32)> + '_ {
        Card::ALL.into_iter().map(move |card| (card, self.get(card)))
    }

    /// Tally an ordered sequence of cards (e.g. a deck).
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = Self::new();
        for &card in cards {
            counts.add(card, 1);
        }
        counts
    }

    /// Expand the tally into a card sequence in canonical order.
    #[must_use]
    pub fn to_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.total() as usize);
        for (card, count) in self.iter() {
            cards.extend(std::iter::repeat(card).take(count as usize));
        }
        cards
    }
}
