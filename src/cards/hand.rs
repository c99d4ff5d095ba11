//! Per-player hand of cards.
//!
//! A hand is a multiset: a flag for the Token plus a count for every other
//! kind. All mutation goes through [`Hand::take`] and the `drop*` methods so
//! that a hand can never hold a negative count.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardCounts};
use crate::core::action::ActionKind;
use crate::core::error::{EngineError, EngineResult};
use crate::core::rng::GameRng;
use crate::core::round::Round;

/// Resource cards needed to buy one sheep.
pub const SHEEP_PRICE: u32 = 4;

/// A player's hand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    token: bool,
    resource: u32,
    strike: u32,
    veto: u32,
    penalty: u32,
    trade: u32,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from a list of cards.
    ///
    /// Holding the Token twice is impossible; a repeated Token is ignored.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut hand = Self::new();
        for &card in cards {
            hand.take(card);
        }
        hand
    }

    /// Number of cards of a kind held (0 or 1 for the Token).
    #[must_use]
    pub fn count(&self, card: Card) -> u32 {
        match card {
            Card::Token => u32::from(self.token),
            Card::Resource => self.resource,
            Card::Strike => self.strike,
            Card::Veto => self.veto,
            Card::Penalty => self.penalty,
            Card::Trade => self.trade,
        }
    }

    /// Check if the hand holds the Token.
    #[must_use]
    pub fn holds_token(&self) -> bool {
        self.token
    }

    /// Total number of cards held, the Token counting as one.
    #[must_use]
    pub fn size(&self) -> u32 {
        Card::ALL.iter().map(|&card| self.count(card)).sum()
    }

    /// Check if the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Per-kind view of the hand.
    #[must_use]
    pub fn counts(&self) -> CardCounts {
        let mut counts = CardCounts::new();
        for card in Card::ALL {
            counts.add(card, self.count(card));
        }
        counts
    }

    /// Add one card to the hand.
    pub fn take(&mut self, card: Card) {
        match card {
            Card::Token => self.token = true,
            Card::Resource => self.resource += 1,
            Card::Strike => self.strike += 1,
            Card::Veto => self.veto += 1,
            Card::Penalty => self.penalty += 1,
            Card::Trade => self.trade += 1,
        }
    }

    /// Remove `count` cards of a kind.
    ///
    /// Fails with [`EngineError::MissingCard`] (leaving the hand untouched)
    /// if fewer cards are held.
    pub fn drop(&mut self, card: Card, count: u32) -> EngineResult<()> {
        let held = self.count(card);
        if held < count {
            return Err(EngineError::MissingCard {
                card,
                requested: count,
                held,
            });
        }

        match card {
            Card::Token => self.token &= count == 0,
            Card::Resource => self.resource -= count,
            Card::Strike => self.strike -= count,
            Card::Veto => self.veto -= count,
            Card::Penalty => self.penalty -= count,
            Card::Trade => self.trade -= count,
        }
        Ok(())
    }

    /// Remove one card chosen uniformly among all held card instances.
    ///
    /// Returns `None` if the hand is empty.
    pub fn drop_random(&mut self, rng: &mut GameRng) -> Option<Card> {
        let size = self.size() as usize;
        if size == 0 {
            return None;
        }

        let mut pick = rng.gen_range_usize(0..size);
        for card in Card::ALL {
            let held = self.count(card) as usize;
            if pick < held {
                self.drop(card, 1).ok()?;
                return Some(card);
            }
            pick -= held;
        }
        None
    }

    /// Clear the hand, returning what it held.
    pub fn drop_all(&mut self) -> Hand {
        std::mem::take(self)
    }

    /// Action kinds this hand can currently start in the given round.
    #[must_use]
    pub fn legal_action_kinds(&self, round: Round) -> Vec<ActionKind> {
        let mut kinds = vec![ActionKind::Pass];
        if self.resource >= SHEEP_PRICE {
            kinds.push(ActionKind::BuySheep);
        }
        if self.strike > 0 {
            kinds.push(ActionKind::PlayStrike);
        }
        if self.penalty > 0 && round.allows_penalty() {
            kinds.push(ActionKind::PlayPenalty);
        }
        if self.trade > 0 {
            kinds.push(ActionKind::PlayTrade);
        }
        kinds
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        write!(f, "[")?;
        for (card, count) in self.counts().iter().filter(|(_, count)| *count > 0) {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{card}x{count}")?;
            first = false;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_and_count() {
        let mut hand = Hand::new();
        hand.take(Card::Resource);
        hand.take(Card::Resource);
        hand.take(Card::Token);

        assert_eq!(hand.count(Card::Resource), 2);
        assert!(hand.holds_token());
        assert_eq!(hand.size(), 3);
    }

    #[test]
    fn test_drop_insufficient() {
        let mut hand = Hand::from_cards(&[Card::Veto]);

        let err = hand.drop(Card::Veto, 2).unwrap_err();
        assert_eq!(
            err,
            EngineError::MissingCard {
                card: Card::Veto,
                requested: 2,
                held: 1,
            }
        );
        assert_eq!(hand.count(Card::Veto), 1);

        assert!(hand.drop(Card::Token, 1).is_err());
    }

    #[test]
    fn test_drop_token() {
        let mut hand = Hand::from_cards(&[Card::Token, Card::Trade]);
        hand.drop(Card::Token, 1).unwrap();

        assert!(!hand.holds_token());
        assert_eq!(hand.size(), 1);
    }

    #[test]
    fn test_drop_random_removes_held_card() {
        let mut rng = GameRng::new(7);
        let mut hand = Hand::from_cards(&[Card::Strike, Card::Veto, Card::Veto]);

        let mut dropped = Vec::new();
        while let Some(card) = hand.drop_random(&mut rng) {
            dropped.push(card);
        }
        dropped.sort();

        assert_eq!(dropped, vec![Card::Strike, Card::Veto, Card::Veto]);
        assert!(hand.is_empty());
    }

    #[test]
    fn test_drop_random_is_weighted_by_count() {
        let mut rng = GameRng::new(42);
        let mut resource = 0;
        for _ in 0..1000 {
            let mut hand = Hand::from_cards(&[Card::Resource, Card::Resource, Card::Resource, Card::Trade]);
            if hand.drop_random(&mut rng) == Some(Card::Resource) {
                resource += 1;
            }
        }
        // Expected 750
        assert!((650..850).contains(&resource), "got {resource}");
    }

    #[test]
    fn test_drop_all_returns_contents() {
        let mut hand = Hand::from_cards(&[Card::Token, Card::Penalty, Card::Resource]);
        let before = hand.clone();

        let dropped = hand.drop_all();

        assert_eq!(dropped, before);
        assert!(hand.is_empty());
        assert!(!hand.holds_token());
    }

    #[test]
    fn test_legal_action_kinds() {
        let hand = Hand::from_cards(&[
            Card::Resource,
            Card::Resource,
            Card::Resource,
            Card::Resource,
            Card::Penalty,
            Card::Trade,
        ]);

        assert_eq!(
            hand.legal_action_kinds(Round::One),
            vec![ActionKind::Pass, ActionKind::BuySheep, ActionKind::PlayTrade]
        );
        assert_eq!(
            hand.legal_action_kinds(Round::Two),
            vec![
                ActionKind::Pass,
                ActionKind::BuySheep,
                ActionKind::PlayPenalty,
                ActionKind::PlayTrade
            ]
        );
    }

    #[test]
    fn test_legal_action_kinds_empty_hand() {
        assert_eq!(Hand::new().legal_action_kinds(Round::Three), vec![ActionKind::Pass]);
    }

    #[test]
    fn test_display() {
        let hand = Hand::from_cards(&[Card::Veto, Card::Token, Card::Veto]);
        assert_eq!(format!("{hand}"), "[Tokenx1, Vetox2]");
    }
}
