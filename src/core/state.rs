//! Match state: the shared table.
//!
//! ## MatchState
//!
//! - Players in turn order (`PlayerMap<Player>`)
//! - The live deck (top = end of vec)
//! - The discard tally: cards out of play until the next round boundary
//! - The current round
//!
//! Every card of the game is, at any observable point, in exactly one of the
//! deck, a hand, or the discard tally. [`MatchState::check_invariants`]
//! verifies this.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{EngineError, EngineResult};
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use super::round::Round;
use crate::cards::{held_counts, Card, CardCounts, Hand};

/// The shared, mutable table of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    players: PlayerMap<Player>,
    deck: Vec<Card>,
    discard: CardCounts,
    round: Round,
}

impl MatchState {
    /// Create a state with the given players and deck, starting in round one.
    #[must_use]
    pub fn new(players: PlayerMap<Player>, deck: Vec<Card>) -> Self {
        Self {
            players,
            deck,
            discard: CardCounts::new(),
            round: Round::One,
        }
    }

    /// Create a state with fresh players named in turn order.
    ///
    /// Panics if `names` is empty or longer than 255.
    #[must_use]
    pub fn with_names<S: AsRef<str>>(names: &[S], deck: Vec<Card>) -> Self {
        let players = PlayerMap::new(names.len(), |id| Player::new(id, names[id.index()].as_ref()));
        Self::new(players, deck)
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    // === Players ===

    /// All players in turn order.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Get a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Get a mutable player.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// The other players of `id`, in turn order starting after `id`.
    pub fn other_players(&self, id: PlayerId) -> impl Iterator<Item = PlayerId> {
        id.others(self.player_count())
    }

    /// Check if `target` is a seat other than `me`.
    #[must_use]
    pub fn is_opponent(&self, me: PlayerId, target: PlayerId) -> bool {
        me != target && self.players.contains(target)
    }

    /// Turn-order neighbours of `target` (next seat, then previous seat),
    /// deduplicated and excluding `exclude`.
    #[must_use]
    pub fn neighbours(&self, target: PlayerId, exclude: PlayerId) -> SmallVec<[PlayerId; 2]> {
        let count = self.player_count();
        let mut neighbours = SmallVec::new();
        for seat in [target.next(count), target.previous(count)] {
            if seat != target && seat != exclude && !neighbours.contains(&seat) {
                neighbours.push(seat);
            }
        }
        neighbours
    }

    /// Exchange two players' hands wholesale.
    pub fn exchange_hands(&mut self, a: PlayerId, b: PlayerId) {
        let hand_a = std::mem::take(&mut self.players[a].hand);
        let hand_b = std::mem::replace(&mut self.players[b].hand, hand_a);
        self.players[a].hand = hand_b;
    }

    // === Round ===

    /// The round being played.
    #[must_use]
    pub fn round(&self) -> Round {
        self.round
    }

    /// Move to another round.
    pub fn set_round(&mut self, round: Round) {
        self.round = round;
    }

    // === Deck ===

    /// The live deck (top = end of slice).
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Replace the deck wholesale.
    pub fn set_deck(&mut self, deck: Vec<Card>) {
        self.deck = deck;
    }

    /// Take the top card of the deck.
    pub fn draw(&mut self) -> EngineResult<Card> {
        self.deck.pop().ok_or(EngineError::EmptyDeck)
    }

    /// Put the Token back into the deck at a uniformly random position.
    pub fn return_token(&mut self, rng: &mut GameRng) {
        let position = rng.gen_range_usize(0..self.deck.len() + 1);
        self.deck.insert(position, Card::Token);
    }

    // === Discards ===

    /// Cards out of play until the next round boundary.
    #[must_use]
    pub fn discard(&self) -> &CardCounts {
        &self.discard
    }

    /// Take `count` cards of a kind out of play.
    ///
    /// The Token never leaves play: it goes back into the deck instead.
    pub fn put_out_of_play(&mut self, card: Card, count: u32, rng: &mut GameRng) {
        if card == Card::Token {
            for _ in 0..count {
                self.return_token(rng);
            }
        } else {
            self.discard.add(card, count);
        }
    }

    /// Take the contents of a forfeited hand out of play.
    pub fn put_hand_out_of_play(&mut self, hand: &Hand, rng: &mut GameRng) {
        for (card, count) in hand.counts().iter() {
            if count > 0 {
                self.put_out_of_play(card, count, rng);
            }
        }
    }

    /// Start a new round with a fresh deck; the discard tally is absorbed.
    pub fn rebuild(&mut self, deck: Vec<Card>) {
        self.deck = deck;
        self.discard.clear();
    }

    // === Invariants ===

    /// Per-kind count of every card in the deck, the hands and the discards.
    #[must_use]
    pub fn census(&self) -> CardCounts {
        let mut counts = CardCounts::from_cards(&self.deck);
        counts.add_all(&held_counts(&self.players));
        counts.add_all(&self.discard);
        counts
    }

    /// Verify card conservation and Token uniqueness.
    pub fn check_invariants(&self) -> EngineResult<()> {
        let census = self.census();
        let token_count = census.get(Card::Token);
        if token_count != 1 {
            return Err(EngineError::TokenCount { found: token_count });
        }

        for (card, found) in census.iter() {
            let expected = card.multiplicity();
            if found != expected {
                return Err(EngineError::ConservationBroken { card, expected, found });
            }
        }
        Ok(())
    }

    /// The first player in turn order meeting the win condition.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, player)| player.meets_win_condition())
            .map(|(id, _)| id)
    }
}
