//! Player identification, per-player storage and player records.
//!
//! ## PlayerId
//!
//! Type-safe seat index. Turn order is seat order, wrapping.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access. The engine keeps all
//! players in one `PlayerMap`; "other players" views are index rotations
//! over it, never copies.
//!
//! ## Player
//!
//! Identity, name, score and hand of one participant.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::action::Action;
use super::error::EngineResult;
use crate::cards::{Card, Hand};

/// Score a Token holder needs at a round boundary to win.
pub const WINNING_SCORE: u32 = 4;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use haystack::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// The other players in turn order, starting with the next seat.
    ///
    /// ```
    /// use haystack::core::PlayerId;
    ///
    /// let others: Vec<_> = PlayerId::new(1).others(4).collect();
    /// assert_eq!(others, vec![PlayerId::new(2), PlayerId::new(3), PlayerId::new(0)]);
    /// ```
    pub fn others(self, player_count: usize) -> impl Iterator<Item = PlayerId> {
        let start = self.index();
        (1..player_count).map(move |offset| PlayerId(((start + offset) % player_count) as u8))
    }

    /// The seat after this one, wrapping.
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % player_count) as u8)
    }

    /// The seat before this one, wrapping.
    #[must_use]
    pub fn previous(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + player_count - 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use haystack::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_value(4, 0);
/// wins[PlayerId::new(1)] += 1;
/// assert_eq!(wins[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl FnMut(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8).map(PlayerId).map(factory).collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check if `player` is a seat in this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs in turn order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// One participant of a match.
///
/// Identity and name are fixed for the match; only score and hand change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat, also the turn order position.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Sheep owned. Never negative.
    pub score: u32,
    /// Cards held.
    pub hand: Hand,
}

impl Player {
    /// Create a player with an empty hand and no sheep.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            hand: Hand::new(),
        }
    }

    /// Remove the cards an action costs from the hand.
    ///
    /// Returns the cards paid so the caller can move them out of play.
    pub fn pay_for(&mut self, action: &Action) -> EngineResult<Option<(Card, u32)>> {
        let cost = action.cost();
        if let Some((card, count)) = cost {
            self.hand.drop(card, count)?;
        }
        Ok(cost)
    }

    /// Add one sheep.
    pub fn gain_sheep(&mut self) {
        self.score += 1;
    }

    /// Lose one sheep, never going below zero.
    pub fn suffer_penalty(&mut self) {
        self.score = self.score.saturating_sub(1);
    }

    /// Check the win condition: holding the Token with enough sheep.
    #[must_use]
    pub fn meets_win_condition(&self) -> bool {
        self.hand.holds_token() && self.score >= WINNING_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_others_rotation() {
        let others: Vec<_> = PlayerId::new(0).others(3).collect();
        assert_eq!(others, vec![PlayerId::new(1), PlayerId::new(2)]);

        let others: Vec<_> = PlayerId::new(2).others(3).collect();
        assert_eq!(others, vec![PlayerId::new(0), PlayerId::new(1)]);

        assert_eq!(PlayerId::new(0).others(1).count(), 0);
    }

    #[test]
    fn test_neighbours_wrap() {
        assert_eq!(PlayerId::new(3).next(4), PlayerId::new(0));
        assert_eq!(PlayerId::new(0).previous(4), PlayerId::new(3));
        assert_eq!(PlayerId::new(1).previous(2), PlayerId::new(0));
        assert_eq!(PlayerId::new(1).next(2), PlayerId::new(0));
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(4, |p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.player_count(), 4);
        assert!(map.contains(PlayerId::new(3)));
        assert!(!map.contains(PlayerId::new(4)));
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(2, 0);

        map[PlayerId::new(0)] = 10;
        map[PlayerId::new(1)] = 20;

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::new(0), &10), (PlayerId::new(1), &20)]);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }

    #[test]
    fn test_pay_for_purchase() {
        let mut player = Player::new(PlayerId::new(0), "A");
        for _ in 0..5 {
            player.hand.take(Card::Resource);
        }

        let paid = player.pay_for(&Action::BuySheep).unwrap();

        assert_eq!(paid, Some((Card::Resource, 4)));
        assert_eq!(player.hand.count(Card::Resource), 1);
    }

    #[test]
    fn test_pay_for_missing_card() {
        let mut player = Player::new(PlayerId::new(0), "A");
        let strike = Action::PlayStrike { target: PlayerId::new(1) };

        assert!(player.pay_for(&strike).is_err());
        assert_eq!(player.pay_for(&Action::Pass).unwrap(), None);
    }

    #[test]
    fn test_penalty_floor() {
        let mut player = Player::new(PlayerId::new(0), "A");
        player.suffer_penalty();
        assert_eq!(player.score, 0);

        player.gain_sheep();
        player.gain_sheep();
        player.suffer_penalty();
        assert_eq!(player.score, 1);
    }

    #[test]
    fn test_win_condition() {
        let mut player = Player::new(PlayerId::new(0), "A");
        player.score = WINNING_SCORE;
        assert!(!player.meets_win_condition());

        player.hand.take(Card::Token);
        assert!(player.meets_win_condition());

        player.score -= 1;
        assert!(!player.meets_win_condition());
    }
}
