//! Property tests over whole matches.
//!
//! Matches run with invariant auditing on, so card conservation and Token
//! uniqueness are checked after every turn and rebuild; any breach fails the
//! match with an error.

use haystack::{Engine, EventLog, MatchConfig, MatchEvent, MatchResult, PlayerId, Round};
use proptest::prelude::*;

fn audited(players: usize, seed: u64) -> Engine<EventLog> {
    let config = MatchConfig::new()
        .with_player_count(players)
        .with_seed(seed)
        .with_invariant_checks(true);
    Engine::with_basic_strategies(&config, EventLog::new()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: conservation holds throughout and at the end of every match
    #[test]
    fn prop_match_conserves_cards(players in 2usize..=6, seed in any::<u64>()) {
        let mut engine = audited(players, seed);

        let outcome = engine.play_match();

        prop_assert!(outcome.is_ok(), "match failed: {:?}", outcome);
        prop_assert!(engine.state().check_invariants().is_ok());
    }

    /// Property: a winner holds the Token with enough sheep; a draw plays all rounds
    #[test]
    fn prop_result_is_exact(players in 2usize..=6, seed in any::<u64>()) {
        let mut engine = audited(players, seed);
        let outcome = engine.play_match().unwrap();

        let token_holders = outcome.standings.iter().filter(|s| s.holds_token).count();
        prop_assert!(token_holders <= 1);

        match outcome.result {
            MatchResult::Winner(player) => {
                let standing = &outcome.standings[player.index()];
                prop_assert!(standing.holds_token);
                prop_assert!(standing.score >= 4);
            }
            MatchResult::Draw => {
                prop_assert_eq!(outcome.rounds_played, 3);
                prop_assert!(outcome.standings.iter().all(|s| !(s.holds_token && s.score >= 4)));
            }
        }
    }

    /// Property: every contest settles within vetoes + 1 sweeps
    #[test]
    fn prop_contests_terminate(players in 2usize..=6, seed in any::<u64>()) {
        let mut engine = audited(players, seed);
        engine.play_match().unwrap();

        for event in engine.observer().events() {
            if let MatchEvent::Contested { vetoes, sweeps, proceeds, .. } = event {
                prop_assert!(*sweeps <= vetoes + 1);
                prop_assert_eq!(*proceeds, vetoes % 2 == 0);
            }
        }
    }

    /// Property: the hand limit costs at most one card after a draw
    #[test]
    fn prop_one_discard_after_draw(players in 2usize..=6, seed in any::<u64>()) {
        let mut engine = audited(players, seed);
        engine.play_match().unwrap();

        let events = engine.observer().events();
        for window in events.windows(3) {
            if let [MatchEvent::Drew { player, .. }, MatchEvent::Discarded { player: first, .. }, MatchEvent::Discarded { player: second, .. }] = window {
                prop_assert!(!(first == player && second == player));
            }
        }
    }

    /// Property: round four is never played
    #[test]
    fn prop_three_rounds_at_most(players in 2usize..=6, seed in any::<u64>()) {
        let mut engine = audited(players, seed);
        let outcome = engine.play_match().unwrap();

        let rounds: Vec<Round> = engine
            .observer()
            .events()
            .iter()
            .filter_map(|e| match e {
                MatchEvent::RoundStarted { round, .. } => Some(*round),
                _ => None,
            })
            .collect();
        prop_assert_eq!(rounds.len() as u32, outcome.rounds_played);
        prop_assert!(!rounds.contains(&Round::Four));
    }
}

#[test]
fn test_every_player_count_plays() {
    for players in 2..=8 {
        let mut engine = audited(players, players as u64);
        let outcome = engine.play_match().unwrap();
        assert_eq!(outcome.standings.len(), players);
        assert_eq!(
            outcome.standings.iter().map(|s| s.player).collect::<Vec<_>>(),
            PlayerId::all(players).collect::<Vec<_>>()
        );
    }
}
