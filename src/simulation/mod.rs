//! Batch simulation.
//!
//! Plays many matches with [`BasicStrategy`](crate::strategy::BasicStrategy)
//! at every seat and aggregates the results. Each match gets its own RNG
//! stream forked from the batch seed, so a batch is reproducible as a whole
//! and every match in it is reproducible on its own.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ActionKind, EngineResult, GameRng, PlayerMap, SimulationConfig};
use crate::observe::{MatchEvent, MatchObserver};
use crate::rules::{Engine, MatchOutcome, MatchResult};

/// Observer counting played actions by kind, and vetoes spent in contests.
#[derive(Clone, Debug, Default)]
pub struct ActionTally {
    counts: FxHashMap<ActionKind, u64>,
    vetoes: u64,
}

impl ActionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Times an action of this kind was played.
    #[must_use]
    pub fn count(&self, kind: ActionKind) -> u64 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Vetoes spent across all contests.
    #[must_use]
    pub fn vetoes(&self) -> u64 {
        self.vetoes
    }
}

impl MatchObserver for ActionTally {
    fn observe(&mut self, event: &MatchEvent) {
        match event {
            MatchEvent::ActionPlayed(record) => {
                *self.counts.entry(record.action.kind()).or_insert(0) += 1;
            }
            MatchEvent::Contested { vetoes, .. } => {
                self.vetoes += u64::from(*vetoes);
            }
            _ => {}
        }
    }
}

/// Aggregate results of a batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub matches: u32,
    pub draws: u32,
    /// Wins per seat.
    pub wins: PlayerMap<u32>,
    pub rounds_played: u64,
    /// Played actions by kind, reactions and vetoes included.
    pub actions: FxHashMap<ActionKind, u64>,
    pub vetoes: u64,
}

impl SimulationStats {
    /// Empty stats for a table of `player_count`.
    pub fn new(player_count: usize) -> Self {
        Self {
            matches: 0,
            draws: 0,
            wins: PlayerMap::with_value(player_count, 0),
            rounds_played: 0,
            actions: FxHashMap::default(),
            vetoes: 0,
        }
    }

    /// Fold one finished match into the totals.
    pub fn record(&mut self, outcome: &MatchOutcome, tally: &ActionTally) {
        self.matches += 1;
        self.rounds_played += u64::from(outcome.rounds_played);
        match outcome.result {
            MatchResult::Winner(player) => self.wins[player] += 1,
            MatchResult::Draw => self.draws += 1,
        }
        for (&kind, &count) in &tally.counts {
            *self.actions.entry(kind).or_insert(0) += count;
        }
        self.vetoes += tally.vetoes;
    }

    /// Fraction of matches that ended in a draw.
    #[must_use]
    pub fn draw_rate(&self) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        f64::from(self.draws) / f64::from(self.matches)
    }

    /// Average number of rounds per match.
    #[must_use]
    pub fn average_rounds(&self) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        self.rounds_played as f64 / f64::from(self.matches)
    }
}

/// Play `config.matches` matches and aggregate the results.
///
/// Stops at the first engine error.
pub fn run(config: &SimulationConfig) -> EngineResult<SimulationStats> {
    config.base.validate()?;

    let mut batch_rng = GameRng::new(config.base.seed);
    let mut stats = SimulationStats::new(config.base.player_count());

    for index in 0..config.matches {
        let match_config = config.base.clone().with_seed(batch_rng.fork().seed());
        let mut engine = Engine::with_basic_strategies(&match_config, ActionTally::new())?;
        let outcome = engine.play_match()?;
        debug!(index, seed = match_config.seed, result = ?outcome.result, "match finished");
        stats.record(&outcome, engine.observer());
    }

    Ok(stats)
}
