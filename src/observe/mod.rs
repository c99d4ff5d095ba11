//! Observation surface.
//!
//! The engine reports everything observable that happens during a match to a
//! `MatchObserver`. Observers are sinks: the engine never reads anything back.
//!
//! - [`TracingObserver`]: logs events through `tracing` (the default)
//! - [`EventLog`]: records events in memory (tests, replays)
//! - [`NullObserver`]: ignores events (bulk simulation)

mod event;

pub use event::MatchEvent;

/// Receiver of match events.
pub trait MatchObserver {
    /// Called once per event, in the order events happen.
    fn observe(&mut self, event: &MatchEvent);
}

/// Observer that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl MatchObserver for NullObserver {
    fn observe(&mut self, _event: &MatchEvent) {}
}

/// Observer that records every event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventLog {
    events: Vec<MatchEvent>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl MatchObserver for EventLog {
    fn observe(&mut self, event: &MatchEvent) {
        self.events.push(event.clone());
    }
}

/// Observer that writes events to `tracing`.
///
/// Round boundaries and the result are `info`, played actions and their
/// effects are `debug`, draws and discards are `trace`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl MatchObserver for TracingObserver {
    fn observe(&mut self, event: &MatchEvent) {
        use tracing::{debug, info, trace};

        match event {
            MatchEvent::RoundStarted { round, deck_size } => {
                info!(%round, deck_size, "round started");
            }
            MatchEvent::RoundEnded { round } => {
                info!(%round, "round ended");
            }
            MatchEvent::MatchEnded { result, standings } => {
                info!(?result, "match ended");
                for standing in standings {
                    info!(
                        player = %standing.player,
                        name = %standing.name,
                        score = standing.score,
                        token = standing.holds_token,
                        hand = standing.hand_size,
                        "final standing"
                    );
                }
            }
            MatchEvent::Drew { .. } | MatchEvent::Discarded { .. } => {
                trace!(?event);
            }
            _ => {
                debug!(?event);
            }
        }
    }
}
