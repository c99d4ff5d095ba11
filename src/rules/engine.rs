//! The match engine.
//!
//! `Engine` owns everything a match needs:
//! - the shared table (`MatchState`)
//! - one decision provider per seat, bound to the player by `PlayerId`
//! - the match RNG, lent to providers, hands and the card supply
//! - an observer receiving every event
//!
//! Its behaviour is split across modules by concern: the round engine in
//! `rules::round`, the match controller in `rules::controller`, the contest
//! and action resolvers in `resolution`.

use tracing::trace;

use crate::cards::{build_full_deck, Card};
use crate::core::{
    Action, ActionRecord, EngineError, EngineResult, GameRng, MatchConfig, MatchState, PlayerId,
    PlayerMap,
};
use crate::observe::{MatchEvent, MatchObserver, TracingObserver};
use crate::strategy::{BasicStrategy, DecisionProvider};

/// Decision providers in seat order.
pub type Providers = PlayerMap<Box<dyn DecisionProvider>>;

/// Runs a match: rounds, turns and action resolution.
pub struct Engine<O: MatchObserver = TracingObserver> {
    pub(crate) state: MatchState,
    pub(crate) providers: Providers,
    pub(crate) rng: GameRng,
    pub(crate) observer: O,
    sequence: u32,
    verify_invariants: bool,
}

impl<O: MatchObserver> Engine<O> {
    /// Create an engine over an existing table.
    ///
    /// The deck is used as-is, which allows rigged decks. Fails if there is
    /// not exactly one provider per player.
    pub fn new(state: MatchState, providers: Providers, rng: GameRng, observer: O) -> EngineResult<Self> {
        if providers.player_count() != state.player_count() {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "{} decision providers for {} players",
                    providers.player_count(),
                    state.player_count()
                ),
            });
        }

        Ok(Self {
            state,
            providers,
            rng,
            observer,
            sequence: 0,
            verify_invariants: false,
        })
    }

    /// Create an engine for a configured match with a freshly shuffled full deck.
    pub fn from_config(config: &MatchConfig, providers: Providers, observer: O) -> EngineResult<Self> {
        config.validate()?;

        let mut rng = GameRng::new(config.seed);
        let deck = build_full_deck(&mut rng);
        let state = MatchState::with_names(&config.player_names, deck);

        Ok(Self::new(state, providers, rng, observer)?.with_invariant_checks(config.verify_invariants))
    }

    /// Create an engine where every seat plays [`BasicStrategy`].
    pub fn with_basic_strategies(config: &MatchConfig, observer: O) -> EngineResult<Self> {
        config.validate()?;
        let providers: Providers = PlayerMap::new(config.player_count(), |_| {
            Box::new(BasicStrategy::new()) as Box<dyn DecisionProvider>
        });
        Self::from_config(config, providers, observer)
    }

    /// Enable or disable invariant auditing after every turn and rebuild.
    #[must_use]
    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.verify_invariants = enabled;
        self
    }

    /// The table.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Mutable access to the table, for setting up positions.
    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    /// The observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consume the engine, returning the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    pub(crate) fn emit(&mut self, event: MatchEvent) {
        self.observer.observe(&event);
    }

    /// Report an action or reaction that has been paid for.
    pub(crate) fn record(&mut self, player: PlayerId, action: Action) {
        let record = ActionRecord::new(player, action, self.state.round(), self.sequence);
        self.sequence += 1;
        self.emit(MatchEvent::ActionPlayed(record));
    }

    /// Spend the cards an action costs and take them out of play, then
    /// report the action.
    pub(crate) fn play(&mut self, player: PlayerId, action: Action) -> EngineResult<()> {
        if let Some((card, count)) = self.state.player_mut(player).pay_for(&action)? {
            self.state.put_out_of_play(card, count, &mut self.rng);
        }
        self.record(player, action);
        Ok(())
    }

    /// Ask a player which card to discard and discard it.
    ///
    /// A discarded Token goes back into the deck at a random position.
    pub fn discard_one(&mut self, player: PlayerId) -> EngineResult<Card> {
        let card = self.providers[player].choose_card_to_discard(&self.state, player);
        self.state.player_mut(player).hand.drop(card, 1)?;
        self.state.put_out_of_play(card, 1, &mut self.rng);
        trace!(%player, %card, "discarded");
        self.emit(MatchEvent::Discarded { player, card });
        Ok(card)
    }

    /// Check the table invariants when auditing is enabled.
    pub(crate) fn audit(&self) -> EngineResult<()> {
        if self.verify_invariants {
            self.state.check_invariants()?;
        }
        Ok(())
    }
}
