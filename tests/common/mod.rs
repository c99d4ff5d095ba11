//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use haystack::{
    Action, Card, DecisionProvider, Engine, EventLog, GameRng, Hand, MatchEvent, MatchState, PlayerId, PlayerMap,
    Providers, Round,
};

/// Decision provider that follows a script.
///
/// Actions are played in order, then it passes. Vetoes are cast against
/// listed actions whenever they would currently go through. Discards follow
/// the queue, then fall back to the first held kind.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    pub actions: VecDeque<Action>,
    pub purchase_reactions: VecDeque<Action>,
    pub strike_reactions: VecDeque<Action>,
    pub swap: Option<PlayerId>,
    pub veto_against: Vec<Action>,
    pub discards: VecDeque<Card>,
}

impl Scripted {
    pub fn passive() -> Self {
        Self::default()
    }

    pub fn playing(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn on_purchase(mut self, reaction: Action) -> Self {
        self.purchase_reactions.push_back(reaction);
        self
    }

    pub fn on_strike(mut self, reaction: Action) -> Self {
        self.strike_reactions.push_back(reaction);
        self
    }

    pub fn vetoing(mut self, action: Action) -> Self {
        self.veto_against.push(action);
        self
    }

    pub fn swapping_with(mut self, target: PlayerId) -> Self {
        self.swap = Some(target);
        self
    }

    pub fn discarding(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.discards.extend(cards);
        self
    }
}

impl DecisionProvider for Scripted {
    fn choose_action(&mut self, _: &MatchState, _: PlayerId, _: &mut GameRng) -> Action {
        self.actions.pop_front().unwrap_or(Action::Pass)
    }

    fn react_to_sheep_purchase(&mut self, _: &MatchState, _: PlayerId, _: &mut GameRng) -> Action {
        self.purchase_reactions.pop_front().unwrap_or(Action::Pass)
    }

    fn react_to_strike(&mut self, _: &MatchState, _: PlayerId, _: PlayerId, _: &mut GameRng) -> Action {
        self.strike_reactions.pop_front().unwrap_or(Action::Pass)
    }

    fn maybe_round3_swap(&mut self, _: &MatchState, _: PlayerId, _: &mut GameRng) -> Option<PlayerId> {
        self.swap
    }

    fn decide_veto(&mut self, state: &MatchState, me: PlayerId, pending: &Action, current_outcome: bool) -> bool {
        current_outcome && state.player(me).hand.count(Card::Veto) > 0 && self.veto_against.contains(pending)
    }

    fn choose_card_to_discard(&mut self, state: &MatchState, me: PlayerId) -> Card {
        if let Some(card) = self.discards.pop_front() {
            return card;
        }
        let hand = &state.player(me).hand;
        Card::ALL.into_iter().rev().find(|&card| hand.count(card) > 0).unwrap_or(Card::Token)
    }
}

pub fn seat(index: u8) -> PlayerId {
    PlayerId::new(index)
}

/// Engine over a rigged table: given hands, deck (top = last) and round.
pub fn table(seats: Vec<(Hand, Scripted)>, deck: Vec<Card>, round: Round) -> Engine<EventLog> {
    let names: Vec<String> = (0..seats.len()).map(|i| format!("P{i}")).collect();
    let mut state = MatchState::with_names(&names, deck);
    state.set_round(round);

    let mut scripts = Vec::with_capacity(seats.len());
    for (i, (hand, script)) in seats.into_iter().enumerate() {
        state.player_mut(seat(i as u8)).hand = hand;
        scripts.push(Some(script));
    }
    let providers: Providers = PlayerMap::new(names.len(), |id| {
        Box::new(scripts[id.index()].take().unwrap_or_default()) as Box<dyn DecisionProvider>
    });

    Engine::new(state, providers, GameRng::new(2024), EventLog::new()).unwrap()
}

/// Events matching `pred`, in order.
pub fn events_where(engine: &Engine<EventLog>, pred: impl Fn(&MatchEvent) -> bool) -> Vec<MatchEvent> {
    engine.observer().events().iter().filter(|e| pred(e)).cloned().collect()
}
