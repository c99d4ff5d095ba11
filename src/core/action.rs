//! Action representation.
//!
//! Actions are a single sum type. Argumentless kinds carry nothing; targeted
//! kinds carry the target's `PlayerId`, a lookup key into the shared player
//! map rather than an owning reference.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::round::Round;
use crate::cards::{Card, SHEEP_PRICE};

/// A complete game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// End the action phase of the turn.
    Pass,
    /// Spend four Resource cards for one sheep.
    BuySheep,
    /// Spend a Veto card in a contest.
    PlayVeto,
    /// Make the target forfeit their hand.
    PlayStrike { target: PlayerId },
    /// Cost the target one sheep.
    PlayPenalty { target: PlayerId },
    /// Exchange hands with the target.
    PlayTrade { target: PlayerId },
    /// Discard two cards to take a random card from the target (round three).
    PlayRoundThreeSwap { target: PlayerId },
}

/// Field-less discriminant of [`Action`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionKind {
    Pass,
    BuySheep,
    PlayVeto,
    PlayStrike,
    PlayPenalty,
    PlayTrade,
    PlayRoundThreeSwap,
}

impl ActionKind {
    /// Check if actions of this kind carry a target.
    #[must_use]
    pub const fn is_targeted(self) -> bool {
        matches!(
            self,
            ActionKind::PlayStrike
                | ActionKind::PlayPenalty
                | ActionKind::PlayTrade
                | ActionKind::PlayRoundThreeSwap
        )
    }
}

impl Action {
    /// Build an action of a targeted kind.
    ///
    /// Returns `None` for argumentless kinds.
    #[must_use]
    pub fn targeted(kind: ActionKind, target: PlayerId) -> Option<Self> {
        match kind {
            ActionKind::PlayStrike => Some(Action::PlayStrike { target }),
            ActionKind::PlayPenalty => Some(Action::PlayPenalty { target }),
            ActionKind::PlayTrade => Some(Action::PlayTrade { target }),
            ActionKind::PlayRoundThreeSwap => Some(Action::PlayRoundThreeSwap { target }),
            ActionKind::Pass | ActionKind::BuySheep | ActionKind::PlayVeto => None,
        }
    }

    /// Build an action of an argumentless kind.
    ///
    /// Returns `None` for targeted kinds.
    #[must_use]
    pub fn argless(kind: ActionKind) -> Option<Self> {
        match kind {
            ActionKind::Pass => Some(Action::Pass),
            ActionKind::BuySheep => Some(Action::BuySheep),
            ActionKind::PlayVeto => Some(Action::PlayVeto),
            _ => None,
        }
    }

    /// The kind of this action.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Pass => ActionKind::Pass,
            Action::BuySheep => ActionKind::BuySheep,
            Action::PlayVeto => ActionKind::PlayVeto,
            Action::PlayStrike { .. } => ActionKind::PlayStrike,
            Action::PlayPenalty { .. } => ActionKind::PlayPenalty,
            Action::PlayTrade { .. } => ActionKind::PlayTrade,
            Action::PlayRoundThreeSwap { .. } => ActionKind::PlayRoundThreeSwap,
        }
    }

    /// The target of a targeted action.
    #[must_use]
    pub fn target(&self) -> Option<PlayerId> {
        match *self {
            Action::PlayStrike { target }
            | Action::PlayPenalty { target }
            | Action::PlayTrade { target }
            | Action::PlayRoundThreeSwap { target } => Some(target),
            Action::Pass | Action::BuySheep | Action::PlayVeto => None,
        }
    }

    /// Cards spent to play this action.
    ///
    /// The round-three swap is paid through individual discards instead.
    #[must_use]
    pub fn cost(&self) -> Option<(Card, u32)> {
        match self {
            Action::BuySheep => Some((Card::Resource, SHEEP_PRICE)),
            Action::PlayVeto => Some((Card::Veto, 1)),
            Action::PlayStrike { .. } => Some((Card::Strike, 1)),
            Action::PlayPenalty { .. } => Some((Card::Penalty, 1)),
            Action::PlayTrade { .. } => Some((Card::Trade, 1)),
            Action::Pass | Action::PlayRoundThreeSwap { .. } => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Pass => write!(f, "Pass"),
            Action::BuySheep => write!(f, "BuySheep"),
            Action::PlayVeto => write!(f, "PlayVeto"),
            Action::PlayStrike { target } => write!(f, "PlayStrike -> {target}"),
            Action::PlayPenalty { target } => write!(f, "PlayPenalty -> {target}"),
            Action::PlayTrade { target } => write!(f, "PlayTrade -> {target}"),
            Action::PlayRoundThreeSwap { target } => write!(f, "PlayRoundThreeSwap -> {target}"),
        }
    }
}

/// A played action with metadata for observers and replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round in which the action was taken.
    pub round: Round,

    /// Sequence number within the match (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: Round, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_target() {
        let strike = Action::PlayStrike { target: PlayerId::new(2) };

        assert_eq!(strike.kind(), ActionKind::PlayStrike);
        assert_eq!(strike.target(), Some(PlayerId::new(2)));
        assert!(strike.kind().is_targeted());

        assert_eq!(Action::BuySheep.target(), None);
        assert!(!ActionKind::PlayVeto.is_targeted());
    }

    #[test]
    fn test_constructors() {
        let target = PlayerId::new(1);
        assert_eq!(
            Action::targeted(ActionKind::PlayTrade, target),
            Some(Action::PlayTrade { target })
        );
        assert_eq!(Action::targeted(ActionKind::Pass, target), None);
        assert_eq!(Action::argless(ActionKind::BuySheep), Some(Action::BuySheep));
        assert_eq!(Action::argless(ActionKind::PlayStrike), None);
    }

    #[test]
    fn test_costs() {
        assert_eq!(Action::BuySheep.cost(), Some((Card::Resource, 4)));
        assert_eq!(Action::PlayVeto.cost(), Some((Card::Veto, 1)));
        assert_eq!(Action::Pass.cost(), None);
        assert_eq!(
            Action::PlayRoundThreeSwap { target: PlayerId::new(0) }.cost(),
            None
        );
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(
            PlayerId::new(1),
            Action::PlayPenalty { target: PlayerId::new(0) },
            Round::Two,
            7,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
