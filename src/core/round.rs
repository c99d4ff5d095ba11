//! Rounds ("seasons") and their rule properties.

use serde::{Deserialize, Serialize};

/// A round of the match.
///
/// A match plays [`Round::PLAYED`] in order. `Four` belongs to the rules
/// vocabulary but is never scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Round {
    One,
    Two,
    Three,
    Four,
}

impl Round {
    /// The rounds a match plays, in order.
    pub const PLAYED: [Round; 3] = [Round::One, Round::Two, Round::Three];

    /// Penalty cards may be played as actions.
    #[must_use]
    pub const fn allows_penalty(self) -> bool {
        !matches!(self, Round::One)
    }

    /// Buying a sheep opens the purchase reaction cascade.
    #[must_use]
    pub const fn has_purchase_reactions(self) -> bool {
        matches!(self, Round::One)
    }

    /// A landed Strike also hits the target's neighbours.
    #[must_use]
    pub const fn has_wide_blast(self) -> bool {
        matches!(self, Round::Two)
    }

    /// Players may swap for an opponent's card instead of drawing.
    #[must_use]
    pub const fn offers_card_swap(self) -> bool {
        matches!(self, Round::Three)
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = match self {
            Round::One => 1,
            Round::Two => 2,
            Round::Three => 3,
            Round::Four => 4,
        };
        write!(f, "Round {n}")
    }
}
