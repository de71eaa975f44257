//! Moves and recorded turns.
//!
//! A `Move` is what the caller submits: lay down a combination or pass.
//! A `Turn` is what the game records after applying it.

use serde::{Deserialize, Serialize};

use crate::cards::CardCombination;

/// A move submitted by the player on turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Lay down a combination from the hand.
    Play(CardCombination),
    /// Pass for the rest of the round.
    Pass,
}

impl Move {
    /// The combination being played, if any.
    #[must_use]
    pub fn combination(&self) -> Option<&CardCombination> {
        match self {
            Move::Play(combination) => Some(combination),
            Move::Pass => None,
        }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }
}

impl From<Option<CardCombination>> for Move {
    fn from(combination: Option<CardCombination>) -> Self {
        combination.map_or(Move::Pass, Move::Play)
    }
}

impl From<CardCombination> for Move {
    fn from(combination: CardCombination) -> Self {
        Move::Play(combination)
    }
}

/// One player's recorded move within a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Index into the game's player list.
    pub player_index: usize,

    /// Combination laid down. `None` means the player passed.
    pub combination: Option<CardCombination>,
}

impl Turn {
    /// Record a play.
    #[must_use]
    pub fn play(player_index: usize, combination: CardCombination) -> Self {
        Self {
            player_index,
            combination: Some(combination),
        }
    }

    /// Record a pass.
    #[must_use]
    pub fn pass(player_index: usize) -> Self {
        Self {
            player_index,
            combination: None,
        }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.combination.is_none()
    }
}
