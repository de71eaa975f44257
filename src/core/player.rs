//! Players and grades.
//!
//! ## Player
//!
//! A seat in the game: caller-supplied id, current hand, placement in the
//! current game (`ranking`) and title carried over from the previous game
//! (`grade`).
//!
//! ## Grade
//!
//! Titles from best to worst: Millionaire, Rich, Commoner, Poor, Beggar.
//! The Beggar deals the next game.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Title earned in the previous game. The numeric value is the grade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    Beggar = 1,
    Poor = 2,
    Commoner = 3,
    Rich = 4,
    Millionaire = 5,
}

impl Grade {
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Grade for a final `ranking` (1 = first out) among `player_count` players.
    ///
    /// First place is Millionaire and last place Beggar. With four or more
    /// players, second place is Rich and second-to-last Poor. Everyone else
    /// is Commoner.
    #[must_use]
    pub fn from_ranking(ranking: u32, player_count: usize) -> Self {
        let last = player_count as u32;
        if ranking <= 1 {
            Grade::Millionaire
        } else if ranking >= last {
            Grade::Beggar
        } else if player_count >= 4 && ranking == 2 {
            Grade::Rich
        } else if player_count >= 4 && ranking == last - 1 {
            Grade::Poor
        } else {
            Grade::Commoner
        }
    }
}

/// A player seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Identifier passed from the outside, unique within a game.
    pub id: String,

    /// Cards held. No ordering guarantee.
    pub hand: Vector<Card>,

    /// Placement in the current game; 1 is best. `None` while undecided.
    pub ranking: Option<u32>,

    /// Title from the previous game. `None` for everyone in the first game.
    pub grade: Option<Grade>,
}

impl Player {
    /// Create a player with an empty hand and no ranking or grade.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hand: Vector::new(),
            ranking: None,
            grade: None,
        }
    }

    /// Give the player a starting hand.
    #[must_use]
    pub fn with_hand(mut self, hand: impl IntoIterator<Item = Card>) -> Self {
        self.hand = hand.into_iter().collect();
        self
    }

    /// Set the grade carried over from a previous game.
    #[must_use]
    pub fn with_grade(mut self, grade: Grade) -> Self {
        self.grade = Some(grade);
        self
    }

    /// Set a final ranking.
    #[must_use]
    pub fn with_ranking(mut self, ranking: u32) -> Self {
        self.ranking = Some(ranking);
        self
    }

    /// True once the player has a ranking (hand emptied or last left).
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.ranking.is_some()
    }
}
