//! Game configuration.
//!
//! Callers pass a `GameSettings` when creating a game. There is no hidden
//! default randomness: the seed is always chosen by the caller.

use serde::{Deserialize, Serialize};

/// How the dealer of the first game is chosen.
///
/// From the second game on, the dealer is always the player graded last in
/// the previous game; this rule only covers the first game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstDealerRule {
    /// A fixed seat deals.
    Seat(usize),
    /// A seat drawn from the game's RNG deals.
    Random,
}

impl Default for FirstDealerRule {
    fn default() -> Self {
        FirstDealerRule::Seat(0)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Seed for the game's RNG (stock shuffling, random first dealer).
    pub seed: u64,

    /// Dealer selection for the first game.
    pub first_dealer: FirstDealerRule,
}

impl GameSettings {
    /// Create settings with the given seed and seat 0 dealing first.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            first_dealer: FirstDealerRule::default(),
        }
    }

    /// Set the first-game dealer rule.
    #[must_use]
    pub fn with_first_dealer(mut self, rule: FirstDealerRule) -> Self {
        self.first_dealer = rule;
        self
    }
}
