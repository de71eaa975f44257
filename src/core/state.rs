//! Game state: rounds and the game aggregate.
//!
//! ## Round
//!
//! Ordered turns since the table was last cleared. The last round of a game
//! is the current one.
//!
//! ## Game
//!
//! The single root value. Every operation takes `&Game` and returns a new
//! `Game`; collections are `im` persistent structures so that cloning the
//! previous state is O(1) and the input is never observed to change.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::Turn;
use super::config::GameSettings;
use super::player::Player;
use super::rng::GameRng;
use crate::cards::Card;

/// A sequence of turns bounded by the table being cleared.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub turns: Vector<Turn>,
}

impl Round {
    /// Create an empty round.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a round from recorded turns.
    #[must_use]
    pub fn with_turns(turns: impl IntoIterator<Item = Turn>) -> Self {
        Self {
            turns: turns.into_iter().collect(),
        }
    }
}

/// Complete game state.
#[derive(Clone, Debug)]
pub struct Game {
    /// Index into `players` of the dealer. `None` until decided.
    pub dealer_index: Option<usize>,

    /// Index into `players` of whoever acts next. `None` before the dealer
    /// is decided and once the game is finished.
    pub player_index_on_turn: Option<usize>,

    /// Players in turn order.
    pub players: Vector<Player>,

    /// Rounds played so far; the last one is the current round.
    pub rounds: Vector<Round>,

    /// Undealt cards.
    pub stock: Vector<Card>,

    /// Configuration the game was created with.
    pub settings: GameSettings,

    /// Deterministic RNG seeded from `settings.seed`.
    pub(crate) rng: GameRng,
}

impl Game {
    /// Create an empty game with one empty round.
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        Self {
            dealer_index: None,
            player_index_on_turn: None,
            players: Vector::new(),
            rounds: Vector::unit(Round::new()),
            stock: Vector::new(),
            rng: GameRng::new(settings.seed),
            settings,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The round in progress.
    #[must_use]
    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn player_on_turn(&self) -> Option<&Player> {
        self.player_index_on_turn.and_then(|i| self.players.get(i))
    }

    /// Replace the players, keeping everything else.
    #[must_use]
    pub fn with_players(mut self, players: impl IntoIterator<Item = Player>) -> Self {
        self.players = players.into_iter().collect();
        self
    }

    /// Set whose turn it is.
    #[must_use]
    pub fn with_turn(mut self, player_index: usize) -> Self {
        self.player_index_on_turn = Some(player_index);
        self
    }

    /// Set the dealer.
    #[must_use]
    pub fn with_dealer(mut self, dealer_index: usize) -> Self {
        self.dealer_index = Some(dealer_index);
        self
    }

    /// Append a turn to the current round, opening a round if there is none.
    #[must_use]
    pub fn with_recorded_turn(mut self, turn: Turn) -> Self {
        match self.rounds.back_mut() {
            Some(round) => round.turns.push_back(turn),
            None => self.rounds.push_back(Round::with_turns([turn])),
        }
        self
    }
}
