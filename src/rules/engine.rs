//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What moves are legal
//! - How moves produce the next state
//! - When the game is over

use crate::core::{Game, Move};
use crate::error::GameError;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    /// Player indexes from first place to last.
    pub standings: Vec<usize>,
}

impl GameResult {
    /// The first player out.
    #[must_use]
    pub fn winner(&self) -> Option<usize> {
        self.standings.first().copied()
    }

    /// The player left holding cards.
    #[must_use]
    pub fn loser(&self) -> Option<usize> {
        self.standings.last().copied()
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player_index: usize) -> bool {
        self.winner() == Some(player_index)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty vec if nobody can act
/// - `apply_move`: Must be deterministic and must not modify `game`
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Every move the player on turn may submit.
    fn legal_moves(&self, game: &Game) -> Vec<Move>;

    /// Apply a move by the player on turn, producing the next state.
    fn apply_move(&self, game: &Game, mv: &Move) -> Result<Game, GameError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, game: &Game) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Apply a sequence of moves, stopping at the first error.
    fn apply_moves<'a>(
        &self,
        game: &Game,
        moves: impl IntoIterator<Item = &'a Move>,
    ) -> Result<Game, GameError> {
        let mut current = game.clone();
        for mv in moves {
            current = self.apply_move(&current, mv)?;
        }
        Ok(current)
    }
}
