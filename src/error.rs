//! Engine errors.
//!
//! Every fallible operation returns `Result<Game, GameError>` and leaves the
//! input game untouched on failure. `GameError::kind` groups the variants so
//! callers can decide whether to re-prompt for a move or abort a setup step.

use thiserror::Error;

use crate::cards::Card;

/// Broad classification of a [`GameError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Building or starting a game went wrong.
    Setup,
    /// The submitted move is not allowed in the current state.
    MoveLegality,
    /// Internal consistency check failed.
    Invariant,
    /// Card text could not be parsed.
    Parse,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("player id `{0}` is duplicated")]
    DuplicatePlayerId(String),

    #[error("dealer has not been decided")]
    DealerNotDecided,

    #[error("there are no players with grade 1")]
    NoGradeOneFound,

    #[error("the game has no players")]
    NoPlayers,

    #[error("seat {seat} is out of range for {player_count} players")]
    InvalidSeat { seat: usize, player_count: usize },

    #[error("the game has not finished yet")]
    GameNotFinished,

    #[error("no player is on turn")]
    NoCurrentPlayer,

    #[error("the current player does not have the card combination")]
    CombinationNotInHand,

    #[error("the card combination cannot be put down over the layout")]
    IllegalPlay,

    #[error("card {0} is not in the hand")]
    CardNotInHand(Card),

    #[error("cannot parse card: {0}")]
    ParseCard(String),
}

impl GameError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::DuplicatePlayerId(_)
            | GameError::DealerNotDecided
            | GameError::NoGradeOneFound
            | GameError::NoPlayers
            | GameError::InvalidSeat { .. }
            | GameError::GameNotFinished => ErrorKind::Setup,
            GameError::NoCurrentPlayer
            | GameError::CombinationNotInHand
            | GameError::IllegalPlay => ErrorKind::MoveLegality,
            GameError::CardNotInHand(_) => ErrorKind::Invariant,
            GameError::ParseCard(_) => ErrorKind::Parse,
        }
    }
}
