//! Read-only questions about a game.

use crate::cards::{can_put_down, combinations, CardCombination};
use crate::core::{Game, Player, Round};
use crate::error::GameError;

/// True iff nobody carries a grade from a previous game.
#[must_use]
pub fn is_first_game<'a>(players: impl IntoIterator<Item = &'a Player>) -> bool {
    players.into_iter().all(|p| p.grade.is_none())
}

/// True iff every player has been placed.
pub fn is_game_finished(game: &Game) -> Result<bool, GameError> {
    if game.players.is_empty() {
        return Err(GameError::NoPlayers);
    }
    Ok(game.players.iter().all(Player::is_out))
}

/// Indexes of players who recorded a pass in `round`, in turn order.
#[must_use]
pub fn passed_player_indexes(round: &Round) -> Vec<usize> {
    round
        .turns
        .iter()
        .filter(|t| t.is_pass())
        .map(|t| t.player_index)
        .collect()
}

/// True iff all players but one have passed in `round`.
#[must_use]
pub fn is_round_finished<'a>(round: &Round, players: impl IntoIterator<Item = &'a Player>) -> bool {
    players.into_iter().count().saturating_sub(1) == passed_player_indexes(round).len()
}

/// The combination currently on the table: the newest one laid down in the
/// current round.
#[must_use]
pub fn layouted_combination<'a>(
    rounds: impl IntoIterator<Item = &'a Round>,
) -> Option<&'a CardCombination> {
    let current = rounds.into_iter().last()?;
    current.turns.iter().rev().find_map(|t| t.combination.as_ref())
}

/// Every combination the player on turn may lay down now.
pub fn legal_combinations(game: &Game) -> Result<Vec<CardCombination>, GameError> {
    let player = game.player_on_turn().ok_or(GameError::NoCurrentPlayer)?;
    let hand: Vec<_> = player.hand.iter().copied().collect();
    let candidates = combinations(&hand);

    Ok(match layouted_combination(&game.rounds) {
        Some(layout) => candidates
            .into_iter()
            .filter(|c| can_put_down(c, layout))
            .collect(),
        None => candidates,
    })
}
