//! The turn reducer.
//!
//! `proceed_turn` is the only transition of a game in progress. It checks
//! the move against the state it is given, then builds the next state from a
//! clone; a failed check returns before anything is built.
//!
//! ## Rotation
//!
//! Players who are unranked and have not passed in the current round are
//! *alive*. The alive set is taken before the move is applied:
//!
//! - With two alive players, a pass (or the actor playing out) closes the
//!   round and the other alive player opens the next one.
//! - Otherwise the turn moves to the next alive seat after the actor.

use tracing::{debug, info};

use super::queries::{is_game_finished, layouted_combination, passed_player_indexes};
use crate::cards::{can_put_down, combinations, remove_cards};
use crate::core::{Game, Move, Round, Turn};
use crate::error::GameError;

/// Apply `mv` for the player on turn.
pub fn proceed_turn(game: &Game, mv: &Move) -> Result<Game, GameError> {
    let actor = game
        .player_index_on_turn
        .filter(|&i| i < game.player_count())
        .ok_or(GameError::NoCurrentPlayer)?;

    if let Move::Play(combination) = mv {
        let hand: Vec<_> = game.players[actor].hand.iter().copied().collect();
        if !combinations(&hand).contains(combination) {
            return Err(GameError::CombinationNotInHand);
        }
        if let Some(layout) = layouted_combination(&game.rounds) {
            if !can_put_down(combination, layout) {
                return Err(GameError::IllegalPlay);
            }
        }
    }

    let alive = alive_player_indexes(game);

    let mut next = game.clone().with_recorded_turn(Turn {
        player_index: actor,
        combination: mv.combination().cloned(),
    });

    let mut actor_went_out = false;
    if let Move::Play(combination) = mv {
        let remaining = remove_cards(&next.players[actor].hand, combination.cards())?;
        if remaining.is_empty() {
            let ranking = next_ranking(&next);
            next.players[actor].ranking = Some(ranking);
            actor_went_out = true;
            info!(player = actor, ranking, "player out");
        }
        next.players[actor].hand = remaining;
    }

    rank_last_player(&mut next);

    debug!(player = actor, play = ?mv.combination().map(ToString::to_string), "move applied");

    if is_game_finished(&next)? {
        next.player_index_on_turn = None;
        info!(rounds = next.rounds.len(), "game finished");
        return Ok(next);
    }

    if alive.len() == 2 && (mv.is_pass() || actor_went_out) {
        let opener = alive.iter().copied().find(|&i| i != actor).unwrap_or(actor);
        next.rounds.push_back(Round::new());
        next.player_index_on_turn = Some(opener);
        info!(opener, "round closed");
    } else {
        next.player_index_on_turn = Some(next_alive_after(actor, &alive, game.player_count()));
    }

    Ok(next)
}

/// Unranked players who have not passed in the current round.
fn alive_player_indexes(game: &Game) -> Vec<usize> {
    let passed = game
        .current_round()
        .map(passed_player_indexes)
        .unwrap_or_default();

    game.players
        .iter()
        .enumerate()
        .filter(|(i, p)| !p.is_out() && !passed.contains(i))
        .map(|(i, _)| i)
        .collect()
}

fn next_ranking(game: &Game) -> u32 {
    game.players.iter().filter_map(|p| p.ranking).max().unwrap_or(0) + 1
}

/// A lone unranked player takes the last place.
fn rank_last_player(game: &mut Game) {
    let unranked: Vec<usize> = game
        .players
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_out())
        .map(|(i, _)| i)
        .collect();
    let &[last] = unranked.as_slice() else {
        return;
    };

    let ranking = next_ranking(game);
    game.players[last].ranking = Some(ranking);
    info!(player = last, ranking, "player out");
}

/// First alive seat after `actor`, wrapping around the table.
fn next_alive_after(actor: usize, alive: &[usize], player_count: usize) -> usize {
    (1..player_count)
        .map(|offset| (actor + offset) % player_count)
        .find(|i| alive.contains(i))
        .unwrap_or(actor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardCombination};
    use crate::core::{GameSettings, Player};

    fn c(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn table(hands: &[&[&str]]) -> Game {
        let players = hands
            .iter()
            .enumerate()
            .map(|(i, hand)| Player::new(i.to_string()).with_hand(hand.iter().map(|s| c(s))));
        Game::new(GameSettings::new(1)).with_players(players).with_turn(0)
    }

    #[test]
    fn test_next_alive_after_wraps() {
        assert_eq!(next_alive_after(3, &[0, 1, 3], 4), 0);
        assert_eq!(next_alive_after(0, &[0, 2], 4), 2);
        assert_eq!(next_alive_after(1, &[1], 3), 1);
    }

    #[test]
    fn test_pass_moves_turn() {
        let game = table(&[&["S3"], &["C3"], &["D3"]]);
        let next = proceed_turn(&game, &Move::Pass).unwrap();

        assert_eq!(next.player_index_on_turn, Some(1));
        assert_eq!(next.current_round().unwrap().turns.back(), Some(&Turn::pass(0)));
    }

    #[test]
    fn test_requires_current_player() {
        let game = table(&[&["S3"], &["C3"]]);
        let mut idle = game.clone();
        idle.player_index_on_turn = None;
        assert_eq!(proceed_turn(&idle, &Move::Pass).unwrap_err(), GameError::NoCurrentPlayer);

        let stray = game.with_turn(9);
        assert_eq!(proceed_turn(&stray, &Move::Pass).unwrap_err(), GameError::NoCurrentPlayer);
    }

    #[test]
    fn test_rejects_combination_not_in_hand() {
        let game = table(&[&["S3", "C3"], &["D3"]]);
        let pair = Move::Play(CardCombination::multiple([c("S3"), c("D3")]));
        assert_eq!(proceed_turn(&game, &pair).unwrap_err(), GameError::CombinationNotInHand);
    }

    #[test]
    fn test_rejects_weaker_play() {
        let game = table(&[&["S5", "S9"], &["C4", "C8"]]);
        let game = proceed_turn(&game, &Move::Play(CardCombination::single(c("S5")))).unwrap();

        let weaker = Move::Play(CardCombination::single(c("C4")));
        assert_eq!(proceed_turn(&game, &weaker).unwrap_err(), GameError::IllegalPlay);
    }

    #[test]
    fn test_play_removes_cards() {
        let game = table(&[&["S3", "C3", "H9"], &["D4"]]);
        let pair = CardCombination::multiple([c("C3"), c("S3")]);
        let next = proceed_turn(&game, &Move::Play(pair.clone())).unwrap();

        assert_eq!(next.players[0].hand.iter().copied().collect::<Vec<_>>(), vec![c("H9")]);
        assert_eq!(layouted_combination(&next.rounds), Some(&pair));
        assert_eq!(next.player_index_on_turn, Some(1));
        // Input untouched.
        assert_eq!(game.players[0].hand.len(), 3);
    }

    #[test]
    fn test_playing_out_ranks_player_and_last_one() {
        let game = table(&[&["S3"], &["C4", "C5"]]);
        let next = proceed_turn(&game, &Move::Play(CardCombination::single(c("S3")))).unwrap();

        assert_eq!(next.players[0].ranking, Some(1));
        assert_eq!(next.players[1].ranking, Some(2));
        assert_eq!(next.player_index_on_turn, None);
        assert_eq!(is_game_finished(&next), Ok(true));
    }

    #[test]
    fn test_finished_game_rejects_moves() {
        let game = table(&[&["S3"], &["C4"]]);
        let done = proceed_turn(&game, &Move::Play(CardCombination::single(c("S3")))).unwrap();
        assert_eq!(proceed_turn(&done, &Move::Pass).unwrap_err(), GameError::NoCurrentPlayer);
    }
}
