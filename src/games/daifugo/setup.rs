//! Table setup: seating, stock, dealer, dealing and moving to the next game.

use tracing::{debug, info};

use super::queries::{is_first_game, is_game_finished};
use crate::cards::standard_deck;
use crate::core::{shuffle, FirstDealerRule, Game, Grade, Player, RandomSource, Round};
use crate::error::GameError;

/// Seat a new player at the end of the player list.
///
/// Fails with `DuplicatePlayerId` if the id is already taken.
pub fn append_player(game: &Game, player: Player) -> Result<Game, GameError> {
    if game.players.iter().any(|p| p.id == player.id) {
        return Err(GameError::DuplicatePlayerId(player.id));
    }

    let mut next = game.clone();
    next.players.push_back(player);
    Ok(next)
}

/// Empty every player's hand.
#[must_use]
pub fn clear_hands(game: &Game) -> Game {
    let mut next = game.clone();
    for player in next.players.iter_mut() {
        player.hand.clear();
    }
    next
}

/// Replace the stock with a freshly shuffled standard deck, drawing from the
/// game's own RNG. The returned game carries the advanced RNG.
#[must_use]
pub fn reset_stock(game: &Game) -> Game {
    let mut next = game.clone();
    next.stock = shuffle(&standard_deck(), &mut next.rng).into_iter().collect();
    next
}

/// Like [`reset_stock`], but shuffled with a caller-supplied source.
#[must_use]
pub fn reset_stock_with<R: RandomSource + ?Sized>(game: &Game, source: &mut R) -> Game {
    let mut next = game.clone();
    next.stock = shuffle(&standard_deck(), source).into_iter().collect();
    next
}

/// Pick the dealer and hand them the first turn.
///
/// In the first game the seat comes from `settings.first_dealer`. Later
/// games are dealt by the Beggar of the previous one.
pub fn decide_dealer_and_first_player(game: &Game) -> Result<Game, GameError> {
    let player_count = game.player_count();
    if player_count == 0 {
        return Err(GameError::NoPlayers);
    }

    let mut next = game.clone();
    let dealer = if is_first_game(&game.players) {
        match game.settings.first_dealer {
            FirstDealerRule::Seat(seat) if seat < player_count => seat,
            FirstDealerRule::Seat(seat) => {
                return Err(GameError::InvalidSeat { seat, player_count });
            }
            FirstDealerRule::Random => next.rng.gen_range_usize(0..player_count),
        }
    } else {
        game.players
            .iter()
            .position(|p| p.grade == Some(Grade::Beggar))
            .ok_or(GameError::NoGradeOneFound)?
    };

    debug!(dealer, "dealer decided");
    next.dealer_index = Some(dealer);
    next.player_index_on_turn = Some(dealer);
    Ok(next)
}

/// Deal the whole stock round-robin, starting with the player after the
/// dealer.
pub fn deal_cards(game: &Game) -> Result<Game, GameError> {
    let dealer = game.dealer_index.ok_or(GameError::DealerNotDecided)?;
    let player_count = game.player_count();
    if player_count == 0 {
        return Err(GameError::NoPlayers);
    }

    let mut next = game.clone();
    let stock = std::mem::take(&mut next.stock);
    let dealt = stock.len();
    for (offset, card) in stock.into_iter().enumerate() {
        let seat = (dealer + 1 + offset) % player_count;
        if let Some(player) = next.players.get_mut(seat) {
            player.hand.push_back(card);
        }
    }

    debug!(dealer, cards = dealt, players = player_count, "cards dealt");
    Ok(next)
}

/// Turn the rankings of a finished game into grades and reset the table.
///
/// Hands, rankings, rounds, stock, dealer and turn pointer are cleared; the
/// players and their new grades stay.
pub fn prepare_next_game(game: &Game) -> Result<Game, GameError> {
    if !is_game_finished(game)? {
        return Err(GameError::GameNotFinished);
    }

    let player_count = game.player_count();
    let mut next = clear_hands(game);
    for player in next.players.iter_mut() {
        player.grade = player
            .ranking
            .map(|ranking| Grade::from_ranking(ranking, player_count));
        player.ranking = None;
    }
    next.rounds = im::Vector::unit(Round::new());
    next.stock.clear();
    next.dealer_index = None;
    next.player_index_on_turn = None;

    info!(players = player_count, "next game prepared");
    Ok(next)
}
