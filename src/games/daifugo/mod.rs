//! Daifugo: a climbing card game for three or more players.
//!
//! Players take turns laying down a combination that beats the one on the
//! table, or passing. When everyone else has passed, the table is cleared
//! and a new round starts. Emptying your hand takes the next ranking; the
//! last player holding cards takes last place.
//!
//! ## Flow
//!
//! ```
//! use daifugo::core::{Game, GameSettings, Move, Player};
//! use daifugo::games::daifugo::{
//!     append_player, deal_cards, decide_dealer_and_first_player, proceed_turn, reset_stock,
//! };
//!
//! let mut game = Game::new(GameSettings::new(42));
//! for id in ["alice", "bob", "carol"] {
//!     game = append_player(&game, Player::new(id)).unwrap();
//! }
//! let game = decide_dealer_and_first_player(&reset_stock(&game)).unwrap();
//! let game = deal_cards(&game).unwrap();
//!
//! let game = proceed_turn(&game, &Move::Pass).unwrap();
//! assert_eq!(game.player_index_on_turn, Some(1));
//! ```

mod queries;
mod setup;
mod turn;

pub use queries::{
    is_first_game, is_game_finished, is_round_finished, layouted_combination, legal_combinations,
    passed_player_indexes,
};
pub use setup::{
    append_player, clear_hands, deal_cards, decide_dealer_and_first_player, prepare_next_game,
    reset_stock, reset_stock_with,
};
pub use turn::proceed_turn;

use crate::core::{Game, Move};
use crate::error::GameError;
use crate::rules::{GameResult, RulesEngine};

/// Daifugo rules behind the `RulesEngine` interface.
#[derive(Clone, Copy, Debug, Default)]
pub struct Daifugo;

impl RulesEngine for Daifugo {
    fn legal_moves(&self, game: &Game) -> Vec<Move> {
        let Ok(plays) = legal_combinations(game) else {
            return Vec::new();
        };
        std::iter::once(Move::Pass)
            .chain(plays.into_iter().map(Move::Play))
            .collect()
    }

    fn apply_move(&self, game: &Game, mv: &Move) -> Result<Game, GameError> {
        proceed_turn(game, mv)
    }

    fn is_terminal(&self, game: &Game) -> Option<GameResult> {
        if !is_game_finished(game).unwrap_or(false) {
            return None;
        }
        let mut ranked: Vec<(u32, usize)> = game
            .players
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.ranking.map(|r| (r, i)))
            .collect();
        ranked.sort_unstable();
        Some(GameResult {
            standings: ranked.into_iter().map(|(_, i)| i).collect(),
        })
    }
}
