//! Shared helpers for integration tests.

#![allow(dead_code)]

use daifugo::core::{Game, GameSettings, Player};
use daifugo::games::daifugo::append_player;
use daifugo::Card;
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, else `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Parse a card from its text form, e.g. `"S3"` or `"H10"`.
pub fn card(text: &str) -> Card {
    text.parse().unwrap()
}

pub fn cards(texts: &[&str]) -> Vec<Card> {
    texts.iter().map(|t| card(t)).collect()
}

/// A game with players `"0"`, `"1"`, ... seated through `append_player`.
pub fn seated_game(seed: u64, player_count: usize) -> Game {
    (0..player_count).fold(Game::new(GameSettings::new(seed)), |game, i| {
        append_player(&game, Player::new(i.to_string())).unwrap()
    })
}
