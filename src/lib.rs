//! # daifugo
//!
//! A rules engine for Daifugo (also known as Daihinmin or President).
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every operation takes `&Game` and returns a new
//!    `Game` or a `GameError`. The input is never changed, even on failure.
//!
//! 2. **Caller Chooses**: The engine reports legal moves but never picks
//!    one. Human input, AI and tests all drive play the same way.
//!
//! 3. **Explicit Randomness**: The seed lives in `GameSettings`; shuffles can
//!    also be driven by any `RandomSource`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, so each
//!   transition edits a cheap copy of the previous state.
//!
//! - **Canonical Combinations**: Combination cards are kept sorted, making
//!   equality independent of the order cards were picked in.
//!
//! ## Modules
//!
//! - `core`: Players, grades, game state, moves, RNG, configuration
//! - `cards`: Cards, combinations, generator, comparator, deck
//! - `rules`: RulesEngine trait for game implementations
//! - `games`: The Daifugo operations and engine
//! - `error`: Error type shared by every operation

pub mod cards;
pub mod core;
pub mod error;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    FirstDealerRule, GameSettings,
    Grade, Player,
    Game, Round,
    Move, Turn,
    GameRng, RandomSource,
};

pub use crate::cards::{Card, CardCombination, Category, Rank, Suit};

pub use crate::error::{ErrorKind, GameError};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::games::daifugo::Daifugo;
