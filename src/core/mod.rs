//! Core engine types: players, state, moves, RNG, configuration.
//!
//! This module contains the state the rules operate on. It holds no rules
//! itself; see `games::daifugo` for the operations.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, Turn};
pub use config::{FirstDealerRule, GameSettings};
pub use player::{Grade, Player};
pub use rng::{shuffle, GameRng, RandomSource};
pub use state::{Game, Round};
