//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for each game state
//! - How moves produce the next state
//! - Final standings
//!
//! Callers drive play through `RulesEngine`; the engine never picks a move
//! on their behalf.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
