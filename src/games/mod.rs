//! Game implementations.
//!
//! Each game builds on `core` state and exposes its operations plus a
//! `RulesEngine` implementation.

pub mod daifugo;
