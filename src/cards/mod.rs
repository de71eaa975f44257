//! Card system: cards, combinations, and the rules that relate them.
//!
//! ## Key Types
//!
//! - `Card`: Suited card or joker, with suit and rank orderings
//! - `CardCombination`: Single, multiple (same rank) or sequence (same-suit run)
//!
//! ## Operations
//!
//! - `generator`: Enumerate every combination a hand can lay down
//! - `comparator`: Decide whether one combination covers another
//! - `deck`: Standard 52-card deck
//! - `hand`: Remove played cards from a hand

pub mod card;
pub mod combination;
pub mod comparator;
pub mod deck;
pub mod generator;
pub mod hand;

pub use card::{compare_by_rank, compare_by_suit, compare_canonical, is_stronger_rank, Card, Rank, Suit};
pub use combination::{CardCombination, Category, CombinationCards};
pub use comparator::can_put_down;
pub use deck::{standard_deck, DECK_SIZE};
pub use generator::{combinations, combinations_of};
pub use hand::remove_cards;
