//! Playing cards and their two orderings.
//!
//! ## Suit order
//!
//! Spade < Club < Diamond < Heart. Only used for sorting, never for strength.
//!
//! ## Rank order
//!
//! `3 4 5 6 7 8 9 10 11 12 13 1 2`, weakest to strongest. The Ace (1) and
//! the 2 are the strongest ranks.
//!
//! ## Jokers
//!
//! A joker has neither suit nor rank. It sorts before every suited card by
//! suit and after every suited card by rank, so it is always the strongest
//! single unit. Jokers never take part in multiples or sequences.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Card suit, declared in sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Club,
    Diamond,
    Heart,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Diamond, Suit::Heart];

    fn letter(self) -> char {
        match self {
            Suit::Spade => 'S',
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'S' => Some(Suit::Spade),
            'C' => Some(Suit::Club),
            'D' => Some(Suit::Diamond),
            'H' => Some(Suit::Heart),
            _ => None,
        }
    }
}

/// Card rank, declared in strength order (weakest first).
///
/// The derived `Ord` is the strength order, so `Rank::Two > Rank::Ace`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
}

impl Rank {
    /// All ranks, weakest to strongest.
    pub const ALL: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    /// Position in the strength order (0 for Three, 12 for Two).
    #[must_use]
    pub const fn strength(self) -> usize {
        self as usize
    }

    /// Printed face number (1 for Ace, 11-13 for court cards).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            other => other as u8 + 3,
        }
    }

    /// Inverse of [`Rank::number`].
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        Rank::ALL.iter().copied().find(|r| r.number() == number)
    }
}

/// A playing card: either suited or a joker.
///
/// Two cards are equal iff both are jokers, or both are suited with the same
/// suit and rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Suited { suit: Suit, rank: Rank },
    Joker,
}

impl Card {
    /// Create a suited card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Card::Suited { suit, rank }
    }

    #[must_use]
    pub fn is_joker(self) -> bool {
        matches!(self, Card::Joker)
    }

    #[must_use]
    pub fn suit(self) -> Option<Suit> {
        match self {
            Card::Suited { suit, .. } => Some(suit),
            Card::Joker => None,
        }
    }

    #[must_use]
    pub fn rank(self) -> Option<Rank> {
        match self {
            Card::Suited { rank, .. } => Some(rank),
            Card::Joker => None,
        }
    }
}

/// Sort order by suit. Jokers come first.
#[must_use]
pub fn compare_by_suit(a: &Card, b: &Card) -> Ordering {
    match (a, b) {
        (Card::Joker, Card::Joker) => Ordering::Equal,
        (Card::Joker, _) => Ordering::Less,
        (_, Card::Joker) => Ordering::Greater,
        (Card::Suited { suit: sa, .. }, Card::Suited { suit: sb, .. }) => sa.cmp(sb),
    }
}

/// Sort order by rank strength. Jokers come last.
///
/// Also used to compare the strength of two cards.
#[must_use]
pub fn compare_by_rank(a: &Card, b: &Card) -> Ordering {
    match (a, b) {
        (Card::Joker, Card::Joker) => Ordering::Equal,
        (Card::Joker, _) => Ordering::Greater,
        (_, Card::Joker) => Ordering::Less,
        (Card::Suited { rank: ra, .. }, Card::Suited { rank: rb, .. }) => ra.cmp(rb),
    }
}

/// Canonical order: rank first, suit breaks ties.
#[must_use]
pub fn compare_canonical(a: &Card, b: &Card) -> Ordering {
    compare_by_rank(a, b).then_with(|| compare_by_suit(a, b))
}

/// True iff `subject` is strictly stronger than `target`.
#[must_use]
pub fn is_stronger_rank(subject: &Card, target: &Card) -> bool {
    compare_by_rank(subject, target) == Ordering::Greater
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Suited { suit, rank } => write!(f, "{}{}", suit.letter(), rank.number()),
            Card::Joker => write!(f, "JK"),
        }
    }
}

impl FromStr for Card {
    type Err = GameError;

    /// Parse `S3`, `c13`, `D1`, `H10` or `JK`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("JK") {
            return Ok(Card::Joker);
        }

        let mut chars = trimmed.chars();
        let suit = chars
            .next()
            .and_then(Suit::from_letter)
            .ok_or_else(|| GameError::ParseCard(s.to_string()))?;
        let rank = chars
            .as_str()
            .parse::<u8>()
            .ok()
            .and_then(Rank::from_number)
            .ok_or_else(|| GameError::ParseCard(s.to_string()))?;

        Ok(Card::new(suit, rank))
    }
}
