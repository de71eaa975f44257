//! Standard deck composition.

use super::card::{Card, Rank, Suit};

/// Number of cards in a standard deck (no jokers).
pub const DECK_SIZE: usize = 52;

/// The 52 suited cards, suit by suit, weakest rank first.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}
