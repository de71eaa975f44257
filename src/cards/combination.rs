//! Card combinations: the unit a player lays down in one turn.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{compare_canonical, Card};

/// Shape of a combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Exactly one card.
    Single,
    /// Two or more cards of the same rank.
    Multiple,
    /// Three or more same-suit cards with consecutive ranks.
    Sequence,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Single, Category::Multiple, Category::Sequence];
}

/// Cards of a combination. Most plays fit inline.
pub type CombinationCards = SmallVec<[Card; 4]>;

/// A category plus its cards, always held in canonical order
/// (rank strength, then suit).
///
/// Because the order is canonical, derived equality is the unordered
/// card-for-card comparison: same category, same cardinality, same cards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawCombination")]
pub struct CardCombination {
    category: Category,
    cards: CombinationCards,
}

#[derive(Deserialize)]
struct RawCombination {
    category: Category,
    cards: CombinationCards,
}

impl From<RawCombination> for CardCombination {
    fn from(raw: RawCombination) -> Self {
        CardCombination::new(raw.category, raw.cards)
    }
}

impl CardCombination {
    /// Create a combination, sorting its cards into canonical order.
    ///
    /// The shape is not validated here; see [`CardCombination::is_well_formed`].
    #[must_use]
    pub fn new(category: Category, cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: CombinationCards = cards.into_iter().collect();
        cards.sort_by(compare_canonical);
        Self { category, cards }
    }

    #[must_use]
    pub fn single(card: Card) -> Self {
        Self::new(Category::Single, [card])
    }

    #[must_use]
    pub fn multiple(cards: impl IntoIterator<Item = Card>) -> Self {
        Self::new(Category::Multiple, cards)
    }

    #[must_use]
    pub fn sequence(cards: impl IntoIterator<Item = Card>) -> Self {
        Self::new(Category::Sequence, cards)
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card that decides the combination's strength: the lowest one.
    #[must_use]
    pub fn leading_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Check the structural invariant of the category.
    ///
    /// - single: exactly one card
    /// - multiple: two or more suited cards of one rank
    /// - sequence: three or more suited cards of one suit, consecutive ranks
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        match self.category {
            Category::Single => self.cards.len() == 1,
            Category::Multiple => {
                let first = match self.cards.first().and_then(|c| c.rank()) {
                    Some(rank) => rank,
                    None => return false,
                };
                self.cards.len() >= 2 && self.cards.iter().all(|c| c.rank() == Some(first))
            }
            Category::Sequence => {
                let first_suit = match self.cards.first().and_then(|c| c.suit()) {
                    Some(suit) => suit,
                    None => return false,
                };
                self.cards.len() >= 3
                    && self.cards.iter().all(|c| c.suit() == Some(first_suit))
                    && self.cards.windows(2).all(|pair| match (pair[0].rank(), pair[1].rank()) {
                        (Some(a), Some(b)) => b.strength() == a.strength() + 1,
                        _ => false,
                    })
            }
        }
    }
}

impl fmt::Display for CardCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}[", self.category)?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}
