//! Enumerate every combination a hand can lay down.
//!
//! Output order is deterministic: singles, then multiples, then sequences.
//!
//! - Singles follow hand order.
//! - Multiples follow rank strength; within a rank group, subsets are
//!   ordered by size, then lexicographically by position in the group.
//! - Sequences follow suit order, then starting rank, then length.
//!
//! Jokers are skipped entirely.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::card::{compare_canonical, Card, Rank, Suit};
use super::combination::{CardCombination, Category};

/// Every combination obtainable from `hand`, all categories.
#[must_use]
pub fn combinations(hand: &[Card]) -> Vec<CardCombination> {
    combinations_of(hand, &Category::ALL)
}

/// Every combination obtainable from `hand`, restricted to `categories`.
#[must_use]
pub fn combinations_of(hand: &[Card], categories: &[Category]) -> Vec<CardCombination> {
    let suited: Vec<Card> = hand.iter().copied().filter(|c| !c.is_joker()).collect();

    let mut out = Vec::new();
    if categories.contains(&Category::Single) {
        out.extend(singles(&suited));
    }
    if categories.contains(&Category::Multiple) {
        out.extend(multiples(&suited));
    }
    if categories.contains(&Category::Sequence) {
        out.extend(sequences(&suited));
    }
    out
}

/// One single per card.
#[must_use]
pub fn singles(cards: &[Card]) -> Vec<CardCombination> {
    cards
        .iter()
        .filter(|c| !c.is_joker())
        .map(|&c| CardCombination::single(c))
        .collect()
}

/// Every subset of size >= 2 of every same-rank group.
#[must_use]
pub fn multiples(cards: &[Card]) -> Vec<CardCombination> {
    let mut sorted: Vec<Card> = cards.iter().copied().filter(|c| !c.is_joker()).collect();
    sorted.sort_by(compare_canonical);

    let mut by_rank: FxHashMap<Rank, SmallVec<[Card; 4]>> = FxHashMap::default();
    for card in &sorted {
        if let Some(rank) = card.rank() {
            by_rank.entry(rank).or_default().push(*card);
        }
    }

    let mut out = Vec::new();
    for rank in Rank::ALL {
        let Some(group) = by_rank.get(&rank) else {
            continue;
        };
        for size in 2..=group.len() {
            for indexes in index_combinations(group.len(), size) {
                out.push(CardCombination::multiple(indexes.iter().map(|&i| group[i])));
            }
        }
    }
    out
}

/// Every contiguous same-suit run of length >= 3, including sub-runs.
#[must_use]
pub fn sequences(cards: &[Card]) -> Vec<CardCombination> {
    let mut by_suit: FxHashMap<Suit, [Option<Card>; 13]> = FxHashMap::default();
    for card in cards {
        if let Card::Suited { suit, rank } = *card {
            by_suit.entry(suit).or_insert([None; 13])[rank.strength()] = Some(*card);
        }
    }

    let mut out = Vec::new();
    for suit in Suit::ALL {
        let Some(present) = by_suit.get(&suit) else {
            continue;
        };
        for from in 0..Rank::ALL.len() {
            for to in (from + 2)..Rank::ALL.len() {
                // Longer spans from here contain the same gap.
                if present[from..=to].iter().any(Option::is_none) {
                    break;
                }
                out.push(CardCombination::sequence(present[from..=to].iter().flatten().copied()));
            }
        }
    }
    out
}

/// All `size`-element index subsets of `0..count`, in lexicographic order.
fn index_combinations(count: usize, size: usize) -> Vec<SmallVec<[usize; 4]>> {
    let mut out = Vec::new();
    if size == 0 || size > count {
        return out;
    }

    let mut indexes: SmallVec<[usize; 4]> = (0..size).collect();
    loop {
        out.push(indexes.clone());

        // Rightmost position that can still move right.
        let Some(pos) = (0..size).rev().find(|&i| indexes[i] != i + count - size) else {
            return out;
        };
        indexes[pos] += 1;
        for i in (pos + 1)..size {
            indexes[i] = indexes[i - 1] + 1;
        }
    }
}
