//! Property tests for combination generation and comparison.

use daifugo::cards::generator::{multiples, sequences};
use daifugo::cards::{can_put_down, combinations, standard_deck, Card, Category, Rank, Suit};
use proptest::prelude::*;

/// A hand of distinct cards drawn from the standard deck.
fn hand() -> impl Strategy<Value = Vec<Card>> {
    proptest::sample::subsequence(standard_deck(), 0..=13)
}

fn suits(count: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Vec<Suit>> {
    proptest::sample::subsequence(Suit::ALL.to_vec(), count)
}

fn count_of(cards: &[Card], card: &Card) -> usize {
    cards.iter().filter(|c| *c == card).count()
}

proptest! {
    /// Every generated combination is drawn from the hand and well formed.
    #[test]
    fn prop_combinations_come_from_hand(hand in hand()) {
        for combination in combinations(&hand) {
            prop_assert!(combination.is_well_formed(), "{} is malformed", combination);
            for card in combination.cards() {
                prop_assert!(count_of(combination.cards(), card) <= count_of(&hand, card));
            }
        }
    }

    /// No combination beats an equal copy of itself.
    #[test]
    fn prop_can_put_down_is_irreflexive(hand in hand()) {
        for combination in combinations(&hand) {
            prop_assert!(!can_put_down(&combination, &combination.clone()));
        }
    }

    /// Beating requires the same category and the same number of cards.
    #[test]
    fn prop_can_put_down_requires_same_shape(hand in hand()) {
        let all = combinations(&hand);
        for a in &all {
            for b in &all {
                if can_put_down(a, b) {
                    prop_assert_eq!(a.category(), b.category());
                    prop_assert_eq!(a.len(), b.len());
                    prop_assert!(!can_put_down(b, a));
                }
            }
        }
    }

    /// k cards of one rank give 2^k - k - 1 multiples.
    #[test]
    fn prop_multiple_count(rank in proptest::sample::select(Rank::ALL.to_vec()), suits in suits(1..=4)) {
        let cards: Vec<Card> = suits.iter().map(|&s| Card::new(s, rank)).collect();
        let k = cards.len() as u32;
        prop_assert_eq!(multiples(&cards).len(), (1usize << k) - k as usize - 1);
    }

    /// A run of n same-suit cards gives (n - 1)(n - 2) / 2 sequences.
    #[test]
    fn prop_sequence_count(
        suit in proptest::sample::select(Suit::ALL.to_vec()),
        (start, n) in (3usize..=13).prop_flat_map(|n| (0..=13 - n, Just(n))),
    ) {
        let run: Vec<Card> = Rank::ALL[start..start + n]
            .iter()
            .map(|&rank| Card::new(suit, rank))
            .collect();

        let found = sequences(&run);
        prop_assert_eq!(found.len(), (n - 1) * (n - 2) / 2);
        prop_assert!(found.iter().all(|c| c.category() == Category::Sequence));
    }
}

#[test]
fn test_small_run_counts() {
    let run = |n: usize| -> Vec<Card> {
        Rank::ALL[..n].iter().map(|&rank| Card::new(Suit::Heart, rank)).collect()
    };
    assert_eq!(sequences(&run(3)).len(), 1);
    assert_eq!(sequences(&run(4)).len(), 3);
    assert_eq!(sequences(&run(5)).len(), 6);
}
