//! Whether one combination may be laid over another.

use super::card::is_stronger_rank;
use super::combination::{CardCombination, Category};

/// Can `pulled_out` legally cover `layouted`?
///
/// Categories must match. Multiples and sequences must also match in size.
/// Then the leading (lowest) card of `pulled_out` must be strictly stronger
/// than the leading card of `layouted`; both combinations are in canonical
/// order, so that single comparison decides.
#[must_use]
pub fn can_put_down(pulled_out: &CardCombination, layouted: &CardCombination) -> bool {
    if pulled_out.category() != layouted.category() {
        return false;
    }

    let same_size = match layouted.category() {
        Category::Single => true,
        Category::Multiple | Category::Sequence => pulled_out.len() == layouted.len(),
    };
    if !same_size {
        return false;
    }

    match (pulled_out.leading_card(), layouted.leading_card()) {
        (Some(subject), Some(target)) => is_stronger_rank(subject, target),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn c(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_single_over_single() {
        let three = CardCombination::single(c("S3"));
        let four = CardCombination::single(c("H4"));
        assert!(can_put_down(&four, &three));
        assert!(!can_put_down(&three, &four));
        assert!(!can_put_down(&three, &CardCombination::single(c("H3"))));
    }

    #[test]
    fn test_two_beats_ace() {
        let ace = CardCombination::single(c("S1"));
        let two = CardCombination::single(c("C2"));
        assert!(can_put_down(&two, &ace));
        assert!(!can_put_down(&ace, &two));
    }

    #[test]
    fn test_category_mismatch() {
        let pair = CardCombination::multiple([c("S4"), c("H4")]);
        let single = CardCombination::single(c("S3"));
        let run = CardCombination::sequence([c("S5"), c("S6"), c("S7")]);
        assert!(!can_put_down(&pair, &single));
        assert!(!can_put_down(&single, &pair));
        assert!(!can_put_down(&run, &pair));
    }

    #[test]
    fn test_multiple_size_must_match() {
        let pair = CardCombination::multiple([c("S3"), c("C3")]);
        let triple = CardCombination::multiple([c("S4"), c("C4"), c("D4")]);
        let pair_of_fours = CardCombination::multiple([c("S4"), c("C4")]);
        assert!(!can_put_down(&triple, &pair));
        assert!(can_put_down(&pair_of_fours, &pair));
    }

    #[test]
    fn test_sequence_compares_lowest_card() {
        let low = CardCombination::sequence([c("S3"), c("S4"), c("S5")]);
        let high = CardCombination::sequence([c("H4"), c("H5"), c("H6")]);
        let longer = CardCombination::sequence([c("H4"), c("H5"), c("H6"), c("H7")]);
        assert!(can_put_down(&high, &low));
        assert!(!can_put_down(&low, &high));
        assert!(!can_put_down(&longer, &low));
    }

    #[test]
    fn test_equal_combination_never_beats_itself() {
        let pair = CardCombination::multiple([c("S3"), c("C3")]);
        assert!(!can_put_down(&pair, &pair.clone()));
        let other_pair = CardCombination::multiple([c("D3"), c("H3")]);
        assert!(!can_put_down(&other_pair, &pair));
    }
}
