//! Hand helpers.

use im::Vector;

use super::card::Card;
use crate::error::GameError;

/// Remove each of `removed` from `hand`, one matching card per entry.
///
/// The remaining cards keep their relative order. Fails with
/// `CardNotInHand` on the first card that is not present.
pub fn remove_cards(hand: &Vector<Card>, removed: &[Card]) -> Result<Vector<Card>, GameError> {
    let mut remaining = hand.clone();
    for card in removed {
        let index = remaining
            .index_of(card)
            .ok_or(GameError::CardNotInHand(*card))?;
        remaining.remove(index);
    }
    Ok(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(texts: &[&str]) -> Vector<Card> {
        texts.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_remove_cards_keeps_order() {
        let hand = cards(&["S3", "C3", "D3", "H3", "S4", "C4", "D4", "H4"]);
        let removed = cards(&["S4", "C4"]);
        let removed: Vec<Card> = removed.into_iter().collect();

        let result = remove_cards(&hand, &removed).unwrap();
        assert_eq!(result, cards(&["S3", "C3", "D3", "H3", "D4", "H4"]));
        // Input untouched.
        assert_eq!(hand.len(), 8);
    }

    #[test]
    fn test_remove_missing_card() {
        let hand = cards(&["S3"]);
        let missing: Card = "H9".parse().unwrap();
        assert_eq!(
            remove_cards(&hand, &[missing]),
            Err(GameError::CardNotInHand(missing))
        );
    }

    #[test]
    fn test_remove_same_card_twice_fails() {
        let hand = cards(&["S3", "C3"]);
        let s3: Card = "S3".parse().unwrap();
        assert!(remove_cards(&hand, &[s3, s3]).is_err());
    }
}
