//! Property tests for hand valuation and display.

use bjtable::{Card, HandDisplay, PerfectPairs, Suit, hand_display, hand_total, is_blackjack};
use proptest::prelude::*;

fn card_strategy() -> impl Strategy<Value = Card> {
    (1u8..=13, 0usize..4).prop_map(|(rank, suit)| Card::new(Suit::ALL[suit], rank))
}

fn cards_strategy() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card_strategy(), 0..=8)
}

// Every ace counted as 1.
fn hard_total(cards: &[Card]) -> u8 {
    cards
        .iter()
        .map(|card| if card.is_ace() { 1 } else { card.value() })
        .sum()
}

proptest! {
    #[test]
    fn total_counts_at_most_one_ace_high(cards in cards_strategy()) {
        let hard = hard_total(&cards);
        let total = hand_total(&cards);

        prop_assert!(total == hard || total == hard + 10);
        if total == hard + 10 {
            prop_assert!(cards.iter().any(|card| card.is_ace()));
            prop_assert!(total <= 21);
        }
    }

    #[test]
    fn total_is_best_reading_not_over_21(cards in cards_strategy()) {
        let hard = hard_total(&cards);
        let total = hand_total(&cards);

        if hard > 21 {
            prop_assert_eq!(total, hard);
        } else {
            prop_assert!(total <= 21);
            let has_ace = cards.iter().any(|card| card.is_ace());
            if has_ace && hard + 10 <= 21 {
                prop_assert_eq!(total, hard + 10);
            }
        }
    }

    #[test]
    fn display_agrees_with_total(cards in cards_strategy()) {
        let total = hand_total(&cards);

        match hand_display(&cards) {
            HandDisplay::Hard(value) => prop_assert_eq!(value, total),
            HandDisplay::Soft { hard, soft } => {
                prop_assert_eq!(soft, hard + 10);
                prop_assert!(soft < 21);
                prop_assert_eq!(soft, total);
                prop_assert_eq!(hand_display(&cards).to_string(), format!("{hard}/{soft}"));
            }
        }
    }

    #[test]
    fn natural_needs_exactly_two_cards(cards in cards_strategy()) {
        if is_blackjack(&cards) {
            prop_assert_eq!(cards.len(), 2);
            prop_assert!(cards.iter().any(|card| card.is_ace()));
            prop_assert!(cards.iter().any(|card| card.is_ten_value()));
        }
    }

    #[test]
    fn perfect_pairs_requires_equal_ranks(first in card_strategy(), second in card_strategy()) {
        let kind = PerfectPairs::classify(first, second);
        prop_assert_eq!(kind.is_some(), first.rank == second.rank);
        if first.rank == second.rank && first.suit == second.suit {
            prop_assert_eq!(kind, Some(PerfectPairs::Perfect));
        }
    }
}

#[test]
fn display_examples() {
    let cards = |ranks: &[u8]| -> Vec<Card> {
        ranks
            .iter()
            .map(|&rank| Card::new(Suit::Spades, rank))
            .collect()
    };

    assert_eq!(hand_display(&[]).to_string(), "0");
    assert_eq!(hand_display(&cards(&[1, 9])).to_string(), "10/20");
    assert_eq!(hand_display(&cards(&[1, 10])).to_string(), "21");
    assert_eq!(hand_display(&cards(&[1, 5, 5])).to_string(), "21");
    assert_eq!(hand_display(&cards(&[1, 1, 9])).to_string(), "21");
    assert_eq!(hand_display(&cards(&[1, 6, 10])).to_string(), "17");
    assert_eq!(hand_display(&cards(&[10, 6])).to_string(), "16");
}
