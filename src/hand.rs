//! Hand valuation and the player and dealer hand representations.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Returns the best blackjack total for the cards.
///
/// Aces start at 11 and are demoted to 1 one at a time while the total is
/// over 21. The result is the best total not over 21 when one exists,
/// otherwise the smallest (busting) total.
#[must_use]
pub fn hand_total(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether the cards hold an ace still counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Returns whether the cards are a natural: exactly two cards totalling 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_total(cards) == 21
}

/// How a hand total is shown to the player.
///
/// Displays as the hard total (`"16"`) or as `"hard/soft"` (`"10/20"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandDisplay {
    /// A single total.
    Hard(u8),
    /// Both readings of a hand holding an ace that can still count 11.
    Soft {
        /// Total with every ace counted as 1.
        hard: u8,
        /// Total with one ace counted as 11.
        soft: u8,
    },
}

impl fmt::Display for HandDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hard(total) => write!(f, "{total}"),
            Self::Soft { hard, soft } => write!(f, "{hard}/{soft}"),
        }
    }
}

/// Returns the display form of the hand total.
///
/// A soft 21 shows as plain `21`, and a soft reading over 21 is dropped.
#[must_use]
pub fn hand_display(cards: &[Card]) -> HandDisplay {
    let mut hard: u8 = 0;
    let mut has_ace = false;
    for card in cards {
        if card.is_ace() {
            has_ace = true;
            hard = hard.saturating_add(1);
        } else {
            hard = hard.saturating_add(card.value());
        }
    }

    if !has_ace {
        return HandDisplay::Hard(hard);
    }

    let soft = hard.saturating_add(10);
    match soft {
        22.. => HandDisplay::Hard(hard),
        21 => HandDisplay::Hard(21),
        _ => HandDisplay::Soft { hard, soft },
    }
}

/// A player's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Bet amount for this hand, in minor units.
    bet: u64,
    doubled: bool,
    stood: bool,
    done: bool,
    /// Split aces take exactly one card.
    split_aces: bool,
    /// Whether this hand is from a split.
    from_split: bool,
    perfect_pairs_bet: u64,
    twenty_one_plus_three_bet: u64,
}

impl Hand {
    /// Creates a new empty hand with the given bet and no side bets.
    #[must_use]
    pub const fn new(bet: u64) -> Self {
        Self::with_side_bets(bet, 0, 0)
    }

    /// Creates the opening hand of a round, carrying both side bets.
    #[must_use]
    pub const fn with_side_bets(
        bet: u64,
        perfect_pairs_bet: u64,
        twenty_one_plus_three_bet: u64,
    ) -> Self {
        Self {
            cards: Vec::new(),
            bet,
            doubled: false,
            stood: false,
            done: false,
            split_aces: false,
            from_split: false,
            perfect_pairs_bet,
            twenty_one_plus_three_bet,
        }
    }

    /// Creates a new hand from a split with a single card.
    ///
    /// Side bets never carry over to a split hand.
    #[must_use]
    pub fn from_split(card: Card, bet: u64, split_aces: bool) -> Self {
        Self {
            cards: alloc::vec![card],
            split_aces,
            from_split: true,
            ..Self::new(bet)
        }
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Returns the Perfect Pairs stake riding on this hand.
    #[must_use]
    pub const fn perfect_pairs_bet(&self) -> u64 {
        self.perfect_pairs_bet
    }

    /// Returns the 21+3 stake riding on this hand.
    #[must_use]
    pub const fn twenty_one_plus_three_bet(&self) -> u64 {
        self.twenty_one_plus_three_bet
    }

    /// Returns whether the hand was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns whether the player stood (or auto-stood) on this hand.
    #[must_use]
    pub const fn is_stood(&self) -> bool {
        self.stood
    }

    /// Returns whether the hand takes no further action.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Returns whether this hand came from splitting aces.
    #[must_use]
    pub const fn is_split_aces(&self) -> bool {
        self.split_aces
    }

    /// Returns whether this hand is from a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_total(&self.cards)
    }

    /// Returns the display form of the hand total.
    #[must_use]
    pub fn display(&self) -> HandDisplay {
        hand_display(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is a two-card 21.
    ///
    /// Split hands can report `true` here; the natural payout is gated on the
    /// round separately.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand holds a splittable pair (two cards of equal rank).
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Returns whether the hand still awaits a player decision.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        !self.done && !self.stood && self.value() <= 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(crate) const fn stand(&mut self) {
        self.stood = true;
        self.done = true;
    }

    pub(crate) const fn finish(&mut self) {
        self.done = true;
    }

    pub(crate) const fn double_bet(&mut self) {
        self.bet = self.bet.saturating_mul(2);
        self.doubled = true;
    }

    /// Removes the second card and marks this hand as the left half of a split.
    pub(crate) fn take_split_card(&mut self, split_aces: bool) -> Option<Card> {
        if self.cards.len() == 2 {
            self.split_aces = split_aces;
            self.from_split = true;
            self.cards.pop()
        } else {
            None
        }
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand, hole card included.
    ///
    /// Hiding the hole card is left to the caller; see
    /// [`DealerHand::is_hole_revealed`].
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    pub(crate) const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only up card if hole not revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.up_card().map_or(0, Card::value)
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_total(&self.cards)
    }

    /// Returns the display form of the full hand total.
    #[must_use]
    pub fn display(&self) -> HandDisplay {
        hand_display(&self.cards)
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::card::{ACE, KING, Suit};

    fn cards(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&rank| Card::new(Suit::Clubs, rank)).collect()
    }

    #[test]
    fn aces_demote_one_at_a_time() {
        assert_eq!(hand_total(&cards(&[ACE, ACE])), 12);
        assert_eq!(hand_total(&cards(&[ACE, ACE, 9])), 21);
        assert_eq!(hand_total(&cards(&[ACE, 6, KING])), 17);
        assert!(!is_soft(&cards(&[ACE, 6, KING])));
        assert_eq!(hand_total(&cards(&[KING, 9, 5])), 24);
        assert_eq!(hand_total(&[]), 0);
    }

    #[test]
    fn display_matches_table_conventions() {
        assert_eq!(hand_display(&cards(&[ACE, ACE])).to_string(), "2/12");
        assert_eq!(hand_display(&cards(&[ACE, 9])).to_string(), "10/20");
        assert_eq!(hand_display(&cards(&[ACE, KING])).to_string(), "21");
        assert_eq!(hand_display(&cards(&[ACE, 5, KING])).to_string(), "16");
        assert_eq!(hand_display(&cards(&[9, 7])).to_string(), "16");
        assert_eq!(hand_display(&[]).to_string(), "0");
    }

    #[test]
    fn natural_needs_exactly_two_cards() {
        assert!(is_blackjack(&cards(&[ACE, KING])));
        assert!(!is_blackjack(&cards(&[7, 7, 7])));
    }

    #[test]
    fn split_takes_second_card() {
        let mut hand = Hand::new(10);
        hand.add_card(Card::new(Suit::Hearts, 8));
        hand.add_card(Card::new(Suit::Spades, 8));
        assert!(hand.is_pair());

        let card = hand.take_split_card(false);
        assert_eq!(card, Some(Card::new(Suit::Spades, 8)));
        assert_eq!(hand.len(), 1);
        assert!(hand.is_from_split());
        assert_eq!(hand.take_split_card(false), None);
    }
}
