//! Card types and deck utilities.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// Every suit, in shoe-building order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit symbol (`♠`, `♥`, `♦`, `♣`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }

    /// Returns whether the suit is red (hearts or diamonds).
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

/// Rank of an ace.
pub const ACE: u8 = 1;
/// Rank of a jack.
pub const JACK: u8 = 11;
/// Rank of a queen.
pub const QUEEN: u8 = 12;
/// Rank of a king.
pub const KING: u8 = 13;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the base blackjack value of the card.
    ///
    /// Aces count 11 here; hand evaluation demotes them to 1 as needed.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self.rank {
            ACE => 11,
            2..=10 => self.rank,
            JACK..=KING => 10,
            _ => 0,
        }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank == ACE
    }

    /// Returns whether the card is worth ten (10, J, Q, K).
    #[must_use]
    pub const fn is_ten_value(self) -> bool {
        matches!(self.rank, 10..=KING)
    }

    /// Returns the poker ordering of the rank, with the ace high (14).
    #[must_use]
    pub const fn order(self) -> u8 {
        if self.rank == ACE { 14 } else { self.rank }
    }

    /// Returns the rank label (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn rank_label(self) -> &'static str {
        match self.rank {
            ACE => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            JACK => "J",
            QUEEN => "Q",
            KING => "K",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}

/// Displays a run of cards as a comma separated list, e.g. `A♠, 9♦`.
#[derive(Debug, Clone, Copy)]
pub struct CardList<'a>(pub &'a [Card]);

impl fmt::Display for CardList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn values_follow_blackjack_ranks() {
        assert_eq!(Card::new(Suit::Spades, ACE).value(), 11);
        assert_eq!(Card::new(Suit::Hearts, 7).value(), 7);
        assert_eq!(Card::new(Suit::Clubs, QUEEN).value(), 10);
        assert!(Card::new(Suit::Clubs, 10).is_ten_value());
        assert!(!Card::new(Suit::Clubs, 9).is_ten_value());
    }

    #[test]
    fn cards_render_with_suit_symbols() {
        assert_eq!(Card::new(Suit::Spades, ACE).to_string(), "A♠");
        assert_eq!(Card::new(Suit::Hearts, 10).to_string(), "10♥");
        let cards = [Card::new(Suit::Spades, ACE), Card::new(Suit::Diamonds, 9)];
        assert_eq!(CardList(&cards).to_string(), "A♠, 9♦");
        assert_eq!(CardList(&[]).to_string(), "");
    }
}
