//! Perfect Pairs and 21+3 side-bet classification and paytables.
//!
//! Both bets are settled once, straight after the opening deal, from the
//! player's first two cards (and for 21+3 the dealer's up card). Payouts are
//! quoted "to one": a winning stake returns `stake * (multiplier + 1)`.

use core::fmt;

use crate::card::Card;

/// Winning Perfect Pairs categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PerfectPairs {
    /// Same rank and suit. Pays 25:1.
    Perfect,
    /// Same rank and colour, different suit. Pays 12:1.
    Colored,
    /// Same rank, different colour. Pays 6:1.
    Mixed,
}

impl PerfectPairs {
    /// Classifies the player's first two cards.
    ///
    /// Returns `None` unless the ranks match.
    #[must_use]
    pub const fn classify(first: Card, second: Card) -> Option<Self> {
        if first.rank != second.rank {
            return None;
        }
        if first.suit as u8 == second.suit as u8 {
            Some(Self::Perfect)
        } else if first.suit.is_red() == second.suit.is_red() {
            Some(Self::Colored)
        } else {
            Some(Self::Mixed)
        }
    }

    /// Returns the "to one" payout multiplier.
    #[must_use]
    pub const fn multiplier(self) -> u64 {
        match self {
            Self::Perfect => 25,
            Self::Colored => 12,
            Self::Mixed => 6,
        }
    }
}

/// Winning 21+3 categories, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TwentyOnePlusThree {
    /// Three suited cards in sequence. Pays 40:1.
    StraightFlush,
    /// Three cards of one rank. Pays 30:1.
    ThreeOfAKind,
    /// Three cards in sequence. Pays 10:1.
    Straight,
    /// Three cards of one suit. Pays 5:1.
    Flush,
}

impl TwentyOnePlusThree {
    /// Classifies the player's two cards together with the dealer's up card.
    #[must_use]
    pub fn classify(first: Card, second: Card, up_card: Card) -> Option<Self> {
        let trio = [first, second, up_card];
        let flush = trio.iter().all(|c| c.suit == first.suit);
        let straight = is_straight(&trio);

        if flush && straight {
            Some(Self::StraightFlush)
        } else if trio.iter().all(|c| c.rank == first.rank) {
            Some(Self::ThreeOfAKind)
        } else if straight {
            Some(Self::Straight)
        } else if flush {
            Some(Self::Flush)
        } else {
            None
        }
    }

    /// Returns the "to one" payout multiplier.
    #[must_use]
    pub const fn multiplier(self) -> u64 {
        match self {
            Self::StraightFlush => 40,
            Self::ThreeOfAKind => 30,
            Self::Straight => 10,
            Self::Flush => 5,
        }
    }
}

/// Three ranks in sequence, with the ace playing high (Q-K-A) or low (A-2-3).
fn is_straight(trio: &[Card; 3]) -> bool {
    const fn consecutive(v: [u8; 3]) -> bool {
        v[0] + 1 == v[1] && v[1] + 1 == v[2]
    }

    let mut high = trio.map(Card::order);
    high.sort_unstable();
    if consecutive(high) {
        return true;
    }

    let mut low = high.map(|v| if v == 14 { 1 } else { v });
    low.sort_unstable();
    consecutive(low)
}

/// A winning side bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SideBetWin {
    /// A Perfect Pairs hit.
    PerfectPairs(PerfectPairs),
    /// A 21+3 hit.
    TwentyOnePlusThree(TwentyOnePlusThree),
}

impl SideBetWin {
    /// Returns the "to one" payout multiplier.
    #[must_use]
    pub const fn multiplier(self) -> u64 {
        match self {
            Self::PerfectPairs(kind) => kind.multiplier(),
            Self::TwentyOnePlusThree(kind) => kind.multiplier(),
        }
    }

    /// Returns the amount returned to the bankroll for `stake`, stake included.
    #[must_use]
    pub const fn returned(self, stake: u64) -> u64 {
        stake.saturating_mul(self.multiplier() + 1)
    }
}

impl fmt::Display for SideBetWin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::PerfectPairs(PerfectPairs::Perfect) => "perfect",
            Self::PerfectPairs(PerfectPairs::Colored) => "colored",
            Self::PerfectPairs(PerfectPairs::Mixed) => "mixed",
            Self::TwentyOnePlusThree(TwentyOnePlusThree::StraightFlush) => "straight_flush",
            Self::TwentyOnePlusThree(TwentyOnePlusThree::ThreeOfAKind) => "three_kind",
            Self::TwentyOnePlusThree(TwentyOnePlusThree::Straight) => "straight",
            Self::TwentyOnePlusThree(TwentyOnePlusThree::Flush) => "flush",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{ACE, JACK, KING, QUEEN, Suit};

    const fn c(suit: Suit, rank: u8) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn perfect_pairs_categories() {
        use Suit::{Clubs, Diamonds, Hearts, Spades};

        assert_eq!(
            PerfectPairs::classify(c(Hearts, 8), c(Hearts, 8)),
            Some(PerfectPairs::Perfect)
        );
        assert_eq!(
            PerfectPairs::classify(c(Hearts, 8), c(Diamonds, 8)),
            Some(PerfectPairs::Colored)
        );
        assert_eq!(
            PerfectPairs::classify(c(Spades, 8), c(Clubs, 8)),
            Some(PerfectPairs::Colored)
        );
        assert_eq!(
            PerfectPairs::classify(c(Spades, 8), c(Hearts, 8)),
            Some(PerfectPairs::Mixed)
        );
        assert_eq!(PerfectPairs::classify(c(Spades, JACK), c(Spades, QUEEN)), None);
    }

    #[test]
    fn twenty_one_plus_three_priority() {
        use Suit::{Clubs, Diamonds, Hearts, Spades};

        assert_eq!(
            TwentyOnePlusThree::classify(c(Hearts, 9), c(Hearts, 10), c(Hearts, JACK)),
            Some(TwentyOnePlusThree::StraightFlush)
        );
        assert_eq!(
            TwentyOnePlusThree::classify(c(Hearts, 7), c(Spades, 7), c(Clubs, 7)),
            Some(TwentyOnePlusThree::ThreeOfAKind)
        );
        assert_eq!(
            TwentyOnePlusThree::classify(c(Hearts, QUEEN), c(Spades, KING), c(Clubs, ACE)),
            Some(TwentyOnePlusThree::Straight)
        );
        assert_eq!(
            TwentyOnePlusThree::classify(c(Diamonds, ACE), c(Spades, 2), c(Clubs, 3)),
            Some(TwentyOnePlusThree::Straight)
        );
        assert_eq!(
            TwentyOnePlusThree::classify(c(Diamonds, 2), c(Diamonds, 9), c(Diamonds, KING)),
            Some(TwentyOnePlusThree::Flush)
        );
        assert_eq!(
            TwentyOnePlusThree::classify(c(Diamonds, KING), c(Spades, ACE), c(Clubs, 2)),
            None
        );
    }

    #[test]
    fn returns_include_the_stake() {
        let perfect = SideBetWin::PerfectPairs(PerfectPairs::Perfect);
        assert_eq!(perfect.returned(1_000), 26_000);
        let colored = SideBetWin::PerfectPairs(PerfectPairs::Colored);
        assert_eq!(colored.returned(1_000), 13_000);
        let mixed = SideBetWin::PerfectPairs(PerfectPairs::Mixed);
        assert_eq!(mixed.returned(1_000), 7_000);
        let straight_flush = SideBetWin::TwentyOnePlusThree(TwentyOnePlusThree::StraightFlush);
        assert_eq!(straight_flush.returned(500), 20_500);
    }
}
