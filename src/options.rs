//! Table configuration options.

/// Conditions under which doubling down is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum DoubleOption {
    /// Double down allowed on any two-card total.
    Any,
    /// Double down allowed only on 9 or 10.
    NineOrTen,
    /// Double down allowed only on 9 through 11.
    #[default]
    NineThrough11,
    /// Double down allowed only on 9 through 15.
    NineThrough15,
    /// Double down not allowed.
    None,
}

impl DoubleOption {
    /// Returns whether a hand totalling `value` may double.
    #[must_use]
    pub const fn allows(self, value: u8) -> bool {
        match self {
            Self::Any => true,
            Self::NineOrTen => value == 9 || value == 10,
            Self::NineThrough11 => value >= 9 && value <= 11,
            Self::NineThrough15 => value >= 9 && value <= 15,
            Self::None => false,
        }
    }
}

/// Rounding mode for payouts that do not land on a whole minor unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest, halves up.
    Nearest,
    /// Round to nearest, halves to the even neighbour.
    NearestEven,
}

impl RoundingMode {
    /// Divides `numerator` by `denominator`, rounding the quotient.
    ///
    /// A zero denominator yields zero.
    #[must_use]
    pub const fn divide(self, numerator: u64, denominator: u64) -> u64 {
        if denominator == 0 {
            return 0;
        }
        let quotient = numerator / denominator;
        let remainder = numerator % denominator;
        if remainder == 0 {
            return quotient;
        }
        let twice = remainder * 2;
        match self {
            Self::Up => quotient + 1,
            Self::Down => quotient,
            Self::Nearest => {
                if twice >= denominator {
                    quotient + 1
                } else {
                    quotient
                }
            }
            Self::NearestEven => {
                if twice > denominator || (twice == denominator && quotient % 2 == 1) {
                    quotient + 1
                } else {
                    quotient
                }
            }
        }
    }
}

/// A "to one" payout expressed as a ratio, e.g. 3:2 for a natural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoutRatio {
    /// Winnings per `denominator` staked.
    pub numerator: u64,
    /// Stake unit.
    pub denominator: u64,
}

impl PayoutRatio {
    /// Three to two.
    pub const THREE_TO_TWO: Self = Self::new(3, 2);
    /// Six to five.
    pub const SIX_TO_FIVE: Self = Self::new(6, 5);

    /// Creates a new ratio.
    #[must_use]
    pub const fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the total returned for `bet`, stake included, rounded with `mode`.
    ///
    /// ```
    /// use bjtable::{PayoutRatio, RoundingMode};
    ///
    /// let ratio = PayoutRatio::THREE_TO_TWO;
    /// assert_eq!(ratio.total_return(1_000, RoundingMode::NearestEven), 2_500);
    /// assert_eq!(ratio.total_return(1, RoundingMode::NearestEven), 2);
    /// assert_eq!(ratio.total_return(3, RoundingMode::NearestEven), 8);
    /// ```
    #[must_use]
    pub const fn total_return(self, bet: u64, mode: RoundingMode) -> u64 {
        mode.divide(
            bet.saturating_mul(self.numerator.saturating_add(self.denominator)),
            self.denominator,
        )
    }
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::{GameOptions, PayoutRatio};
///
/// let options = GameOptions::default()
///     .with_decks(8)
///     .with_blackjack_pays(PayoutRatio::SIX_TO_FIVE)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// Number of decks.
    pub decks: u8,
    /// Blackjack payout ratio (typically 3:2).
    pub blackjack_pays: PayoutRatio,
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Double down conditions.
    pub double: DoubleOption,
    /// Whether double down is allowed after split.
    pub double_after_split: bool,
    /// Maximum number of hands a round may split into.
    pub split_limit: u8,
    /// Whether split aces receive only one card.
    pub split_aces_receive_one_card: bool,
    /// Whether insurance and even money are offered against an ace.
    pub insurance: bool,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            blackjack_pays: PayoutRatio::THREE_TO_TWO,
            stand_on_soft_17: true,
            double: DoubleOption::NineThrough11,
            double_after_split: true,
            split_limit: 4,
            split_aces_receive_one_card: true,
            insurance: true,
            rounding_blackjack: RoundingMode::NearestEven,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the blackjack payout ratio.
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: PayoutRatio) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the double down conditions.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameOptions, DoubleOption};
    ///
    /// let options = GameOptions::default().with_double(DoubleOption::Any);
    /// assert_eq!(options.double, DoubleOption::Any);
    /// ```
    #[must_use]
    pub const fn with_double(mut self, double: DoubleOption) -> Self {
        self.double = double;
        self
    }

    /// Sets whether double down is allowed after split.
    #[must_use]
    pub const fn with_double_after_split(mut self, allowed: bool) -> Self {
        self.double_after_split = allowed;
        self
    }

    /// Sets the maximum number of hands a round may split into.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_split_limit(2);
    /// assert_eq!(options.split_limit, 2);
    /// ```
    #[must_use]
    pub const fn with_split_limit(mut self, limit: u8) -> Self {
        self.split_limit = limit;
        self
    }

    /// Sets whether split aces receive only one card.
    #[must_use]
    pub const fn with_split_aces_receive_one_card(mut self, one_card: bool) -> Self {
        self.split_aces_receive_one_card = one_card;
        self
    }

    /// Sets whether insurance and even money are offered.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_insurance(false);
    /// assert_eq!(options.insurance, false);
    /// ```
    #[must_use]
    pub const fn with_insurance(mut self, offered: bool) -> Self {
        self.insurance = offered;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_modes_on_halves() {
        assert_eq!(RoundingMode::Up.divide(5, 2), 3);
        assert_eq!(RoundingMode::Down.divide(5, 2), 2);
        assert_eq!(RoundingMode::Nearest.divide(5, 2), 3);
        assert_eq!(RoundingMode::NearestEven.divide(5, 2), 2);
        assert_eq!(RoundingMode::NearestEven.divide(15, 2), 8);
        assert_eq!(RoundingMode::Nearest.divide(7, 5), 1);
        assert_eq!(RoundingMode::Nearest.divide(8, 5), 2);
        assert_eq!(RoundingMode::Down.divide(8, 0), 0);
    }

    #[test]
    fn double_ranges() {
        assert!(DoubleOption::NineThrough11.allows(9));
        assert!(DoubleOption::NineThrough11.allows(11));
        assert!(!DoubleOption::NineThrough11.allows(12));
        assert!(!DoubleOption::NineOrTen.allows(11));
        assert!(!DoubleOption::None.allows(10));
        assert!(DoubleOption::Any.allows(4));
    }
}
