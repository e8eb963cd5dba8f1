//! Settlement results and round events.

use crate::card::Card;
use crate::ledger::net_amount;
use crate::side_bet::SideBetWin;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandOutcome {
    /// Player wins.
    Win,
    /// Player loses.
    Lose,
    /// Push (tie), stake returned.
    Push,
}

/// Why a hand settled the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutcomeReason {
    /// A natural paid at the blackjack ratio.
    Blackjack,
    /// A natural paid 1:1 after taking even money.
    EvenMoney,
    /// Dealer went over 21.
    DealerBust,
    /// Player total beat the dealer's.
    HigherTotal,
    /// Equal totals.
    EqualTotal,
    /// Player went over 21.
    PlayerBust,
    /// Dealer total beat the player's.
    LowerTotal,
    /// Dealer peeked a natural.
    DealerBlackjack,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// Why the hand settled this way.
    pub reason: OutcomeReason,
    /// The bet amount for this hand.
    pub bet: u64,
    /// The payout amount returned to the bankroll, stake included.
    pub payout: u64,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}

impl HandResult {
    /// Net result of the hand (positive = profit).
    #[must_use]
    pub fn net(&self) -> i64 {
        match self.outcome {
            HandOutcome::Win => net_amount(self.payout, self.bet),
            HandOutcome::Push => 0,
            HandOutcome::Lose => net_amount(0, self.bet),
        }
    }
}

/// Something that happened during a round, in order.
///
/// The engine emits no text; presentation layers format these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A side bet won and `paid` (stake included) went to the bankroll.
    SideBetPaid {
        /// The winning category.
        win: SideBetWin,
        /// Stake placed on the bet.
        stake: u64,
        /// Amount returned, stake included.
        paid: u64,
    },
    /// The dealer shows an ace and insurance is on offer.
    InsuranceOffered {
        /// Insurance stake that would be taken.
        stake: u64,
    },
    /// The player holds a natural against an ace and even money is on offer.
    EvenMoneyOffered,
    /// Insurance was placed.
    InsuranceTaken {
        /// Insurance stake.
        stake: u64,
    },
    /// Insurance won 2:1 and `paid` (stake included) went to the bankroll.
    InsurancePaid {
        /// Amount returned, stake included.
        paid: u64,
    },
    /// Insurance lost to a dealer without a natural.
    InsuranceLost {
        /// Insurance stake forfeited.
        stake: u64,
    },
    /// The dealer checked the hole card.
    DealerPeeked {
        /// Whether the dealer holds a natural.
        blackjack: bool,
    },
    /// The dealer drew a card during the dealer phase.
    DealerDrew(Card),
    /// A hand was settled.
    HandSettled(HandResult),
    /// The round finished and the phase returned to idle.
    RoundEnded,
}
