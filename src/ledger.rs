//! Bankroll, statistics and the settled-hand history of a session.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::LedgerError;
use crate::result::{HandOutcome, HandResult};
use crate::side_bet::{PerfectPairs, SideBetWin, TwentyOnePlusThree};

/// Cumulative play statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// Rounds played to completion.
    pub played: u32,
    /// Hands won.
    pub won: u32,
    /// Hands lost.
    pub lost: u32,
    /// Hands pushed.
    pub push: u32,
}

/// Perfect Pairs stake and return accounting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerfectPairsStats {
    /// Bets placed.
    pub bets: u32,
    /// Total staked.
    pub stake: u64,
    /// Total returned, stakes included.
    pub returned: u64,
    /// Perfect pair hits.
    pub perfect: u32,
    /// Coloured pair hits.
    pub colored: u32,
    /// Mixed pair hits.
    pub mixed: u32,
}

/// 21+3 stake and return accounting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwentyOnePlusThreeStats {
    /// Bets placed.
    pub bets: u32,
    /// Total staked.
    pub stake: u64,
    /// Total returned, stakes included.
    pub returned: u64,
    /// Straight flush hits.
    pub straight_flush: u32,
    /// Three of a kind hits.
    pub three_of_a_kind: u32,
    /// Straight hits.
    pub straight: u32,
    /// Flush hits.
    pub flush: u32,
}

impl PerfectPairsStats {
    /// Net result across all Perfect Pairs bets.
    #[must_use]
    pub fn net(&self) -> i64 {
        net_amount(self.returned, self.stake)
    }
}

impl TwentyOnePlusThreeStats {
    /// Net result across all 21+3 bets.
    #[must_use]
    pub fn net(&self) -> i64 {
        net_amount(self.returned, self.stake)
    }
}

/// One settled hand, as appended to the history log.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryRecord {
    /// Settlement time in Unix seconds.
    pub time: u64,
    /// Win, lose or push.
    pub outcome: HandOutcome,
    /// Final player total.
    pub player_value: u8,
    /// Dealer total at settlement.
    pub dealer_value: u8,
    /// Stake on the hand (doubled stakes included).
    pub bet: u64,
    /// Amount returned, stake included.
    pub payout: u64,
    /// Profit or loss on the hand.
    pub net: i64,
    /// Player cards at settlement.
    pub player_cards: Vec<Card>,
    /// Dealer cards at settlement.
    pub dealer_cards: Vec<Card>,
}

/// Aggregate figures over the history log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistorySummary {
    /// Hands recorded.
    pub hands: usize,
    /// Hands won.
    pub wins: usize,
    /// Hands lost.
    pub losses: usize,
    /// Hands pushed.
    pub pushes: usize,
    /// Total staked.
    pub total_bet: u64,
    /// Total returned, stakes included.
    pub total_return: u64,
    /// `total_return - total_bet`.
    pub net: i64,
    /// Return on investment in basis points (1% = 100).
    pub roi_bp: i64,
}

/// Final figures reported when a player cashes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CashOutSummary {
    /// Bankroll paid out.
    pub bankroll: u64,
    /// Total deposited during the session.
    pub cash_in: u64,
    /// `bankroll - cash_in`.
    pub profit: i64,
}

/// Clamps a wide intermediate into `i64`.
pub(crate) fn saturate_i64(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// `returned - staked`, clamped to `i64`.
pub(crate) fn net_amount(returned: u64, staked: u64) -> i64 {
    saturate_i64(i128::from(returned) - i128::from(staked))
}

fn basis_points(net: i64, base: u64) -> i64 {
    if base == 0 {
        return 0;
    }
    saturate_i64(i128::from(net) * 10_000 / i128::from(base))
}

/// Session money and record keeping.
///
/// The bankroll is `None` until the first deposit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ledger {
    bankroll: Option<u64>,
    cash_in: u64,
    stats: Stats,
    perfect_pairs: PerfectPairsStats,
    twenty_one_plus_three: TwentyOnePlusThreeStats,
    history: Vec<HistoryRecord>,
}

impl Ledger {
    /// Creates an empty, unfunded ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bankroll: None,
            cash_in: 0,
            stats: Stats {
                played: 0,
                won: 0,
                lost: 0,
                push: 0,
            },
            perfect_pairs: PerfectPairsStats {
                bets: 0,
                stake: 0,
                returned: 0,
                perfect: 0,
                colored: 0,
                mixed: 0,
            },
            twenty_one_plus_three: TwentyOnePlusThreeStats {
                bets: 0,
                stake: 0,
                returned: 0,
                straight_flush: 0,
                three_of_a_kind: 0,
                straight: 0,
                flush: 0,
            },
            history: Vec::new(),
        }
    }

    /// Returns the bankroll, or `None` before the first deposit.
    #[must_use]
    pub const fn bankroll(&self) -> Option<u64> {
        self.bankroll
    }

    /// Returns the total deposited this session.
    #[must_use]
    pub const fn cash_in(&self) -> u64 {
        self.cash_in
    }

    /// Returns the play statistics.
    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Returns the Perfect Pairs statistics.
    #[must_use]
    pub const fn perfect_pairs(&self) -> &PerfectPairsStats {
        &self.perfect_pairs
    }

    /// Returns the 21+3 statistics.
    #[must_use]
    pub const fn twenty_one_plus_three(&self) -> &TwentyOnePlusThreeStats {
        &self.twenty_one_plus_three
    }

    /// Returns every settled hand, oldest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    /// Returns the bankroll minus everything deposited.
    #[must_use]
    pub fn profit(&self) -> i64 {
        let bankroll = self.bankroll.unwrap_or(0);
        net_amount(bankroll, self.cash_in)
    }

    /// Returns the session return on the cash-in, in basis points.
    #[must_use]
    pub fn roi_bp(&self) -> i64 {
        basis_points(self.profit(), self.cash_in)
    }

    /// Summarises the history log.
    #[must_use]
    pub fn summary(&self) -> HistorySummary {
        let mut summary = HistorySummary {
            hands: self.history.len(),
            ..HistorySummary::default()
        };
        for record in &self.history {
            match record.outcome {
                HandOutcome::Win => summary.wins += 1,
                HandOutcome::Lose => summary.losses += 1,
                HandOutcome::Push => summary.pushes += 1,
            }
            summary.total_bet = summary.total_bet.saturating_add(record.bet);
            summary.total_return = summary.total_return.saturating_add(record.payout);
        }
        summary.net = net_amount(summary.total_return, summary.total_bet);
        summary.roi_bp = basis_points(summary.net, summary.total_bet);
        summary
    }

    pub(crate) const fn deposit(&mut self, amount: u64) -> Result<u64, LedgerError> {
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        if self.bankroll.is_some() {
            return Err(LedgerError::AlreadyFunded);
        }
        self.bankroll = Some(amount);
        self.cash_in = amount;
        Ok(amount)
    }

    pub(crate) fn add_funds(&mut self, amount: u64) -> Result<u64, LedgerError> {
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        let bankroll = self.bankroll.ok_or(LedgerError::NotFunded)?;
        let total = bankroll.checked_add(amount).ok_or(LedgerError::Overflow)?;
        let cash_in = self
            .cash_in
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        self.bankroll = Some(total);
        self.cash_in = cash_in;
        Ok(total)
    }

    pub(crate) fn can_cover(&self, amount: u64) -> bool {
        self.bankroll.is_some_and(|bankroll| bankroll >= amount)
    }

    /// Callers check [`Ledger::can_cover`] first.
    pub(crate) fn debit(&mut self, amount: u64) {
        if let Some(bankroll) = self.bankroll.as_mut() {
            *bankroll = bankroll.saturating_sub(amount);
        }
    }

    pub(crate) fn credit(&mut self, amount: u64) {
        if let Some(bankroll) = self.bankroll.as_mut() {
            *bankroll = bankroll.saturating_add(amount);
        }
    }

    pub(crate) const fn record_side_stakes(
        &mut self,
        perfect_pairs: u64,
        twenty_one_plus_three: u64,
    ) {
        if perfect_pairs > 0 {
            self.perfect_pairs.bets += 1;
            self.perfect_pairs.stake = self.perfect_pairs.stake.saturating_add(perfect_pairs);
        }
        if twenty_one_plus_three > 0 {
            self.twenty_one_plus_three.bets += 1;
            self.twenty_one_plus_three.stake =
                self.twenty_one_plus_three.stake.saturating_add(twenty_one_plus_three);
        }
    }

    /// Credits a winning side bet and counts the hit.
    pub(crate) fn pay_side_bet(&mut self, win: SideBetWin, paid: u64) {
        self.credit(paid);
        match win {
            SideBetWin::PerfectPairs(kind) => {
                let stats = &mut self.perfect_pairs;
                stats.returned = stats.returned.saturating_add(paid);
                match kind {
                    PerfectPairs::Perfect => stats.perfect += 1,
                    PerfectPairs::Colored => stats.colored += 1,
                    PerfectPairs::Mixed => stats.mixed += 1,
                }
            }
            SideBetWin::TwentyOnePlusThree(kind) => {
                let stats = &mut self.twenty_one_plus_three;
                stats.returned = stats.returned.saturating_add(paid);
                match kind {
                    TwentyOnePlusThree::StraightFlush => stats.straight_flush += 1,
                    TwentyOnePlusThree::ThreeOfAKind => stats.three_of_a_kind += 1,
                    TwentyOnePlusThree::Straight => stats.straight += 1,
                    TwentyOnePlusThree::Flush => stats.flush += 1,
                }
            }
        }
    }

    /// Credits the payout of a settled hand, counts it and appends its history record.
    pub(crate) fn record_hand(
        &mut self,
        result: &HandResult,
        player_cards: &[Card],
        dealer_cards: &[Card],
        time: u64,
    ) {
        self.credit(result.payout);
        match result.outcome {
            HandOutcome::Win => self.stats.won += 1,
            HandOutcome::Lose => self.stats.lost += 1,
            HandOutcome::Push => self.stats.push += 1,
        }
        self.history.push(HistoryRecord {
            time,
            outcome: result.outcome,
            player_value: result.player_value,
            dealer_value: result.dealer_value,
            bet: result.bet,
            payout: result.payout,
            net: result.net(),
            player_cards: player_cards.to_vec(),
            dealer_cards: dealer_cards.to_vec(),
        });
    }

    pub(crate) const fn record_round(&mut self) {
        self.stats.played += 1;
    }

    /// Closes the session, returning the final figures and resetting every record.
    pub(crate) fn cash_out(&mut self) -> CashOutSummary {
        let summary = CashOutSummary {
            bankroll: self.bankroll.unwrap_or(0),
            cash_in: self.cash_in,
            profit: self.profit(),
        };
        *self = Self::new();
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::OutcomeReason;

    fn result(outcome: HandOutcome, bet: u64, payout: u64) -> HandResult {
        HandResult {
            hand_index: 0,
            outcome,
            reason: OutcomeReason::HigherTotal,
            bet,
            payout,
            player_value: 20,
            dealer_value: 18,
        }
    }

    #[test]
    fn deposit_once_then_add_funds() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.add_funds(500), Err(LedgerError::NotFunded));
        assert_eq!(ledger.deposit(0), Err(LedgerError::ZeroAmount));
        assert_eq!(ledger.deposit(5_000), Ok(5_000));
        assert_eq!(ledger.deposit(5_000), Err(LedgerError::AlreadyFunded));
        assert_eq!(ledger.add_funds(2_500), Ok(7_500));
        assert_eq!(ledger.cash_in(), 7_500);
        assert_eq!(ledger.profit(), 0);
    }

    #[test]
    fn summary_tracks_net_and_roi() {
        let mut ledger = Ledger::new();
        ledger.deposit(10_000).unwrap();
        ledger.debit(3_000);
        ledger.record_hand(&result(HandOutcome::Win, 1_000, 2_000), &[], &[], 1);
        ledger.record_hand(&result(HandOutcome::Lose, 1_000, 0), &[], &[], 2);
        ledger.record_hand(&result(HandOutcome::Push, 1_000, 1_000), &[], &[], 3);

        let summary = ledger.summary();
        assert_eq!(summary.hands, 3);
        assert_eq!((summary.wins, summary.losses, summary.pushes), (1, 1, 1));
        assert_eq!(summary.total_bet, 3_000);
        assert_eq!(summary.total_return, 3_000);
        assert_eq!(summary.net, 0);
        assert_eq!(summary.roi_bp, 0);

        let nets: Vec<i64> = ledger.history().iter().map(|r| r.net).collect();
        assert_eq!(nets, [1_000, -1_000, 0]);
        assert_eq!(ledger.stats().won, 1);
        assert_eq!(ledger.bankroll(), Some(10_000));
    }

    #[test]
    fn nets_clamp_instead_of_wrapping() {
        assert_eq!(net_amount(u64::MAX, 0), i64::MAX);
        assert_eq!(net_amount(0, u64::MAX), i64::MIN);
        assert_eq!(result(HandOutcome::Lose, u64::MAX, 0).net(), i64::MIN);
        assert_eq!(result(HandOutcome::Win, 1, u64::MAX).net(), i64::MAX);

        let stats = PerfectPairsStats {
            stake: 1,
            returned: u64::MAX,
            ..PerfectPairsStats::default()
        };
        assert_eq!(stats.net(), i64::MAX);
    }

    #[test]
    fn cash_out_reports_profit_and_resets() {
        let mut ledger = Ledger::new();
        ledger.deposit(5_000).unwrap();
        ledger.credit(1_250);
        assert_eq!(ledger.roi_bp(), 2_500);

        let summary = ledger.cash_out();
        assert_eq!(summary.bankroll, 6_250);
        assert_eq!(summary.cash_in, 5_000);
        assert_eq!(summary.profit, 1_250);
        assert_eq!(ledger, Ledger::new());
    }
}
