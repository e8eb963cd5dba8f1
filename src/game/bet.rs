use log::{debug, info};

use crate::error::{BetError, LedgerError};
use crate::hand::Hand;
use crate::ledger::CashOutSummary;
use crate::result::Event;
use crate::side_bet::{PerfectPairs, SideBetWin, TwentyOnePlusThree};

use super::{Decision, Phase, Round, Session};

impl Session {
    /// Makes the initial deposit, in minor units.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or a deposit was already made.
    pub fn deposit(&mut self, amount: u64) -> Result<u64, LedgerError> {
        let bankroll = self.ledger.deposit(amount)?;
        info!("deposited {amount}, bankroll {bankroll}");
        Ok(bankroll)
    }

    /// Adds funds to an existing bankroll, in minor units.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero, no deposit has been made, or
    /// the bankroll would overflow.
    pub fn add_funds(&mut self, amount: u64) -> Result<u64, LedgerError> {
        let bankroll = self.ledger.add_funds(amount)?;
        info!("added {amount}, bankroll {bankroll}");
        Ok(bankroll)
    }

    /// Cashes out and restarts the session with a fresh shoe and empty ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or nothing was deposited.
    pub fn cash_out(&mut self) -> Result<CashOutSummary, LedgerError> {
        if self.in_progress() {
            return Err(LedgerError::RoundInProgress);
        }
        if self.ledger.bankroll().is_none() {
            return Err(LedgerError::NotFunded);
        }

        let summary = self.ledger.cash_out();
        self.round = None;
        self.shoe.reshuffle();
        info!(
            "cashed out {} on {} deposited",
            summary.bankroll, summary.cash_in
        );
        Ok(summary)
    }

    /// Takes the stakes, deals the opening cards and settles the side bets.
    ///
    /// The returned phase is [`Phase::Player`] when the player has decisions
    /// to make, or [`Phase::Idle`] when the round resolved at once (a paid
    /// natural or a dealer natural found by the peek).
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, no deposit has been made,
    /// the main bet is zero, the combined stake exceeds the bankroll, or the
    /// bankroll could not hold the largest return the stakes might earn.
    pub fn start_round(
        &mut self,
        main_bet: u64,
        perfect_pairs_bet: u64,
        twenty_one_plus_three_bet: u64,
    ) -> Result<Phase, BetError> {
        if self.in_progress() {
            return Err(BetError::InvalidState);
        }
        if main_bet == 0 {
            return Err(BetError::ZeroBet);
        }
        let bankroll = self.ledger.bankroll().ok_or(BetError::NoBankroll)?;
        let total = main_bet
            .checked_add(perfect_pairs_bet)
            .and_then(|v| v.checked_add(twenty_one_plus_three_bet))
            .ok_or(BetError::InsufficientFunds)?;
        if bankroll < total {
            return Err(BetError::InsufficientFunds);
        }
        let fits = self
            .max_return(main_bet, perfect_pairs_bet, twenty_one_plus_three_bet)
            .and_then(|max| (bankroll - total).checked_add(max))
            .is_some();
        if !fits {
            return Err(BetError::StakeTooLarge);
        }

        self.ledger.debit(total);
        self.ledger
            .record_side_stakes(perfect_pairs_bet, twenty_one_plus_three_bet);

        let mut round = Round::new(Hand::with_side_bets(
            main_bet,
            perfect_pairs_bet,
            twenty_one_plus_three_bet,
        ));

        // Player, dealer up card, player, dealer hole card.
        round.hands[0].add_card(self.deal_card());
        round.dealer.add_card(self.deal_card());
        round.hands[0].add_card(self.deal_card());
        round.dealer.add_card(self.deal_card());

        info!(
            "round started: bet {main_bet}, perfect pairs {perfect_pairs_bet}, 21+3 {twenty_one_plus_three_bet}"
        );

        self.settle_side_bets(&mut round);
        self.open_round(&mut round);

        let phase = round.phase;
        self.round = Some(round);
        Ok(phase)
    }

    /// Upper bound on what a round with these stakes can return: every split
    /// hand doubled and won (or a natural), insurance, and the top side-bet
    /// categories. `None` if it does not fit in a `u64`.
    fn max_return(
        &self,
        main_bet: u64,
        perfect_pairs_bet: u64,
        twenty_one_plus_three_bet: u64,
    ) -> Option<u64> {
        let ratio = self.options.blackjack_pays;
        let natural = main_bet.checked_mul(ratio.numerator.checked_add(ratio.denominator)?)?;
        let per_hand = main_bet.checked_mul(4)?.max(natural);
        let hands = u64::from(self.options.split_limit.max(1));

        per_hand
            .checked_mul(hands)?
            .checked_add((main_bet / 2).checked_mul(3)?)?
            .checked_add(perfect_pairs_bet.checked_mul(PerfectPairs::Perfect.multiplier() + 1)?)?
            .checked_add(
                twenty_one_plus_three_bet
                    .checked_mul(TwentyOnePlusThree::StraightFlush.multiplier() + 1)?,
            )
    }

    fn settle_side_bets(&mut self, round: &mut Round) {
        let hand = &round.hands[0];
        let (first, second) = (hand.cards()[0], hand.cards()[1]);
        let Some(up_card) = round.dealer.up_card() else {
            return;
        };

        let perfect_pairs = PerfectPairs::classify(first, second).map(SideBetWin::PerfectPairs);
        let twenty_one_plus_three = TwentyOnePlusThree::classify(first, second, up_card)
            .map(SideBetWin::TwentyOnePlusThree);

        let bets = [
            (hand.perfect_pairs_bet(), perfect_pairs),
            (hand.twenty_one_plus_three_bet(), twenty_one_plus_three),
        ];
        for (stake, win) in bets {
            if stake == 0 {
                continue;
            }
            let Some(win) = win else {
                debug!("side bet of {stake} lost");
                continue;
            };
            let paid = win.returned(stake);
            self.ledger.pay_side_bet(win, paid);
            debug!("side bet {win} paid {}:1, returned {paid}", win.multiplier());
            round.events.push(Event::SideBetPaid { win, stake, paid });
        }
    }

    /// Routes the fresh deal: insurance or even-money offers against an ace,
    /// the dealer peek against a ten, or an immediate natural payout.
    fn open_round(&mut self, round: &mut Round) {
        let Some(up_card) = round.dealer.up_card() else {
            return;
        };
        let player_blackjack = round.hands[0].is_blackjack();

        if up_card.is_ace() && self.options.insurance {
            if player_blackjack {
                round.pending = Some(Decision::EvenMoney);
                round.events.push(Event::EvenMoneyOffered);
                debug!("even money offered");
                return;
            }
            let stake = round.hands[0].bet() / 2;
            if stake > 0 {
                round.pending = Some(Decision::Insurance);
                round.events.push(Event::InsuranceOffered { stake });
                debug!("insurance offered at {stake}");
                return;
            }
        }

        if up_card.is_ace() || up_card.is_ten_value() {
            self.peek(round);
        } else if player_blackjack {
            self.pay_natural(round);
        }
    }
}
