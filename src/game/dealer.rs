use log::{debug, info};

use crate::error::ShowdownError;
use crate::result::{Event, HandOutcome, OutcomeReason};

use super::{Phase, Round, Session};

impl Session {
    /// Returns what a natural on `bet` returns, stake included.
    #[must_use]
    pub fn blackjack_payout(&self, bet: u64) -> u64 {
        self.options
            .blackjack_pays
            .total_return(bet, self.options.rounding_blackjack)
    }

    /// Performs one dealer-side transition.
    ///
    /// In [`Phase::Dealer`] the dealer reveals and draws, moving to
    /// [`Phase::Settle`]. In [`Phase::Settle`] every hand is settled and the
    /// round ends in [`Phase::Idle`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer or settle phase.
    pub fn advance_phase(&mut self) -> Result<Phase, ShowdownError> {
        match self.phase() {
            Phase::Dealer => self
                .with_round(|session, round| {
                    session.dealer_play(round);
                    round.phase = Phase::Settle;
                    round.phase
                })
                .ok_or(ShowdownError::InvalidState),
            Phase::Settle => self
                .with_round(|session, round| {
                    for index in 0..round.hands.len() {
                        session.settle(round, index);
                    }
                    session.end_round(round);
                    round.phase
                })
                .ok_or(ShowdownError::InvalidState),
            Phase::Idle | Phase::Player => Err(ShowdownError::InvalidState),
        }
    }

    /// Advances through the dealer and settle phases until the round is idle.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer or settle phase.
    pub fn play_out(&mut self) -> Result<Phase, ShowdownError> {
        let mut phase = self.advance_phase()?;
        while phase != Phase::Idle {
            phase = self.advance_phase()?;
        }
        Ok(phase)
    }

    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals their hole card and draws until reaching 17 or higher.
    /// If `stand_on_soft_17` is true, dealer stands on soft 17.
    /// Otherwise, dealer hits on soft 17.
    fn dealer_play(&mut self, round: &mut Round) {
        round.peek_done = true;
        round.dealer.reveal_hole();

        loop {
            let value = round.dealer.value();
            if value > 17 {
                break;
            }
            if value == 17 && (!round.dealer.is_soft() || self.options.stand_on_soft_17) {
                break;
            }

            let card = self.deal_card();
            round.dealer.add_card(card);
            round.events.push(Event::DealerDrew(card));
            debug!("dealer draws {card}, total {}", round.dealer.value());
        }
    }

    /// Compares hand `index` with the final dealer hand and pays it.
    fn settle(&mut self, round: &mut Round, index: usize) {
        let hand = &round.hands[index];
        let bet = hand.bet();
        let player_value = hand.value();
        let dealer_value = round.dealer.value();

        let (outcome, reason, payout) = if player_value > 21 {
            (HandOutcome::Lose, OutcomeReason::PlayerBust, 0)
        } else if hand.is_blackjack() && !round.split_happened {
            (
                HandOutcome::Win,
                OutcomeReason::Blackjack,
                self.blackjack_payout(bet),
            )
        } else if dealer_value > 21 {
            (HandOutcome::Win, OutcomeReason::DealerBust, bet.saturating_mul(2))
        } else if player_value > dealer_value {
            (HandOutcome::Win, OutcomeReason::HigherTotal, bet.saturating_mul(2))
        } else if player_value == dealer_value {
            (HandOutcome::Push, OutcomeReason::EqualTotal, bet)
        } else {
            (HandOutcome::Lose, OutcomeReason::LowerTotal, 0)
        };

        self.record(round, index, outcome, reason, payout);
    }

    /// Settles a round the peek found a dealer natural in.
    ///
    /// Insurance pays 2:1; the opening hand pushes against a player natural
    /// and loses otherwise.
    pub(super) fn resolve_dealer_blackjack(&mut self, round: &mut Round) {
        round.dealer.reveal_hole();
        if round.insurance > 0 {
            let paid = round.insurance.saturating_mul(3);
            self.ledger.credit(paid);
            round.events.push(Event::InsurancePaid { paid });
            debug!("insurance paid {paid}");
        }

        let hand = &mut round.hands[0];
        hand.stand();
        let (outcome, payout) = if hand.is_blackjack() {
            (HandOutcome::Push, hand.bet())
        } else {
            (HandOutcome::Lose, 0)
        };
        info!("dealer blackjack");
        self.record(round, 0, outcome, OutcomeReason::DealerBlackjack, payout);
        self.end_round(round);
    }

    /// Pays the opening natural at the blackjack ratio and ends the round.
    pub(super) fn pay_natural(&mut self, round: &mut Round) {
        let hand = &mut round.hands[0];
        hand.stand();
        let payout = self.blackjack_payout(hand.bet());
        self.record(round, 0, HandOutcome::Win, OutcomeReason::Blackjack, payout);
        self.end_round(round);
    }
}
