use log::debug;

use crate::error::InsuranceError;
use crate::result::{Event, HandOutcome, OutcomeReason};

use super::{Decision, Phase, Round, Session};

impl Session {
    /// Returns the insurance stake on offer (half the main bet, rounded down).
    ///
    /// Returns `None` when insurance is not the pending decision.
    #[must_use]
    pub fn insurance_offer(&self) -> Option<u64> {
        let round = self.round.as_ref()?;
        (round.pending == Some(Decision::Insurance)).then(|| round.hands[0].bet() / 2)
    }

    fn ensure_pending(&self, decision: Decision) -> Result<(), InsuranceError> {
        let round = self.round.as_ref().ok_or(InsuranceError::InvalidState)?;
        if round.phase != Phase::Player {
            return Err(InsuranceError::InvalidState);
        }
        if round.pending != Some(decision) {
            return Err(InsuranceError::NotOffered);
        }
        Ok(())
    }

    /// Takes insurance at half the main bet, then lets the dealer peek.
    ///
    /// Insurance pays 2:1 if the dealer holds a natural, ending the round.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not on offer or the bankroll cannot
    /// cover the stake. The offer stays open after an error.
    pub fn take_insurance(&mut self) -> Result<Phase, InsuranceError> {
        self.ensure_pending(Decision::Insurance)?;
        let stake = self.insurance_offer().ok_or(InsuranceError::NotOffered)?;
        if !self.ledger.can_cover(stake) {
            return Err(InsuranceError::InsufficientFunds);
        }

        self.with_round(|session, round| {
            session.ledger.debit(stake);
            round.insurance = stake;
            round.pending = None;
            round.events.push(Event::InsuranceTaken { stake });
            debug!("insurance taken: {stake}");
            session.peek(round);
            round.phase
        })
        .ok_or(InsuranceError::InvalidState)
    }

    /// Declines insurance; the dealer peeks and play continues if clean.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not on offer.
    pub fn decline_insurance(&mut self) -> Result<Phase, InsuranceError> {
        self.ensure_pending(Decision::Insurance)?;
        self.with_round(|session, round| {
            round.pending = None;
            debug!("insurance declined");
            session.peek(round);
            round.phase
        })
        .ok_or(InsuranceError::InvalidState)
    }

    /// Takes even money: the natural is paid 1:1 at once and the round ends.
    ///
    /// # Errors
    ///
    /// Returns an error if even money is not on offer.
    pub fn take_even_money(&mut self) -> Result<Phase, InsuranceError> {
        self.ensure_pending(Decision::EvenMoney)?;
        self.with_round(|session, round| {
            round.pending = None;
            let payout = round.hands[0].bet().saturating_mul(2);
            round.hands[0].stand();
            session.record(round, 0, HandOutcome::Win, OutcomeReason::EvenMoney, payout);
            session.end_round(round);
            round.phase
        })
        .ok_or(InsuranceError::InvalidState)
    }

    /// Declines even money; the dealer peeks for a natural.
    ///
    /// A dealer natural pushes; otherwise the player's natural is paid at the
    /// blackjack ratio. Either way the round ends.
    ///
    /// # Errors
    ///
    /// Returns an error if even money is not on offer.
    pub fn decline_even_money(&mut self) -> Result<Phase, InsuranceError> {
        self.ensure_pending(Decision::EvenMoney)?;
        self.with_round(|session, round| {
            round.pending = None;
            debug!("even money declined");
            session.peek(round);
            round.phase
        })
        .ok_or(InsuranceError::InvalidState)
    }

    /// Checks the hole card for a dealer natural and resolves what it decides.
    pub(super) fn peek(&mut self, round: &mut Round) {
        round.peek_done = true;
        let blackjack = round.dealer.is_blackjack();
        round.events.push(Event::DealerPeeked { blackjack });
        debug!("dealer peeked: blackjack = {blackjack}");

        if blackjack {
            self.resolve_dealer_blackjack(round);
            return;
        }

        if round.insurance > 0 {
            round.events.push(Event::InsuranceLost {
                stake: round.insurance,
            });
        }
        // A natural is paid on the clean peek; the dealer does not draw.
        if round.hands[0].is_blackjack() {
            self.pay_natural(round);
        }
    }
}
