use log::debug;

use crate::error::ActionError;
use crate::hand::Hand;

use super::{Decision, Phase, Session};

/// Which player actions are legal right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AvailableActions {
    /// Hit is legal.
    pub hit: bool,
    /// Stand is legal.
    pub stand: bool,
    /// Double down is legal and affordable.
    pub double: bool,
    /// Split is legal and affordable.
    pub split: bool,
    /// Insurance is on offer.
    pub insurance: bool,
    /// Even money is on offer.
    pub even_money: bool,
}

impl Session {
    /// Returns the index of the hand awaiting action.
    fn ensure_player_turn(&self) -> Result<usize, ActionError> {
        let round = self.round.as_ref().ok_or(ActionError::InvalidState)?;
        if round.phase != Phase::Player {
            return Err(ActionError::InvalidState);
        }
        if round.pending.is_some() {
            return Err(ActionError::DecisionPending);
        }
        if round.current >= round.hands.len() {
            return Err(ActionError::InvalidState);
        }
        Ok(round.current)
    }

    fn current_hand(&self, index: usize) -> Result<&Hand, ActionError> {
        self.round
            .as_ref()
            .and_then(|round| round.hands.get(index))
            .ok_or(ActionError::InvalidState)
    }

    fn check_hit(&self) -> Result<usize, ActionError> {
        let index = self.ensure_player_turn()?;
        let hand = self.current_hand(index)?;
        if hand.is_done() || hand.is_stood() || hand.is_split_aces() {
            return Err(ActionError::HandNotActive);
        }
        Ok(index)
    }

    fn check_stand(&self) -> Result<usize, ActionError> {
        let index = self.ensure_player_turn()?;
        let hand = self.current_hand(index)?;
        if hand.is_done() || hand.is_stood() {
            return Err(ActionError::HandNotActive);
        }
        Ok(index)
    }

    fn check_double(&self) -> Result<usize, ActionError> {
        let index = self.check_stand()?;
        let hand = self.current_hand(index)?;

        if hand.len() != 2 || hand.is_doubled() || hand.is_split_aces() {
            return Err(ActionError::CannotDouble);
        }
        if hand.is_from_split() && !self.options.double_after_split {
            return Err(ActionError::CannotDouble);
        }
        if !self.options.double.allows(hand.value()) {
            return Err(ActionError::CannotDouble);
        }
        if !self.ledger.can_cover(hand.bet()) {
            return Err(ActionError::InsufficientFunds);
        }
        Ok(index)
    }

    fn check_split(&self) -> Result<usize, ActionError> {
        let index = self.check_stand()?;
        let hand = self.current_hand(index)?;

        if !hand.is_pair() {
            return Err(ActionError::CannotSplit);
        }
        let hands = self.round.as_ref().map_or(0, |round| round.hands.len());
        if hands >= usize::from(self.options.split_limit) {
            return Err(ActionError::MaxSplitsReached);
        }
        if !self.ledger.can_cover(hand.bet()) {
            return Err(ActionError::InsufficientFunds);
        }
        Ok(index)
    }

    /// Returns which actions are currently legal.
    #[must_use]
    pub fn available_actions(&self) -> AvailableActions {
        let pending = self
            .round
            .as_ref()
            .filter(|round| round.phase == Phase::Player)
            .and_then(|round| round.pending);
        AvailableActions {
            hit: self.check_hit().is_ok(),
            stand: self.check_stand().is_ok(),
            double: self.check_double().is_ok(),
            split: self.check_split().is_ok(),
            insurance: pending == Some(Decision::Insurance),
            even_money: pending == Some(Decision::EvenMoney),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A hand reaching 21 stands automatically; a hand over 21 is finished.
    /// Either way play moves to the next hand or the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand awaits action, a decision is pending, or
    /// the hand is finished or holds split aces.
    pub fn hit(&mut self) -> Result<Phase, ActionError> {
        let index = self.check_hit()?;
        self.with_round(|session, round| {
            let card = session.deal_card();
            let hand = &mut round.hands[index];
            hand.add_card(card);
            let value = hand.value();
            debug!("hand {index} hits {card}, total {value}");

            if value >= 21 {
                if value == 21 {
                    hand.stand();
                } else {
                    hand.finish();
                }
                round.advance();
            }
            round.phase
        })
        .ok_or(ActionError::InvalidState)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if no hand awaits action, a decision is pending, or
    /// the hand is finished.
    pub fn stand(&mut self) -> Result<Phase, ActionError> {
        let index = self.check_stand()?;
        self.with_round(|_, round| {
            round.hands[index].stand();
            debug!("hand {index} stands");
            round.advance()
        })
        .ok_or(ActionError::InvalidState)
    }

    /// Player action: Double down (double bet, receive one card, finish the hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is not a two-card hand in the doubling
    /// range, was already doubled, holds split aces, or the bankroll cannot
    /// match the bet.
    pub fn double(&mut self) -> Result<Phase, ActionError> {
        let index = self.check_double()?;
        self.with_round(|session, round| {
            let bet = round.hands[index].bet();
            session.ledger.debit(bet);
            let card = session.deal_card();

            let hand = &mut round.hands[index];
            hand.double_bet();
            hand.add_card(card);
            hand.finish();
            debug!("hand {index} doubles to {}, draws {card}", hand.bet());
            round.advance()
        })
        .ok_or(ActionError::InvalidState)
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The new hand carries an equal bet and no side bets. Each half receives
    /// one card; split aces then stand.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is not an unfinished pair, the hand limit
    /// is reached, or the bankroll cannot match the bet.
    pub fn split(&mut self) -> Result<Phase, ActionError> {
        let index = self.check_split()?;
        self.with_round(|session, round| {
            let hand = &mut round.hands[index];
            let bet = hand.bet();
            let one_card =
                hand.cards()[0].is_ace() && session.options.split_aces_receive_one_card;
            let Some(card) = hand.take_split_card(one_card) else {
                return round.phase;
            };
            session.ledger.debit(bet);

            let mut new_hand = Hand::from_split(card, bet, one_card);
            round.hands[index].add_card(session.deal_card());
            new_hand.add_card(session.deal_card());

            if one_card {
                round.hands[index].stand();
                new_hand.stand();
            }
            round.hands.insert(index + 1, new_hand);
            round.split_happened = true;
            debug!("hand {index} split into {} hands", round.hands.len());
            round.advance()
        })
        .ok_or(ActionError::InvalidState)
    }
}
