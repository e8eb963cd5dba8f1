//! Round phase and per-round state.

use alloc::vec::Vec;

use crate::hand::{DealerHand, Hand};
use crate::result::Event;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No round in progress; new bets are accepted.
    #[default]
    Idle,
    /// Player hands await actions (or an insurance decision).
    Player,
    /// Every player hand is finished; the dealer draws next.
    Dealer,
    /// The dealer is finished; hands settle next.
    Settle,
}

/// A decision the player must make before acting on their hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    /// Take or decline insurance against a dealer ace.
    Insurance,
    /// Take or decline even money on a natural against a dealer ace.
    EvenMoney,
}

/// State of a single round.
///
/// A round stays readable after it ends (phase [`Phase::Idle`]) so the final
/// hands can be shown until the next round starts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round {
    pub(super) hands: Vec<Hand>,
    pub(super) dealer: DealerHand,
    pub(super) phase: Phase,
    /// Index of the hand awaiting action.
    pub(super) current: usize,
    pub(super) split_happened: bool,
    pub(super) pending: Option<Decision>,
    /// Insurance stake; zero when none was taken.
    pub(super) insurance: u64,
    pub(super) peek_done: bool,
    pub(super) events: Vec<Event>,
}

impl Round {
    pub(super) fn new(hand: Hand) -> Self {
        Self {
            hands: alloc::vec![hand],
            dealer: DealerHand::new(),
            phase: Phase::Player,
            current: 0,
            split_happened: false,
            pending: None,
            insurance: 0,
            peek_done: false,
            events: Vec::new(),
        }
    }

    /// Returns the player hands, in table order.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the hand awaiting action.
    #[must_use]
    pub fn current_hand(&self) -> Option<&Hand> {
        self.hands.get(self.current)
    }

    /// Returns the index of the hand awaiting action.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the round phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the round has not yet ended.
    #[must_use]
    pub const fn is_in_progress(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Returns whether any hand was split this round.
    #[must_use]
    pub const fn split_happened(&self) -> bool {
        self.split_happened
    }

    /// Returns the decision the player must make before acting, if any.
    #[must_use]
    pub const fn pending_decision(&self) -> Option<Decision> {
        self.pending
    }

    /// Returns the insurance stake (zero when none was taken).
    #[must_use]
    pub const fn insurance(&self) -> u64 {
        self.insurance
    }

    /// Returns whether insurance is riding on the dealer's hole card.
    #[must_use]
    pub const fn is_insurance_active(&self) -> bool {
        self.insurance > 0 && self.is_in_progress()
    }

    /// Returns whether the dealer has checked the hole card for a natural.
    #[must_use]
    pub const fn is_peek_done(&self) -> bool {
        self.peek_done
    }

    /// Returns everything that happened this round, in order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Moves to the first hand still awaiting action, or to the dealer phase.
    pub(super) fn advance(&mut self) -> Phase {
        match self.hands.iter().position(Hand::is_playable) {
            Some(index) => {
                self.current = index;
                self.phase = Phase::Player;
            }
            None => self.phase = Phase::Dealer,
        }
        self.phase
    }
}
