//! The single-player table engine.
//!
//! A [`Session`] owns the shoe, the [`Ledger`] and at most one [`Round`].
//! Every public operation runs to completion and reports the resulting
//! [`Phase`]; nothing advances on its own. Operations that return `Err`
//! leave the session untouched.

use log::info;

use crate::card::Card;
use crate::ledger::Ledger;
use crate::options::GameOptions;
use crate::result::{Event, HandOutcome, HandResult, OutcomeReason};
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
mod insurance;
mod snapshot;
pub mod state;

pub use actions::AvailableActions;
pub use snapshot::Snapshot;
pub use state::{Decision, Phase, Round};

#[cfg(feature = "std")]
fn system_clock() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}

#[cfg(not(feature = "std"))]
const fn system_clock() -> u64 {
    0
}

/// A blackjack session for one player at one table.
///
/// Sessions share nothing; a multi-user host keeps one per player.
#[derive(Debug, Clone)]
pub struct Session {
    /// Table options.
    options: GameOptions,
    shoe: Shoe,
    ledger: Ledger,
    /// The current round, or the last finished one.
    round: Option<Round>,
    /// Source of history timestamps, in Unix seconds.
    clock: fn() -> u64,
}

impl Session {
    /// Creates a new session with a freshly shuffled shoe from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameOptions, Phase, Session};
    ///
    /// let mut session = Session::new(GameOptions::default(), 42);
    /// session.deposit(5_000).unwrap();
    /// assert_eq!(session.phase(), Phase::Idle);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let shoe = Shoe::new(options.decks, seed);
        Self::with_shoe(options, shoe)
    }

    /// Creates a new session dealing from `shoe`.
    #[must_use]
    pub fn with_shoe(options: GameOptions, shoe: Shoe) -> Self {
        Self {
            options,
            shoe,
            ledger: Ledger::new(),
            round: None,
            clock: system_clock,
        }
    }

    /// Replaces the clock used to timestamp history records.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the bankroll, or `None` before the first deposit.
    #[must_use]
    pub const fn bankroll(&self) -> Option<u64> {
        self.ledger.bankroll()
    }

    /// Returns the current round, or the last finished one.
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.round.as_ref().map_or(Phase::Idle, Round::phase)
    }

    /// Returns whether a round is in progress.
    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.round.as_ref().is_some_and(Round::is_in_progress)
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns a read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase(),
            round: self.round.as_ref(),
            ledger: &self.ledger,
            cards_remaining: self.shoe.remaining(),
            actions: self.available_actions(),
        }
    }

    /// Runs `f` with the round detached from the session.
    fn with_round<T>(&mut self, f: impl FnOnce(&mut Self, &mut Round) -> T) -> Option<T> {
        let mut round = self.round.take()?;
        let out = f(self, &mut round);
        self.round = Some(round);
        Some(out)
    }

    fn deal_card(&mut self) -> Card {
        self.shoe.deal()
    }

    /// Settles hand `index`: credits `payout`, logs history and emits the event.
    fn record(
        &mut self,
        round: &mut Round,
        index: usize,
        outcome: HandOutcome,
        reason: OutcomeReason,
        payout: u64,
    ) {
        let hand = &round.hands[index];
        let result = HandResult {
            hand_index: index,
            outcome,
            reason,
            bet: hand.bet(),
            payout,
            player_value: hand.value(),
            dealer_value: round.dealer.value(),
        };
        info!(
            "hand {index} settled: {outcome:?} ({reason:?}), bet {}, payout {payout}",
            result.bet
        );
        let time = (self.clock)();
        self.ledger
            .record_hand(&result, hand.cards(), round.dealer.cards(), time);
        round.events.push(Event::HandSettled(result));
    }

    /// Closes the round and returns the session to idle.
    fn end_round(&mut self, round: &mut Round) {
        round.phase = Phase::Idle;
        round.pending = None;
        round.dealer.reveal_hole();
        round.events.push(Event::RoundEnded);
        self.ledger.record_round();
        info!(
            "round over, bankroll {}",
            self.ledger.bankroll().unwrap_or(0)
        );
    }
}
