//! A single-player blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Session`] type that owns the shoe, the bankroll
//! [`Ledger`] and the current [`Round`]: betting with Perfect Pairs and 21+3
//! side bets, insurance and even money, hitting, standing, doubling,
//! splitting, dealer play and settlement. Money is always integer minor
//! units (cents); see [`money`] for the conversion at the boundary.
//!
//! # Example
//!
//! ```
//! use bjtable::{GameOptions, Phase, Session};
//!
//! let mut session = Session::new(GameOptions::default(), 42);
//! session.deposit(10_000).unwrap();
//!
//! let mut phase = session.start_round(1_000, 0, 0).unwrap();
//! while phase != Phase::Idle {
//!     phase = match phase {
//!         Phase::Player if session.round().and_then(|r| r.pending_decision()).is_some() => {
//!             session.decline_insurance().or_else(|_| session.decline_even_money()).unwrap()
//!         }
//!         Phase::Player => session.stand().unwrap(),
//!         _ => session.advance_phase().unwrap(),
//!     };
//! }
//! assert_eq!(session.ledger().stats().played, 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod money;
pub mod options;
pub mod result;
pub mod shoe;
pub mod side_bet;

// Re-export main types
pub use card::{ACE, Card, CardList, DECK_SIZE, JACK, KING, QUEEN, Suit};
pub use error::{ActionError, BetError, InsuranceError, LedgerError, MoneyError, ShowdownError};
pub use game::{AvailableActions, Decision, Phase, Round, Session, Snapshot};
pub use hand::{DealerHand, Hand, HandDisplay, hand_display, hand_total, is_blackjack};
pub use ledger::{
    CashOutSummary, HistoryRecord, HistorySummary, Ledger, PerfectPairsStats, Stats,
    TwentyOnePlusThreeStats,
};
pub use options::{DoubleOption, GameOptions, PayoutRatio, RoundingMode};
pub use result::{Event, HandOutcome, HandResult, OutcomeReason};
pub use shoe::Shoe;
pub use side_bet::{PerfectPairs, SideBetWin, TwentyOnePlusThree};
