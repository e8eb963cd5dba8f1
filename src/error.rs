//! Error types for table operations.
//!
//! Every error is a reported no-op: when an operation returns `Err`, the
//! session is left exactly as it was.

use thiserror::Error;

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// A round is already in progress.
    #[error("a round is already in progress")]
    InvalidState,
    /// No deposit has been made yet.
    #[error("no bankroll; make a deposit first")]
    NoBankroll,
    /// Main bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The combined stake exceeds the bankroll.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The largest return these stakes could earn does not fit the bankroll.
    #[error("stake too large")]
    StakeTooLarge,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round is awaiting player actions.
    #[error("invalid game state for this action")]
    InvalidState,
    /// An insurance or even-money decision must be made first.
    #[error("an insurance or even-money decision is pending")]
    DecisionPending,
    /// Hand is not active.
    #[error("hand is not active")]
    HandNotActive,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Maximum splits reached.
    #[error("maximum splits reached")]
    MaxSplitsReached,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}

/// Errors that can occur during insurance and even-money decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// No round is awaiting player actions.
    #[error("invalid game state for insurance")]
    InvalidState,
    /// This decision is not on offer right now.
    #[error("this decision is not on offer")]
    NotOffered,
    /// Insufficient funds for insurance.
    #[error("insufficient funds for insurance")]
    InsufficientFunds,
}

/// Errors that can occur while advancing the dealer and settlement phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// The round is not in the dealer or settle phase.
    #[error("invalid game state for showdown")]
    InvalidState,
}

/// Errors that can occur during bankroll operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Amount is zero.
    #[error("amount is zero")]
    ZeroAmount,
    /// The initial deposit has already been made.
    #[error("the initial deposit has already been made")]
    AlreadyFunded,
    /// No deposit has been made yet.
    #[error("no deposit has been made yet")]
    NotFunded,
    /// A round is in progress.
    #[error("a round is in progress")]
    RoundInProgress,
    /// The bankroll would overflow.
    #[error("amount too large")]
    Overflow,
}

/// Errors that can occur when parsing a currency amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The input is empty.
    #[error("amount is empty")]
    Empty,
    /// The input is not a non-negative decimal number.
    #[error("amount is not a valid decimal number")]
    Invalid,
    /// The amount does not fit in minor units.
    #[error("amount too large")]
    Overflow,
}
