use crate::ledger::Ledger;

use super::{AvailableActions, Phase, Round};

/// A read-only view of a session for rendering.
///
/// The dealer's hole card is included; hiding it until
/// [`crate::DealerHand::is_hole_revealed`] is up to the renderer.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot<'a> {
    /// Current phase.
    pub phase: Phase,
    /// The current round, or the last finished one.
    pub round: Option<&'a Round>,
    /// Bankroll, statistics and history.
    pub ledger: &'a Ledger,
    /// Cards left before the next reshuffle.
    pub cards_remaining: usize,
    /// Actions currently legal.
    pub actions: AvailableActions,
}
