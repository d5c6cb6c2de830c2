//! One row of the round log.

use serde::{Deserialize, Serialize};

use crate::core::Outcome;

/// A settled round.
///
/// `capital_after` is always `capital_before ± bet` with the sign of
/// `outcome`; `settle` is the only place that computes it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Position in the run (0-indexed).
    pub round_index: usize,

    /// Amount wagered, after clamping.
    pub bet: f64,

    /// Outcome of the round.
    pub outcome: Outcome,

    /// Capital before the bet was settled.
    pub capital_before: f64,

    /// Capital after the bet was settled.
    pub capital_after: f64,

    /// `capital_after - start_value`.
    pub cumulative_gain: f64,
}

impl Record {
    /// Settle a bet and build the resulting record.
    #[must_use]
    pub fn settle(
        round_index: usize,
        bet: f64,
        outcome: Outcome,
        capital_before: f64,
        start_value: f64,
    ) -> Self {
        let capital_after = capital_before + bet * outcome.multiplier();
        Self {
            round_index,
            bet,
            outcome,
            capital_before,
            capital_after,
            cumulative_gain: capital_after - start_value,
        }
    }

    /// Bet amount signed by the outcome.
    #[must_use]
    pub fn signed_gain(&self) -> f64 {
        self.bet * self.outcome.multiplier()
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        self.outcome.is_win()
    }
}
