//! Round outcomes.

use serde::{Deserialize, Serialize};

use crate::error::ContractViolation;

/// Result of a single round from the bettor's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The bet is paid out at even odds.
    Win,
    /// The bet is lost.
    Lose,
}

impl Outcome {
    /// Convert a raw `+1 / -1` signal into an outcome.
    ///
    /// Custom games producing integer signals should go through this so a
    /// bad signal is reported instead of silently coerced. This is the only
    /// source of `ContractViolation::InvalidSignal`: `Game::play_round`
    /// returns an `Outcome`, so the error reaches the caller of this function
    /// and never a `SimulationReport`.
    pub fn from_signal(signal: i64) -> Result<Self, ContractViolation> {
        match signal {
            1 => Ok(Outcome::Win),
            -1 => Ok(Outcome::Lose),
            other => Err(ContractViolation::InvalidSignal { signal: other }),
        }
    }

    /// Map a boolean "won" flag to an outcome.
    #[must_use]
    pub const fn from_win(won: bool) -> Self {
        if won {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    /// The `+1 / -1` signal for this outcome.
    #[must_use]
    pub const fn signal(self) -> i64 {
        match self {
            Outcome::Win => 1,
            Outcome::Lose => -1,
        }
    }

    /// The signal as a bet multiplier.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Outcome::Win => 1.0,
            Outcome::Lose => -1.0,
        }
    }

    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Outcome::Win)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "WIN"),
            Outcome::Lose => write!(f, "LOSE"),
        }
    }
}
