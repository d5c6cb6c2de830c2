//! Error types for the simulation engine.
//!
//! Configuration problems are reported before any round is played.
//! Contract violations come from user-supplied games and strategies and abort
//! only the run they occur in. Insolvency and early stops are not errors.

use thiserror::Error;

/// Invalid construction or run parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Probability {p} is out of range [0.0, 1.0]")]
    ProbabilityOutOfRange { p: f64 },

    #[error("Empty winning interval: a ({a}) must not exceed b ({b})")]
    EmptyInterval { a: i64, b: i64 },

    #[error("Round count must be positive")]
    ZeroRounds,

    #[error("Maximum bet must be positive and finite, got {max_bet}")]
    NonPositiveMaxBet { max_bet: f64 },

    #[error("Start value must be non-negative and finite, got {start_value}")]
    NegativeStartValue { start_value: f64 },

    #[error("Strategy name '{name}' is used more than once")]
    DuplicateStrategy { name: String },

    #[error("Simulation has no strategies to run")]
    NoStrategies,
}

/// A custom game or strategy broke its contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContractViolation {
    #[error("Strategy '{strategy}' returned non-positive bet {bet} in round {round}")]
    NonPositiveBet {
        strategy: String,
        round: usize,
        bet: f64,
    },

    #[error("Strategy '{strategy}' returned a non-finite bet in round {round}")]
    NonFiniteBet { strategy: String, round: usize },

    /// Only produced by `Outcome::from_signal`.
    #[error("Game signal {signal} is not a win (+1) or a loss (-1)")]
    InvalidSignal { signal: i64 },
}

/// Top-level error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Contract violation: {0}")]
    Contract(#[from] ContractViolation),
}

impl SimError {
    /// True if this error came from a user-supplied game or strategy.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, SimError::Contract(_))
    }
}
