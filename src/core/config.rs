//! Simulation configuration.
//!
//! Callers configure a run by providing:
//! - `max_bet`: ceiling applied to every decided bet
//! - `start_value`: capital each strategy starts with
//! - `seed` and `stream_mode`: how random streams are shared between strategies

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How games' random streams relate across strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamMode {
    /// Every strategy faces the same outcome stream (common random numbers).
    ///
    /// Each run plays against a clone of the seeded game template, so
    /// differences between strategies come from the strategies alone.
    #[default]
    Shared,
    /// Each strategy gets its own stream, forked from `seed` in strategy order.
    Independent,
}

/// Simulation configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Largest bet allowed in a single round.
    /// Larger decisions are truncated to this value.
    pub max_bet: f64,

    /// Capital each strategy starts with.
    pub start_value: f64,

    /// Root seed for `StreamMode::Independent`.
    pub seed: u64,

    /// Random stream sharing between strategies.
    pub stream_mode: StreamMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_bet: 1000.0,
            start_value: 100.0,
            seed: 42,
            stream_mode: StreamMode::Shared,
        }
    }
}

impl SimulationConfig {
    /// Create a config with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bet ceiling.
    #[must_use]
    pub fn with_max_bet(mut self, max_bet: f64) -> Self {
        self.max_bet = max_bet;
        self
    }

    /// Set the starting capital.
    #[must_use]
    pub fn with_start_value(mut self, start_value: f64) -> Self {
        self.start_value = start_value;
        self
    }

    /// Set the root seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the stream mode.
    #[must_use]
    pub fn with_stream_mode(mut self, mode: StreamMode) -> Self {
        self.stream_mode = mode;
        self
    }

    /// Check that the parameters describe a playable simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_bet.is_finite() && self.max_bet > 0.0) {
            return Err(ConfigError::NonPositiveMaxBet { max_bet: self.max_bet });
        }
        if !(self.start_value.is_finite() && self.start_value >= 0.0) {
            return Err(ConfigError::NegativeStartValue {
                start_value: self.start_value,
            });
        }
        Ok(())
    }
}
