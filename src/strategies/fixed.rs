//! Constant stake.

use crate::history::History;

use super::traits::Strategy;

/// Bets the same amount every round.
#[derive(Clone, Debug)]
pub struct FixedBettingStrategy {
    name: String,
    bet_amount: f64,
}

impl FixedBettingStrategy {
    /// Bet `bet_amount` every round.
    ///
    /// The amount is not checked here. A non-positive or non-finite amount
    /// ends the run on its first round with a `ContractViolation`, reported
    /// for this strategy alone.
    pub fn new(bet_amount: f64) -> Self {
        Self {
            name: "Fixed Bet Strategy".to_string(),
            bet_amount,
        }
    }

    /// Override the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn bet_amount(&self) -> f64 {
        self.bet_amount
    }
}

impl Strategy for FixedBettingStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide_bet(&mut self, _history: &History) -> f64 {
        self.bet_amount
    }
}
