//! Martingale doubling.

use crate::history::History;

use super::traits::Strategy;

/// Doubles the stake after every loss and returns to `base_bet` after a win.
///
/// After `k` consecutive trailing losses the decided bet is
/// `base_bet * 2^k`. The simulation's bet ceiling and capital clamps apply
/// afterwards and do not feed back into the doubling.
#[derive(Clone, Debug)]
pub struct DoubleOnLossStrategy {
    name: String,
    base_bet: f64,
}

impl DoubleOnLossStrategy {
    /// Start each streak at `base_bet`.
    ///
    /// A non-positive `base_bet` is not rejected here. The run reports
    /// `ContractViolation::NonPositiveBet` when it asks for the first bet.
    pub fn new(base_bet: f64) -> Self {
        Self {
            name: "Double On Loss Strategy".to_string(),
            base_bet,
        }
    }

    /// Override the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn base_bet(&self) -> f64 {
        self.base_bet
    }
}

impl Strategy for DoubleOnLossStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide_bet(&mut self, history: &History) -> f64 {
        let streak = history.trailing_losses();
        let exponent = i32::try_from(streak).unwrap_or(i32::MAX);
        // Saturate instead of overflowing to infinity on absurd streaks
        (self.base_bet * 2f64.powi(exponent)).min(f64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;

    #[test]
    fn test_base_bet_on_empty_history() {
        let mut strategy = DoubleOnLossStrategy::new(5.0);
        assert_eq!(strategy.decide_bet(&History::new()), 5.0);
    }

    #[test]
    fn test_doubles_on_losses() {
        let mut strategy = DoubleOnLossStrategy::new(5.0);
        let mut rounds = Vec::new();
        let mut expected = 5.0;
        for _ in 0..6 {
            let bet = strategy.decide_bet(&History::replay(1_000_000.0, &rounds));
            assert_eq!(bet, expected);
            rounds.push((bet, Outcome::Lose));
            expected *= 2.0;
        }
    }

    #[test]
    fn test_resets_after_win() {
        let mut strategy = DoubleOnLossStrategy::new(2.0);
        let history = History::replay(
            100.0,
            &[(2.0, Outcome::Lose), (4.0, Outcome::Lose), (8.0, Outcome::Win)],
        );
        assert_eq!(strategy.decide_bet(&history), 2.0);
    }

    #[test]
    fn test_saturates() {
        let mut strategy = DoubleOnLossStrategy::new(1.0);
        let rounds = vec![(1.0, Outcome::Lose); 2000];
        let bet = strategy.decide_bet(&History::replay(f64::MAX, &rounds));
        assert!(bet.is_finite());
    }

    #[test]
    fn test_naming() {
        let strategy = DoubleOnLossStrategy::new(1.0);
        assert_eq!(strategy.name(), "Double On Loss Strategy");
        assert_eq!(strategy.with_name("martingale").name(), "martingale");
    }
}
