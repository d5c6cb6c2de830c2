//! Statistics over a completed run.

use serde::{Deserialize, Serialize};

use crate::history::History;

/// Summary statistics of one strategy run.
///
/// All fields are 0 for an empty history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Rounds actually played.
    pub total_rounds: usize,

    /// Mean per-round signed gain.
    pub expected_value: f64,

    /// Sample variance (n - 1) of per-round signed gains.
    pub variance: f64,

    /// Largest drop from a running capital peak.
    pub max_drawdown: f64,

    /// Cumulative gain after the last round.
    pub final_gain: f64,

    pub average_bet: f64,
    pub max_bet: f64,
    pub min_bet: f64,

    /// Fraction of rounds won.
    pub win_rate: f64,
}

impl Statistics {
    /// Compute all statistics in a single pass over the history.
    #[must_use]
    pub fn from_history(history: &History) -> Self {
        let Some(first) = history.records().first() else {
            return Self::default();
        };

        // Welford's running mean/variance
        let mut count = 0usize;
        let mut mean = 0.0;
        let mut m2 = 0.0;

        let mut wins = 0usize;
        let mut bet_sum = 0.0;
        let mut max_bet = f64::NEG_INFINITY;
        let mut min_bet = f64::INFINITY;

        let mut peak = first.capital_after;
        let mut max_drawdown: f64 = 0.0;

        for record in history {
            let gain = record.signed_gain();
            count += 1;
            let delta = gain - mean;
            mean += delta / count as f64;
            m2 += delta * (gain - mean);

            if record.is_win() {
                wins += 1;
            }
            bet_sum += record.bet;
            max_bet = max_bet.max(record.bet);
            min_bet = min_bet.min(record.bet);

            peak = peak.max(record.capital_after);
            max_drawdown = max_drawdown.max(peak - record.capital_after);
        }

        let variance = if count > 1 { m2 / (count - 1) as f64 } else { 0.0 };
        let final_gain = history.last_record().map_or(0.0, |r| r.cumulative_gain);

        Self {
            total_rounds: count,
            expected_value: mean,
            variance,
            max_drawdown,
            final_gain,
            average_bet: bet_sum / count as f64,
            max_bet,
            min_bet,
            win_rate: wins as f64 / count as f64,
        }
    }

    /// Standard deviation of per-round signed gains.
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}
