//! The completed run of a single strategy.

use serde::{Deserialize, Serialize};

use crate::history::History;
use crate::plot::{self, GainPlotter, GainPoint, GainSegment};

use super::stats::Statistics;

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    /// All requested rounds were played.
    Completed,
    /// Capital reached 0.
    Insolvent,
    /// The game reported it was finished.
    GameOver,
    /// The caller's stop condition fired.
    Stopped,
}

impl TerminationReason {
    /// True if the run ended before the requested round count.
    #[must_use]
    pub fn is_early(self) -> bool {
        !matches!(self, TerminationReason::Completed)
    }
}

/// Frozen history of one strategy run plus derived views.
#[derive(Clone, Debug)]
pub struct RunResult {
    strategy_name: String,
    history: History,
    start_value: f64,
    rounds_requested: usize,
    termination: TerminationReason,
}

impl RunResult {
    pub(crate) fn new(
        strategy_name: String,
        history: History,
        start_value: f64,
        rounds_requested: usize,
        termination: TerminationReason,
    ) -> Self {
        Self {
            strategy_name,
            history,
            start_value,
            rounds_requested,
            termination,
        }
    }

    #[must_use]
    pub fn strategy_name(&self) -> &str {
        &self.strategy_name
    }

    /// The run's complete round log.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn termination(&self) -> TerminationReason {
        self.termination
    }

    #[must_use]
    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    #[must_use]
    pub fn rounds_requested(&self) -> usize {
        self.rounds_requested
    }

    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    /// Capital after the last round, or the start value if none were played.
    #[must_use]
    pub fn final_capital(&self) -> f64 {
        self.history
            .last_record()
            .map_or(self.start_value, |r| r.capital_after)
    }

    /// Compute summary statistics over the history.
    #[must_use]
    pub fn compute_statistics(&self) -> Statistics {
        Statistics::from_history(&self.history)
    }

    /// Cumulative gain after each round, in record order.
    #[must_use]
    pub fn gain_series(&self) -> Vec<GainPoint> {
        self.history
            .iter()
            .map(|r| GainPoint {
                round_index: r.round_index,
                cumulative_gain: r.cumulative_gain,
                outcome: r.outcome,
            })
            .collect()
    }

    #[must_use]
    pub fn gain_segments(&self) -> Vec<GainSegment> {
        plot::segments(&self.gain_series())
    }

    /// Draw the gain curve with the given backend.
    pub fn plot_gain_over_time<P: GainPlotter + ?Sized>(&self, plotter: &mut P) {
        plotter.begin(&self.strategy_name);
        for segment in self.gain_segments() {
            plotter.segment(&segment);
        }
        plotter.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;
    use crate::plot::{TextPlotter, Trend};

    fn sample() -> RunResult {
        let history = History::replay(
            100.0,
            &[(10.0, Outcome::Win), (20.0, Outcome::Lose), (5.0, Outcome::Win)],
        );
        RunResult::new("sample".into(), history, 100.0, 5, TerminationReason::Stopped)
    }

    #[test]
    fn test_accessors() {
        let result = sample();
        assert_eq!(result.strategy_name(), "sample");
        assert_eq!(result.rounds_requested(), 5);
        assert_eq!(result.rounds_played(), 3);
        assert_eq!(result.final_capital(), 95.0);
        assert!(result.termination().is_early());
        assert!(!TerminationReason::Completed.is_early());
    }

    #[test]
    fn test_final_capital_without_rounds() {
        let result = RunResult::new(
            "broke".into(),
            History::new(),
            0.0,
            3,
            TerminationReason::Insolvent,
        );
        assert_eq!(result.final_capital(), 0.0);
        assert_eq!(result.compute_statistics().total_rounds, 0);
    }

    #[test]
    fn test_gain_segments() {
        let segments = sample().gain_segments();
        let trends: Vec<Trend> = segments.iter().map(|s| s.trend).collect();
        assert_eq!(trends, vec![Trend::Up, Trend::Down, Trend::Up]);
        assert_eq!(segments[1].from, 10.0);
        assert_eq!(segments[1].to, -10.0);
    }

    #[test]
    fn test_plot_gain_over_time() {
        let mut plotter = TextPlotter::new();
        sample().plot_gain_over_time(&mut plotter);

        let lines: Vec<&str> = plotter.output().lines().collect();
        assert_eq!(lines[0], "== sample ==");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with('+'));
        assert!(lines[2].starts_with('-'));
    }
}
