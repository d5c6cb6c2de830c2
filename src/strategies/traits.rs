//! The `Strategy` trait.

use crate::history::History;

/// A betting rule.
///
/// The simulation calls `decide_bet` once per round with the run's history
/// so far, validates the result, and applies the bet ceiling and capital
/// clamps itself. Strategies never see `max_bet`.
///
/// ## Implementation Notes
///
/// - `decide_bet`: Must return a finite, positive amount; anything else
///   aborts the run with a contract violation
/// - `reset`: Called before every run. Clear any private bookkeeping here
/// - `name`: Used as the strategy's key in the simulation report
pub trait Strategy: Send {
    /// Name used to identify this strategy's result.
    fn name(&self) -> &str;

    /// Decide the next bet from the history so far.
    fn decide_bet(&mut self, history: &History) -> f64;

    /// Clear private state before a new run.
    fn reset(&mut self) {}

    fn description(&self) -> String {
        format!("Strategy Name: {}", self.name())
    }
}
