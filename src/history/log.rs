//! Append-only round log for a single strategy run.

use serde::Serialize;

use crate::core::Outcome;

use super::record::Record;

/// Ordered, append-only log of settled rounds.
///
/// Games and strategies only ever see `&History`, and nothing in the public
/// API mutates an existing log. Appending is reserved for the simulation
/// loop.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct History {
    records: Vec<Record>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history with room for `rounds` records.
    #[must_use]
    pub(crate) fn with_capacity(rounds: usize) -> Self {
        Self {
            records: Vec::with_capacity(rounds),
        }
    }

    /// Build a history by settling a sequence of bets from `start_value`.
    ///
    /// Useful for driving games and strategies outside a simulation.
    #[must_use]
    pub fn replay(start_value: f64, rounds: &[(f64, Outcome)]) -> Self {
        let mut history = Self::with_capacity(rounds.len());
        let mut capital = start_value;
        for (round_index, &(bet, outcome)) in rounds.iter().enumerate() {
            let record = Record::settle(round_index, bet, outcome, capital, start_value);
            capital = record.capital_after;
            history.append(record);
        }
        history
    }

    /// Append a settled round.
    pub(crate) fn append(&mut self, record: Record) {
        debug_assert_eq!(record.round_index, self.records.len());
        self.records.push(record);
    }

    /// All records in play order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// The most recent record, or `None` before the first round.
    #[must_use]
    pub fn last_record(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Number of completed rounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Capital after each round.
    #[must_use]
    pub fn capital_series(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.capital_after).collect()
    }

    /// Cumulative gain after each round.
    #[must_use]
    pub fn gains(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.cumulative_gain).collect()
    }

    /// Bet placed in each round.
    #[must_use]
    pub fn bets(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.bet).collect()
    }

    #[must_use]
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.records.iter().map(|r| r.outcome).collect()
    }

    /// Per-round gain, signed by outcome.
    #[must_use]
    pub fn signed_gains(&self) -> Vec<f64> {
        self.records.iter().map(Record::signed_gain).collect()
    }

    /// Number of consecutive losses at the end of the log.
    #[must_use]
    pub fn trailing_losses(&self) -> usize {
        self.records.iter().rev().take_while(|r| !r.is_win()).count()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
