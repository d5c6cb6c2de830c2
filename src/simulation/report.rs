//! Per-strategy outcomes of a simulation.

use rustc_hash::FxHashMap;

use crate::error::SimError;

use super::result::RunResult;
use super::stats::Statistics;

/// Results keyed by strategy name, in the order strategies were added.
///
/// A failed run does not hide the others: each entry holds either the
/// strategy's `RunResult` or the error that aborted it.
#[derive(Clone, Debug, Default)]
pub struct SimulationReport {
    entries: Vec<(String, Result<RunResult, SimError>)>,
    index: FxHashMap<String, usize>,
}

impl SimulationReport {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::default(),
        }
    }

    /// Record one strategy's outcome. Names are unique within a simulation.
    pub(crate) fn insert(&mut self, name: String, result: Result<RunResult, SimError>) {
        debug_assert!(!self.index.contains_key(&name));
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, result));
    }

    /// Look up a strategy's outcome by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Result<RunResult, SimError>> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    /// Successful result for `name`, if it exists and did not fail.
    #[must_use]
    pub fn result(&self, name: &str) -> Option<&RunResult> {
        self.get(name).and_then(|r| r.as_ref().ok())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Result<RunResult, SimError>)> {
        self.entries.iter().map(|(name, result)| (name.as_str(), result))
    }

    /// Strategy names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn successes(&self) -> impl Iterator<Item = &RunResult> {
        self.entries.iter().filter_map(|(_, r)| r.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &SimError)> {
        self.entries
            .iter()
            .filter_map(|(name, r)| r.as_ref().err().map(|e| (name.as_str(), e)))
    }

    /// Statistics of every successful run, in insertion order.
    #[must_use]
    pub fn statistics(&self) -> Vec<(&str, Statistics)> {
        self.successes()
            .map(|r| (r.strategy_name(), r.compute_statistics()))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
