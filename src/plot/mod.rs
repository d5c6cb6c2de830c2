//! Gain series for presentation collaborators.
//!
//! The engine never hands its internals to a plotting backend. Backends
//! implement `GainPlotter` and receive one `GainSegment` per round, in
//! record order; upward and downward segments are distinguished by `Trend`.

mod text;

use serde::{Deserialize, Serialize};

use crate::core::Outcome;

pub use text::TextPlotter;

/// One point of the cumulative gain curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GainPoint {
    pub round_index: usize,
    pub cumulative_gain: f64,
    pub outcome: Outcome,
}

/// Direction of a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    /// Winning round.
    Up,
    /// Losing round.
    Down,
}

impl From<Outcome> for Trend {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Trend::Up,
            Outcome::Lose => Trend::Down,
        }
    }
}

/// The gain curve across one round.
///
/// `from` is the cumulative gain before the round (0 for the first round),
/// `to` the cumulative gain after it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GainSegment {
    pub round_index: usize,
    pub from: f64,
    pub to: f64,
    pub trend: Trend,
}

/// Turn a gain series into consecutive segments.
#[must_use]
pub fn segments(points: &[GainPoint]) -> Vec<GainSegment> {
    let mut previous = 0.0;
    points
        .iter()
        .map(|point| {
            let segment = GainSegment {
                round_index: point.round_index,
                from: previous,
                to: point.cumulative_gain,
                trend: Trend::from(point.outcome),
            };
            previous = point.cumulative_gain;
            segment
        })
        .collect()
}

/// A rendering backend for gain curves.
pub trait GainPlotter {
    /// Start a new chart.
    fn begin(&mut self, title: &str);

    /// Draw one round's segment.
    fn segment(&mut self, segment: &GainSegment);

    /// Finish the chart.
    fn finish(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_chain() {
        let points = [
            GainPoint { round_index: 0, cumulative_gain: 10.0, outcome: Outcome::Win },
            GainPoint { round_index: 1, cumulative_gain: -10.0, outcome: Outcome::Lose },
        ];
        let segs = segments(&points);

        assert_eq!(segs.len(), 2);
        assert_eq!((segs[0].from, segs[0].to, segs[0].trend), (0.0, 10.0, Trend::Up));
        assert_eq!((segs[1].from, segs[1].to, segs[1].trend), (10.0, -10.0, Trend::Down));
    }

    #[test]
    fn test_segments_empty() {
        assert!(segments(&[]).is_empty());
    }
}
