//! Plain-text gain chart.

use std::fmt::Write;

use super::{GainPlotter, GainSegment, Trend};

/// Renders one line per round, `+` for gains and `-` for losses.
///
/// ```text
/// == Fixed Bet Strategy ==
/// +    0: 0.00 -> 10.00
/// -    1: 10.00 -> 0.00
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextPlotter {
    output: String,
}

impl TextPlotter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything rendered so far.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }
}

impl GainPlotter for TextPlotter {
    fn begin(&mut self, title: &str) {
        let _ = writeln!(self.output, "== {title} ==");
    }

    fn segment(&mut self, segment: &GainSegment) {
        let marker = match segment.trend {
            Trend::Up => '+',
            Trend::Down => '-',
        };
        let _ = writeln!(
            self.output,
            "{marker} {:>4}: {:.2} -> {:.2}",
            segment.round_index, segment.from, segment.to
        );
    }
}
