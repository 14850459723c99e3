//! Dataset-wide accuracy accumulation.
//!
//! Each storm contributes a `(correct, total)` tally; the aggregator owns
//! the running fold over the stream, so the accumulator's scope and
//! lifetime are explicit rather than ambient state in a processing loop.

use std::collections::BTreeMap;

use hurdat2_parser::Storm;
use serde::Serialize;
use tracing::debug;

/// A `(correct, total)` classification tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub correct: u64,
    pub total: u64,
}

impl Tally {
    pub fn new(correct: u64, total: u64) -> Self {
        Self { correct, total }
    }

    /// Fold another tally into this one.
    pub fn merge(&mut self, other: Tally) {
        self.correct += other.correct;
        self.total += other.total;
    }

    /// Fraction of correct classifications, `None` over an empty total.
    pub fn hit_rate(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.correct as f64 / self.total as f64)
        }
    }
}

/// Dataset-level roll-up of the hypothesis test.
#[derive(Debug, Clone, Serialize)]
pub struct AccuracySummary {
    pub storms: usize,
    pub correct: u64,
    pub total: u64,
    /// `None` when no observation in the dataset was classifiable.
    pub hit_rate: Option<f64>,
}

/// Per-season roll-up, keyed by the year encoded in the storm identifier.
#[derive(Debug, Clone, Serialize)]
pub struct YearSummary {
    pub year: i32,
    pub storms: usize,
    pub correct: u64,
    pub total: u64,
    pub hit_rate: Option<f64>,
}

/// Accumulates per-storm tallies into dataset and per-year summaries.
#[derive(Debug, Default)]
pub struct AccuracyAggregator {
    storms: usize,
    tally: Tally,
    by_year: BTreeMap<i32, (usize, Tally)>,
}

impl AccuracyAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one storm's tally into the running totals.
    pub fn record(&mut self, storm: &Storm, tally: Tally) {
        self.storms += 1;
        self.tally.merge(tally);

        match storm.year() {
            Some(year) => {
                let (count, year_tally) = self.by_year.entry(year).or_default();
                *count += 1;
                year_tally.merge(tally);
            }
            None => debug!(storm_id = %storm.id, "no season year in storm id"),
        }
    }

    pub fn summary(&self) -> AccuracySummary {
        AccuracySummary {
            storms: self.storms,
            correct: self.tally.correct,
            total: self.tally.total,
            hit_rate: self.tally.hit_rate(),
        }
    }

    /// Season summaries in ascending year order.
    pub fn year_summaries(&self) -> Vec<YearSummary> {
        self.by_year
            .iter()
            .map(|(&year, &(storms, tally))| YearSummary {
                year,
                storms,
                correct: tally.correct,
                total: tally.total,
                hit_rate: tally.hit_rate(),
            })
            .collect()
    }
}
