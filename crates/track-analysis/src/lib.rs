//! Per-storm track analysis.
//!
//! Everything here is a pure function of a parsed [`Storm`]: kinematic and
//! intensity metrics ([`metrics`]), the quadrant hypothesis test
//! ([`quadrant`]), and the dataset-wide accuracy fold ([`accuracy`]).
//!
//! [`Storm`]: hurdat2_parser::Storm

pub mod accuracy;
pub mod metrics;
pub mod quadrant;
pub mod report;

pub use accuracy::{AccuracyAggregator, AccuracySummary, Tally, YearSummary};
pub use quadrant::{classify, Quadrant, QuadrantRange};
pub use report::Report;
