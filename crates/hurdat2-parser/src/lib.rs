//! HURDAT2 best-track parser.
//!
//! This crate parses the National Hurricane Center's HURDAT2 line format:
//! one header line per storm (`AL051852,UNNAMED,25,`) followed by the
//! declared number of comma-separated data lines. Storms are read from a
//! forward-only stream, one at a time, either sequentially or by scanning
//! ahead for a specific storm identifier.

pub mod error;
pub mod reader;
pub mod record;
pub mod storm;

pub use error::{Hurdat2Error, Hurdat2Result};
pub use reader::StormReader;
pub use record::{Observation, RecordFlag, StormStatus, WindRadii};
pub use storm::Storm;
