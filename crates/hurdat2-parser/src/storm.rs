//! The per-storm entity.

use chrono::{DateTime, Utc};

use crate::record::Observation;

/// One storm: identifier, name, and its ordered best-track records.
///
/// Observations keep their source order (strictly ordered by timestamp in
/// well-formed data); no reordering or deduplication is performed. A storm
/// is materialized by one parse call and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Storm {
    /// Basin + cyclone number + year, e.g. `AL051852`.
    pub id: String,
    /// Storm name, `UNNAMED` for early records.
    pub name: String,
    pub observations: Vec<Observation>,
}

impl Storm {
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Number of track segments between adjacent observations.
    ///
    /// A single-observation (or empty) storm has no segments; per-segment
    /// aggregates over it are defined as "unavailable", never computed.
    pub fn segment_count(&self) -> usize {
        self.observations.len().saturating_sub(1)
    }

    /// Timestamp of the first observation.
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.observations.first().map(|obs| obs.time)
    }

    /// Timestamp of the last observation.
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.observations.last().map(|obs| obs.time)
    }

    /// The season year encoded in the storm identifier, when well-formed.
    pub fn year(&self) -> Option<i32> {
        if self.id.len() < 4 {
            return None;
        }
        self.id[self.id.len() - 4..].parse().ok()
    }
}
