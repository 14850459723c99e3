//! The per-storm summary record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the per-storm summary reports.
///
/// Aggregates that can be undefined - maximum wind over all-sentinel
/// records, speeds over a segmentless track - are options and render as
/// "unavailable".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub max_wind_kn: Option<i32>,
    /// When the maximum wind first occurred.
    pub max_wind_time: Option<DateTime<Utc>>,
    pub landfalls: usize,
    pub total_distance_nm: f64,
    pub max_speed_nm_h: Option<f64>,
    pub mean_speed_nm_h: Option<f64>,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn opt<T: std::fmt::Display>(value: &Option<T>, f: impl Fn(&T) -> String) -> String {
            value
                .as_ref()
                .map_or_else(|| "unavailable".to_string(), |v| f(v))
        }

        write!(
            f,
            "ID: {} | Name: {} | Start Date: {} | End Date: {} | Max Wind (kn): {} | When: {} | Landfalls: {} | Total Distance (NM): {:.2} | Max Speed (NM/h): {} | Mean Speed (NM/h): {}",
            self.id,
            self.name,
            self.start_time.format("%Y-%m-%d"),
            self.end_time.format("%Y-%m-%d"),
            opt(&self.max_wind_kn, |w| w.to_string()),
            opt(&self.max_wind_time, |t| t.format("%Y-%m-%d %H:%M").to_string()),
            self.landfalls,
            self.total_distance_nm,
            opt(&self.max_speed_nm_h, |s| format!("{s:.2}")),
            opt(&self.mean_speed_nm_h, |s| format!("{s:.2}")),
        )
    }
}
