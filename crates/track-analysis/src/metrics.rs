//! Kinematic and intensity metrics over one storm's track.
//!
//! Per-segment quantities are computed between adjacent observations. A
//! coincident or unsolvable geodesic pair contributes 0 rather than an
//! error: stationary segments are expected in best-track data. Aggregates
//! over zero segments are an explicit "unavailable", never a division by
//! zero.

use chrono::{DateTime, Utc};
use geodesy::{distance_nm, Position};
use hurdat2_parser::Storm;

use crate::report::Report;

/// Elapsed hours between two timestamps, as an absolute value.
pub fn hours_elapsed(t1: DateTime<Utc>, t2: DateTime<Utc>) -> f64 {
    let seconds = (t2 - t1).num_seconds().abs();
    seconds as f64 / 3600.0
}

/// Distance between two positions with the degenerate cases folded to 0.
fn segment_distance(a: &Position, b: &Position) -> f64 {
    distance_nm(a, b).unwrap_or(0.0)
}

/// The highest recorded sustained wind and the time it first occurred.
///
/// `None` when no observation carries an available wind value ("no
/// maximum" - not an error, and not a spurious 0-knot record).
pub fn max_wind_and_time(storm: &Storm) -> Option<(i32, DateTime<Utc>)> {
    let mut best: Option<(i32, DateTime<Utc>)> = None;
    for obs in &storm.observations {
        if let Some(wind) = obs.max_wind_kn {
            // Strict comparison keeps the first occurrence on equal winds.
            if best.map_or(true, |(top, _)| wind > top) {
                best = Some((wind, obs.time));
            }
        }
    }
    best
}

/// Number of observations flagged as landfall.
pub fn landfall_count(storm: &Storm) -> usize {
    storm
        .observations
        .iter()
        .filter(|obs| obs.is_landfall())
        .count()
}

/// Distance of each adjacent-observation segment, nautical miles.
///
/// Empty for a track with fewer than two observations.
pub fn segment_distances(storm: &Storm) -> Vec<f64> {
    storm
        .observations
        .windows(2)
        .map(|pair| segment_distance(&pair[0].position, &pair[1].position))
        .collect()
}

/// Propagation speed of each segment, NM per hour.
///
/// A zero elapsed time (duplicate timestamps) yields speed 0.
pub fn segment_speeds(storm: &Storm) -> Vec<f64> {
    storm
        .observations
        .windows(2)
        .map(|pair| {
            let distance = segment_distance(&pair[0].position, &pair[1].position);
            let hours = hours_elapsed(pair[0].time, pair[1].time);
            if hours == 0.0 {
                0.0
            } else {
                distance / hours
            }
        })
        .collect()
}

/// Total distance the storm center moved, nautical miles.
pub fn total_distance_nm(storm: &Storm) -> f64 {
    segment_distances(storm).iter().sum()
}

/// Assemble the per-storm summary, or `None` for a storm with no records.
pub fn report(storm: &Storm) -> Option<Report> {
    let start_time = storm.start_time()?;
    let end_time = storm.end_time()?;

    let max_wind = max_wind_and_time(storm);

    let speeds = segment_speeds(storm);
    let max_speed = speeds.iter().copied().reduce(f64::max);
    let mean_speed = if speeds.is_empty() {
        None
    } else {
        Some(speeds.iter().sum::<f64>() / speeds.len() as f64)
    };

    Some(Report {
        id: storm.id.clone(),
        name: storm.name.clone(),
        start_time,
        end_time,
        max_wind_kn: max_wind.map(|(wind, _)| wind),
        max_wind_time: max_wind.map(|(_, time)| time),
        landfalls: landfall_count(storm),
        total_distance_nm: total_distance_nm(storm),
        max_speed_nm_h: max_speed,
        mean_speed_nm_h: mean_speed,
    })
}
