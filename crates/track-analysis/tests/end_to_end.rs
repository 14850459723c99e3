//! Parse-then-analyze tests over canned datasets.

use std::io::Cursor;

use hurdat2_parser::{Storm, StormReader};
use track_analysis::{classify, metrics, AccuracyAggregator, Quadrant};

fn parse_one(text: &str) -> Storm {
    StormReader::new(Cursor::new(text))
        .next_storm()
        .unwrap()
        .unwrap()
}

// ============================================================================
// Reports
// ============================================================================

#[test]
fn test_single_observation_storm_report() {
    let storm = parse_one(test_utils::SINGLE_OBSERVATION_STORM);
    let report = metrics::report(&storm).unwrap();

    assert_eq!(report.id, "AL021851");
    assert_eq!(report.max_wind_kn, Some(80));
    assert_eq!(report.landfalls, 0);
    assert_eq!(report.total_distance_nm, 0.0);
    assert_eq!(report.max_speed_nm_h, None);
    assert_eq!(report.mean_speed_nm_h, None);

    // No segments, no classifiable quadrant.
    let tally = classify(&storm);
    assert_eq!((tally.correct, tally.total), (0, 0));
}

#[test]
fn test_landfall_storm_report() {
    let storm = parse_one(test_utils::LANDFALL_STORM);
    let report = metrics::report(&storm).unwrap();

    assert_eq!(report.landfalls, 1);
    assert!(report.total_distance_nm > 0.0);
    let max = report.max_speed_nm_h.unwrap();
    let mean = report.mean_speed_nm_h.unwrap();
    assert!(max >= mean);
    assert!(mean > 0.0);
    assert_eq!(
        report.start_time.format("%Y-%m-%d").to_string(),
        "1851-06-25"
    );
}

#[test]
fn test_sentinel_wind_storm_has_no_maximum() {
    let storm = parse_one(test_utils::SENTINEL_WIND_STORM);
    assert!(metrics::max_wind_and_time(&storm).is_none());

    let report = metrics::report(&storm).unwrap();
    assert_eq!(report.max_wind_kn, None);
    assert_eq!(report.max_wind_time, None);
    // The track still moved.
    assert!(report.total_distance_nm > 0.0);
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_modern_storm_supports_hypothesis() {
    let storm = parse_one(test_utils::MODERN_STORM_WITH_RADII);

    let actual = track_analysis::quadrant::actual_quadrants(&storm);
    assert_eq!(actual, vec![Quadrant::Ne, Quadrant::Ne]);

    let tally = classify(&storm);
    assert_eq!((tally.correct, tally.total), (2, 2));
}

#[test]
fn test_radiiless_storm_classifies_nothing() {
    let storm = parse_one(test_utils::LANDFALL_STORM);
    let tally = classify(&storm);
    assert_eq!((tally.correct, tally.total), (0, 0));
}

// ============================================================================
// Aggregation
// ============================================================================

#[test]
fn test_dataset_fold_over_stream() {
    let mut reader = StormReader::new(Cursor::new(test_utils::THREE_STORM_DATASET));
    let mut aggregator = AccuracyAggregator::new();

    while let Some(storm) = reader.next_storm().unwrap() {
        aggregator.record(&storm, classify(&storm));
    }

    let summary = aggregator.summary();
    assert_eq!(summary.storms, 3);
    // Early-era storms carry no radii: nothing classifiable.
    assert_eq!(summary.total, 0);
    assert_eq!(summary.hit_rate, None);

    let years: Vec<_> = aggregator
        .year_summaries()
        .into_iter()
        .map(|y| (y.year, y.storms))
        .collect();
    assert_eq!(years, [(1851, 2), (1852, 1)]);
}
