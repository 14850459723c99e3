//! End-to-end parsing tests over canned HURDAT2 blocks.

use std::io::Cursor;

use hurdat2_parser::{Hurdat2Error, RecordFlag, StormReader, WindRadii};
use test_utils::fixtures;

fn reader(text: &str) -> StormReader<Cursor<&str>> {
    StormReader::new(Cursor::new(text))
}

// ============================================================================
// Sequential mode
// ============================================================================

#[test]
fn test_sequential_drains_dataset_in_order() {
    let mut reader = reader(fixtures::THREE_STORM_DATASET);
    let mut ids = Vec::new();
    while let Some(storm) = reader.next_storm().unwrap() {
        ids.push(storm.id);
    }
    assert_eq!(ids, ["AL011851", "AL021851", "AL011852"]);
}

#[test]
fn test_declared_count_matches_observations() {
    let mut reader = reader(fixtures::LANDFALL_STORM);
    let storm = reader.next_storm().unwrap().unwrap();
    assert_eq!(storm.len(), 4);
    assert_eq!(storm.segment_count(), 3);
}

#[test]
fn test_header_fields_are_trimmed() {
    let mut reader = reader(fixtures::SINGLE_OBSERVATION_STORM);
    let storm = reader.next_storm().unwrap().unwrap();
    assert_eq!(storm.id, "AL021851");
    assert_eq!(storm.name, "UNNAMED");
    assert_eq!(storm.year(), Some(1851));
}

// ============================================================================
// Lookup mode
// ============================================================================

#[test]
fn test_lookup_finds_later_storm() {
    let mut reader = reader(fixtures::THREE_STORM_DATASET);
    let storm = reader.find_storm("AL011852").unwrap();
    assert_eq!(storm.id, "AL011852");
    assert_eq!(storm.len(), 2);
}

#[test]
fn test_lookup_unknown_id_reports_not_found() {
    let mut reader = reader(fixtures::THREE_STORM_DATASET);
    match reader.find_storm("EP151995") {
        Err(Hurdat2Error::StormNotFound(id)) => assert_eq!(id, "EP151995"),
        other => panic!("unexpected result: {other:?}"),
    }
}

// ============================================================================
// Record contents
// ============================================================================

#[test]
fn test_landfall_flag_parses() {
    let mut reader = reader(fixtures::LANDFALL_STORM);
    let storm = reader.next_storm().unwrap().unwrap();
    let flags: Vec<_> = storm
        .observations
        .iter()
        .map(|obs| obs.record_flag)
        .collect();
    assert_eq!(
        flags,
        [None, None, None, Some(RecordFlag::Landfall)]
    );
}

#[test]
fn test_radius_tiers_standard_and_extended() {
    let mut reader = reader(fixtures::MODERN_STORM_WITH_RADII);
    let storm = reader.next_storm().unwrap().unwrap();

    let first = &storm.observations[0];
    assert_eq!(first.r34, WindRadii::new(120, 100, 80, 90));
    assert!(!first.r50.has_positive());
    assert!(first.r_extra.is_none());

    let last = &storm.observations[2];
    assert_eq!(last.r64, WindRadii::new(25, 15, 10, 12));
    assert_eq!(last.r_extra, Some(WindRadii::new(20, 10, 7, 8)));
}

#[test]
fn test_sentinel_winds_are_unavailable() {
    let mut reader = reader(fixtures::SENTINEL_WIND_STORM);
    let storm = reader.next_storm().unwrap().unwrap();
    assert!(storm.observations.iter().all(|obs| obs.max_wind_kn.is_none()));
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn test_malformed_record_identifies_storm_and_line() {
    let mut reader = reader(fixtures::MALFORMED_WIND_STORM);
    match reader.next_storm() {
        Err(Hurdat2Error::MalformedRecord {
            storm_id, line, ..
        }) => {
            assert_eq!(storm_id, "AL031851");
            assert_eq!(line, 2);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_generated_blocks_parse() {
    use test_utils::generators::{sparse_data_line, storm_block};

    let lines = vec![
        sparse_data_line("18510625", "0000", "", "HU", "28.0N", "94.8W", 80),
        sparse_data_line("18510625", "0600", "L", "HU", "28.0N", "95.4W", 85),
    ];
    let block = storm_block("AL011851", "UNNAMED", &lines);

    let mut reader = reader(&block);
    let storm = reader.next_storm().unwrap().unwrap();
    assert_eq!(storm.len(), 2);
    assert_eq!(storm.observations[1].max_wind_kn, Some(85));
    assert!(storm.observations[1].is_landfall());
}
