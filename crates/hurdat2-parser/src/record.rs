//! Data-line grammar and per-observation record types.
//!
//! A HURDAT2 data line is comma-separated with a trailing delimiter:
//!
//! ```text
//! 18521006, 0000,  , HU, 25.9N,  80.4W,  90, -999, -999, ... ,
//! ```
//!
//! Field layout, left to right:
//! - 0: date `YYYYMMDD`
//! - 1: time `HHMM`
//! - 2: record identifier flag (may be empty)
//! - 3: system status code
//! - 4: latitude + hemisphere
//! - 5: longitude + hemisphere
//! - 6: maximum sustained wind, knots (−99/−999 when unavailable)
//! - 7: minimum central pressure, millibars (−999 when unavailable)
//! - 8..19: wind radii, tiers of four quadrant extents NE/SE/SW/NW in
//!   nautical miles (34 kt, 50 kt, 64 kt), −999 when not recorded
//! - 20..23: optional fourth radius tier, present only on longer lines
//!
//! The trailing delimiter produces an empty final field, discarded.

use chrono::{DateTime, NaiveDateTime, Utc};
use geodesy::Position;

use crate::error::{Hurdat2Error, Hurdat2Result};

/// Fields before the wind-radius groups begin.
const LEADING_FIELDS: usize = 8;
/// Field count with the three standard radius tiers.
const FIELDS_STANDARD: usize = LEADING_FIELDS + 12;
/// Field count when the optional fourth tier is present.
const FIELDS_EXTENDED: usize = LEADING_FIELDS + 16;

/// Record identifier codes attached to noteworthy observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFlag {
    /// C - closest approach to a coast, not followed by a landfall
    ClosestApproach,
    /// G - genesis
    Genesis,
    /// I - an intensity peak in terms of both pressure and wind
    IntensityPeak,
    /// L - landfall (center of system crossing a coastline)
    Landfall,
    /// P - minimum in central pressure
    MinimumPressure,
    /// R - additional detail on the intensity of the cyclone when rapid
    /// changes are underway
    RapidChanges,
    /// S - change of status of the system
    StatusChange,
    /// T - provides additional detail on the track of the cyclone
    Track,
    /// W - maximum sustained wind speed
    MaxWind,
}

impl RecordFlag {
    /// Decode a record-identifier field. Empty and unrecognized fields
    /// carry no flag.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "C" => Some(RecordFlag::ClosestApproach),
            "G" => Some(RecordFlag::Genesis),
            "I" => Some(RecordFlag::IntensityPeak),
            "L" => Some(RecordFlag::Landfall),
            "P" => Some(RecordFlag::MinimumPressure),
            "R" => Some(RecordFlag::RapidChanges),
            "S" => Some(RecordFlag::StatusChange),
            "T" => Some(RecordFlag::Track),
            "W" => Some(RecordFlag::MaxWind),
            _ => None,
        }
    }
}

/// System status codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StormStatus {
    TropicalDepression,
    TropicalStorm,
    Hurricane,
    Extratropical,
    SubtropicalDepression,
    SubtropicalStorm,
    Low,
    TropicalWave,
    Disturbance,
    /// A code outside the published alphabet, preserved verbatim.
    Other(String),
}

impl StormStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "TD" => StormStatus::TropicalDepression,
            "TS" => StormStatus::TropicalStorm,
            "HU" => StormStatus::Hurricane,
            "EX" => StormStatus::Extratropical,
            "SD" => StormStatus::SubtropicalDepression,
            "SS" => StormStatus::SubtropicalStorm,
            "LO" => StormStatus::Low,
            "WV" => StormStatus::TropicalWave,
            "DB" => StormStatus::Disturbance,
            other => StormStatus::Other(other.to_string()),
        }
    }

    pub fn as_code(&self) -> &str {
        match self {
            StormStatus::TropicalDepression => "TD",
            StormStatus::TropicalStorm => "TS",
            StormStatus::Hurricane => "HU",
            StormStatus::Extratropical => "EX",
            StormStatus::SubtropicalDepression => "SD",
            StormStatus::SubtropicalStorm => "SS",
            StormStatus::Low => "LO",
            StormStatus::TropicalWave => "WV",
            StormStatus::Disturbance => "DB",
            StormStatus::Other(code) => code,
        }
    }
}

/// One tier of wind radii: the maximum extent of a wind threshold in each
/// compass quadrant, nautical miles.
///
/// Extents keep the wire format's literal values, including the −999
/// "not recorded" sentinel, so tier-level predicates can reason about the
/// raw row the way the source data is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindRadii {
    pub ne: i32,
    pub se: i32,
    pub sw: i32,
    pub nw: i32,
}

impl WindRadii {
    /// Sentinel for an extent that was not recorded.
    pub const UNAVAILABLE: i32 = -999;

    pub fn new(ne: i32, se: i32, sw: i32, nw: i32) -> Self {
        Self { ne, se, sw, nw }
    }

    /// Extents in field order NE, SE, SW, NW.
    pub fn as_array(&self) -> [i32; 4] {
        [self.ne, self.se, self.sw, self.nw]
    }

    /// True when at least one quadrant has a positive recorded extent.
    pub fn has_positive(&self) -> bool {
        self.as_array().iter().any(|&v| v > 0)
    }

    /// True when the four extents are identical (all −999, all zero, or
    /// any other uniform row) - no quadrant stands out.
    pub fn all_equal(&self) -> bool {
        self.se == self.ne && self.sw == self.ne && self.nw == self.ne
    }

    /// The largest recorded extent, if any quadrant has a positive one.
    pub fn max_extent(&self) -> Option<i32> {
        self.as_array()
            .into_iter()
            .max()
            .filter(|&max| max > 0)
    }
}

/// One timestamped best-track record within a storm.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub time: DateTime<Utc>,
    pub record_flag: Option<RecordFlag>,
    pub status: StormStatus,
    pub position: Position,
    /// Maximum sustained wind in knots; `None` when the source carries an
    /// unavailable sentinel (−99/−999).
    pub max_wind_kn: Option<i32>,
    /// Minimum central pressure in millibars; `None` for the −999 sentinel.
    pub min_pressure_mb: Option<i32>,
    pub r34: WindRadii,
    pub r50: WindRadii,
    pub r64: WindRadii,
    /// The optional highest radius tier, present only on extended lines.
    pub r_extra: Option<WindRadii>,
}

impl Observation {
    /// True when this record marks a landfall.
    pub fn is_landfall(&self) -> bool {
        self.record_flag == Some(RecordFlag::Landfall)
    }

    /// Parse one data line. `storm_id` and `line_no` (1-based offset
    /// within the storm's block) only feed error context.
    pub fn parse(line: &str, storm_id: &str, line_no: usize) -> Hurdat2Result<Self> {
        let mut fields: Vec<&str> = line.split(',').map(str::trim).collect();
        // Trailing delimiter yields an empty final field.
        if fields.last() == Some(&"") {
            fields.pop();
        }

        if fields.len() != FIELDS_STANDARD && fields.len() != FIELDS_EXTENDED {
            return Err(malformed(
                storm_id,
                line_no,
                format!(
                    "expected {} or {} fields, found {}",
                    FIELDS_STANDARD,
                    FIELDS_EXTENDED,
                    fields.len()
                ),
            ));
        }

        let time = parse_timestamp(fields[0], fields[1])
            .ok_or_else(|| {
                malformed(
                    storm_id,
                    line_no,
                    format!("invalid date/time '{} {}'", fields[0], fields[1]),
                )
            })?;

        let record_flag = RecordFlag::from_code(fields[2]);
        let status = StormStatus::from_code(fields[3]);

        let position = Position::parse(fields[4], fields[5])
            .map_err(|e| malformed(storm_id, line_no, e.to_string()))?;

        let max_wind = parse_int(fields[6], "max wind", storm_id, line_no)?;
        let min_pressure = parse_int(fields[7], "min pressure", storm_id, line_no)?;

        let r34 = parse_radii(&fields[8..12], storm_id, line_no)?;
        let r50 = parse_radii(&fields[12..16], storm_id, line_no)?;
        let r64 = parse_radii(&fields[16..20], storm_id, line_no)?;
        let r_extra = if fields.len() == FIELDS_EXTENDED {
            Some(parse_radii(&fields[20..24], storm_id, line_no)?)
        } else {
            None
        };

        Ok(Observation {
            time,
            record_flag,
            status,
            position,
            max_wind_kn: available(max_wind),
            min_pressure_mb: (min_pressure != WindRadii::UNAVAILABLE).then_some(min_pressure),
            r34,
            r50,
            r64,
            r_extra,
        })
    }
}

/// Merge the date and time fields and parse them as one strict timestamp.
fn parse_timestamp(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let merged = format!("{date}{time}");
    NaiveDateTime::parse_from_str(&merged, "%Y%m%d%H%M")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Map the wind sentinels to an explicit "unavailable".
fn available(wind: i32) -> Option<i32> {
    (wind != -99 && wind != WindRadii::UNAVAILABLE).then_some(wind)
}

fn parse_int(field: &str, name: &str, storm_id: &str, line_no: usize) -> Hurdat2Result<i32> {
    field.parse::<i32>().map_err(|_| {
        malformed(
            storm_id,
            line_no,
            format!("field '{name}': invalid integer '{field}'"),
        )
    })
}

fn parse_radii(fields: &[&str], storm_id: &str, line_no: usize) -> Hurdat2Result<WindRadii> {
    Ok(WindRadii::new(
        parse_int(fields[0], "radius NE", storm_id, line_no)?,
        parse_int(fields[1], "radius SE", storm_id, line_no)?,
        parse_int(fields[2], "radius SW", storm_id, line_no)?,
        parse_int(fields[3], "radius NW", storm_id, line_no)?,
    ))
}

fn malformed(storm_id: &str, line: usize, reason: String) -> Hurdat2Error {
    Hurdat2Error::MalformedRecord {
        storm_id: storm_id.to_string(),
        line,
        reason,
    }
}
