//! Quadrant classification and the wind-extent hypothesis test.
//!
//! The hypothesis: the longest radius of high wind sits ahead-right of the
//! storm's motion. Per segment, the plausible band is bounded by the
//! bearing +45° and +90°, each mapped to a compass quadrant. The observed
//! side comes from the recorded wind radii, preferring the most intense
//! tier that carries a discriminating signal.

use geodesy::initial_bearing;
use hurdat2_parser::{Storm, WindRadii};

use crate::accuracy::Tally;

/// A compass quadrant, or NA when undetermined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    Ne,
    Se,
    Sw,
    Nw,
    Na,
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Quadrant::Ne => "NE",
            Quadrant::Se => "SE",
            Quadrant::Sw => "SW",
            Quadrant::Nw => "NW",
            Quadrant::Na => "NA",
        };
        f.write_str(label)
    }
}

/// The hypothetical quadrant band for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantRange {
    /// Quadrant of bearing +45°.
    pub lower: Quadrant,
    /// Quadrant of bearing +90°.
    pub upper: Quadrant,
}

/// Reduce a degree value into [0, 360).
pub fn normalize_degree(degree: f64) -> f64 {
    degree.rem_euclid(360.0)
}

/// Map a normalized degree to its compass quadrant; NA outside [0, 360).
pub fn degree_to_quadrant(degree: f64) -> Quadrant {
    if degree < 0.0 {
        Quadrant::Na
    } else if degree < 90.0 {
        Quadrant::Ne
    } else if degree < 180.0 {
        Quadrant::Se
    } else if degree < 270.0 {
        Quadrant::Sw
    } else if degree < 360.0 {
        Quadrant::Nw
    } else {
        Quadrant::Na
    }
}

/// The hypothetical quadrant band of every segment.
///
/// Bearing falls back to 0° when the two positions coincide, matching the
/// treatment of stationary segments elsewhere.
pub fn hypothetical_quadrants(storm: &Storm) -> Vec<QuadrantRange> {
    storm
        .observations
        .windows(2)
        .map(|pair| {
            let bearing = initial_bearing(&pair[0].position, &pair[1].position).unwrap_or(0.0);
            QuadrantRange {
                lower: degree_to_quadrant(normalize_degree(bearing + 45.0)),
                upper: degree_to_quadrant(normalize_degree(bearing + 90.0)),
            }
        })
        .collect()
}

/// Tier fallback order: most intense first.
fn tiers(obs: &hurdat2_parser::Observation) -> [&WindRadii; 3] {
    [&obs.r64, &obs.r50, &obs.r34]
}

/// The quadrant a single radius tier points at, if the tier is decisive.
///
/// A tier is decisive when at least one extent is a positive recorded
/// value and the four extents are not all identical. Ties between equal
/// maxima resolve NW > SW > SE > NE.
fn decisive_quadrant(radii: &WindRadii) -> Option<Quadrant> {
    if !radii.has_positive() || radii.all_equal() {
        return None;
    }
    let candidates = [
        (Quadrant::Nw, radii.nw),
        (Quadrant::Sw, radii.sw),
        (Quadrant::Se, radii.se),
        (Quadrant::Ne, radii.ne),
    ];
    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.1 > best.1 {
            best = *candidate;
        }
    }
    Some(best.0)
}

/// The observed quadrant of every observation from index 1 onward.
///
/// The first observation is the track origin, not a segment outcome, so it
/// has no entry. Each remaining observation scans its tiers 64 → 50 → 34 kt
/// and takes the first decisive one; NA when none is.
pub fn actual_quadrants(storm: &Storm) -> Vec<Quadrant> {
    storm
        .observations
        .iter()
        .skip(1)
        .map(|obs| {
            tiers(obs)
                .into_iter()
                .find_map(decisive_quadrant)
                .unwrap_or(Quadrant::Na)
        })
        .collect()
}

/// Score one storm: how often the observed quadrant lands inside the
/// hypothetical band.
///
/// Observations with an NA observed quadrant are excluded from the total;
/// a hit is an observed quadrant equal to either band bound.
pub fn classify(storm: &Storm) -> Tally {
    let hypothetical = hypothetical_quadrants(storm);
    let actual = actual_quadrants(storm);

    let mut tally = Tally::default();
    for (observed, range) in actual.iter().zip(&hypothetical) {
        if *observed == Quadrant::Na {
            continue;
        }
        tally.total += 1;
        if *observed == range.lower || *observed == range.upper {
            tally.correct += 1;
        }
    }
    tally
}
