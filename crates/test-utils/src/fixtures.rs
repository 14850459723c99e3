//! Canned HURDAT2 text blocks.
//!
//! Early-era storms carry no wind radii (all −999); the synthetic modern
//! block exercises the radius tiers. Every block ends each line with the
//! format's trailing delimiter.

/// One storm, one observation: no segments, no landfall, radii unrecorded.
pub const SINGLE_OBSERVATION_STORM: &str = "\
AL021851,            UNNAMED,      1,
18510705, 1200,  , HU, 22.2N,  97.6W,  80, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
";

/// A short 1851 hurricane with a landfall flag on its last record.
pub const LANDFALL_STORM: &str = "\
AL011851,            UNNAMED,      4,
18510625, 0000,  , HU, 28.0N,  94.8W,  80, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
18510625, 0600,  , HU, 28.0N,  95.4W,  80, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
18510625, 1200,  , HU, 28.1N,  96.0W,  80, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
18510625, 2115, L, HU, 28.2N,  96.8W,  80, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
";

/// A synthetic modern storm heading due north with recorded radii.
///
/// Both post-origin observations put the largest decisive extent in the
/// NE quadrant, inside the hypothetical band for northward motion, so the
/// storm classifies (2, 2). The last line carries the optional fourth
/// radius tier.
pub const MODERN_STORM_WITH_RADII: &str = "\
AL092004,              IVANA,      3,
20040905, 0000,  , TS, 25.0N,  70.0W,  55, 1000,  120,  100,   80,   90, -999, -999, -999, -999, -999, -999, -999, -999,
20040905, 0600,  , TS, 26.0N,  70.0W,  60,  997,  150,  100,   80,   90,   50,   40,   30,   35, -999, -999, -999, -999,
20040905, 1200,  , HU, 27.0N,  70.0W,  65,  990,  150,  110,   80,   90,   60,   40,   30,   35,   25,   15,   10,   12,   20,   10,    7,    8,
";

/// A storm whose wind column is the unavailable sentinel throughout.
pub const SENTINEL_WIND_STORM: &str = "\
AL011967,            UNNAMED,      2,
19670901, 0000,  , TS, 15.0N,  45.0W, -99, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
19670901, 0600,  , TS, 15.5N,  46.0W, -99, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
";

/// Two sequential 1851 storms followed by an 1852 storm.
pub const THREE_STORM_DATASET: &str = "\
AL011851,            UNNAMED,      2,
18510625, 0000,  , HU, 28.0N,  94.8W,  80, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
18510625, 0600,  , HU, 28.0N,  95.4W,  80, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
AL021851,            UNNAMED,      1,
18510705, 1200,  , HU, 22.2N,  97.6W,  80, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
AL011852,            UNNAMED,      2,
18520819, 0000,  , TS, 24.0N,  92.0W,  50, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
18520819, 1200,  , TS, 25.0N,  92.0W,  60, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
";

/// A block whose second data line has a non-numeric wind field.
pub const MALFORMED_WIND_STORM: &str = "\
AL031851,            UNNAMED,      2,
18510710, 0000,  , TS, 30.0N,  75.0W,  50, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
18510710, 0600,  , TS, 30.5N,  75.5W,  XX, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
";
