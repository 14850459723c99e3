//! Ellipsoidal-earth geodesy primitives.
//!
//! Implements the two geodesic operations the track analysis needs -
//! great-circle distance and initial compass bearing between positions on
//! the WGS84 reference ellipsoid - from scratch, without external
//! dependencies, plus the longitude-normalization rules used when parsing
//! best-track coordinate fields.

pub mod error;
pub mod position;
pub mod vincenty;

pub use error::{GeodesyError, GeodesyResult};
pub use position::{flip_direction, normalize_longitude, Position};
pub use vincenty::{distance_nm, initial_bearing};
