//! Error types for geodesy operations.

use thiserror::Error;

/// Result type alias using GeodesyError.
pub type GeodesyResult<T> = Result<T, GeodesyError>;

/// Errors raised by position parsing and geodesic computations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeodesyError {
    /// A hemisphere letter outside {N, E, S, W}.
    #[error("Invalid or unsupported direction '{0}'")]
    InvalidDirection(String),

    /// A coordinate field that does not parse as a number.
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Distance or bearing requested between coincident positions.
    ///
    /// The inverse geodesic solution is undefined at zero separation.
    /// Callers working per track segment substitute 0 for this case.
    #[error("Geodesic is undefined for coincident positions")]
    DegenerateInput,

    /// The inverse solution failed to converge (nearly antipodal pair).
    #[error("Geodesic solution did not converge")]
    NoConvergence,
}
