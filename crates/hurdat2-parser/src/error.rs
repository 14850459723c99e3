//! Error types for HURDAT2 parsing.

use thiserror::Error;

/// Result type alias using Hurdat2Error.
pub type Hurdat2Result<T> = Result<T, Hurdat2Error>;

/// Errors that can occur while reading a best-track dataset.
#[derive(Debug, Error)]
pub enum Hurdat2Error {
    /// A header line without the expected `ID,NAME,COUNT,` shape.
    #[error("Malformed header line: '{0}'")]
    InvalidHeader(String),

    /// A data line that fails field parsing, with the storm it belongs to
    /// and its 1-based offset within the storm's block.
    #[error("Malformed record for {storm_id} at data line {line}: {reason}")]
    MalformedRecord {
        storm_id: String,
        line: usize,
        reason: String,
    },

    /// Lookup-mode identifier absent from the remainder of the stream.
    ///
    /// A user-facing, recoverable condition - the caller reports it and
    /// carries on, it is not a crash.
    #[error("No storm with ID {0} in the dataset")]
    StormNotFound(String),

    #[error("Failed to read from dataset: {0}")]
    Io(#[from] std::io::Error),
}
