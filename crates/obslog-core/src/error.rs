//! Error taxonomy for a pipeline run.

use thiserror::Error;

/// Errors that abort a run.
///
/// Tolerated data-shape gaps (a record without a timestamp, an empty
/// subsystem) are not errors; consumers skip those records instead.
#[derive(Debug, Error)]
pub enum Error {
    /// A line that is not a well-formed log record. Corrupt input is fatal
    /// for the whole run, in every report mode.
    #[error("malformed log record on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A zone selector naming no known IANA time zone.
    #[error("unknown time zone: {0}")]
    UnknownZone(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
