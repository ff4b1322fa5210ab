//! Line management error types.

use crate::domain::{LineName, StationName};
use crate::sections::SectionError;

/// Errors raised when managing lines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// A line with this name already exists
    #[error("line {0} already exists")]
    DuplicatedLine(LineName),

    /// No line with this name exists
    #[error("line {0} does not exist")]
    LineNotFound(String),

    /// Up and down terminus are the same station
    #[error("up and down terminus must differ (both are {0})")]
    SameTermini(StationName),

    /// A section operation on the line failed
    #[error(transparent)]
    Section(#[from] SectionError),
}
