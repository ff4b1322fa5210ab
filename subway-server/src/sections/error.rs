//! Section list error types.

use crate::domain::StationName;

/// Errors raised when a section operation violates a line invariant.
///
/// These are all caller-input validation failures: retrying without
/// changing the input will fail the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    /// The station to add is not registered
    #[error("station {0} is not registered")]
    NotExistingStation(String),

    /// The station to add is already on the line
    #[error("station {0} is already on this line")]
    DuplicatedStation(StationName),

    /// Insert position outside `1..=len + 1`
    #[error("invalid position {position}: must be between 1 and {}", .len + 1)]
    InvalidPosition { position: i64, len: usize },

    /// The station to delete is not on the line
    #[error("station {0} is not on this line")]
    StationNotInSection(String),

    /// Deleting would leave fewer than two stations
    #[error("cannot remove a station from a line with {len} stations; a line needs at least 2")]
    SectionsSizeUnderTwo { len: usize },
}
