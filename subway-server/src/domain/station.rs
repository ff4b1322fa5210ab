//! Station name and station record types.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// Minimum number of characters in a station or line name.
pub(crate) const MIN_NAME_CHARS: usize = 2;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// Checks the rules shared by station and line names, returning the trimmed name.
pub(crate) fn validate_name(s: &str) -> Result<&str, &'static str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("name cannot be empty");
    }
    if trimmed.chars().count() < MIN_NAME_CHARS {
        return Err("name must be at least 2 characters");
    }
    Ok(trimmed)
}

/// The name a station is registered under.
///
/// Names are trimmed and must be at least two characters long. Station
/// names are the identity of a station: two stations with the same name
/// are the same station.
///
/// # Examples
///
/// ```
/// use subway_server::domain::StationName;
///
/// let gangnam = StationName::parse(" 강남역 ").unwrap();
/// assert_eq!(gangnam.as_str(), "강남역");
///
/// // Too short
/// assert!(StationName::parse("역").is_err());
/// assert!(StationName::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationName(String);

impl StationName {
    /// Parse a station name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStationName> {
        validate_name(s)
            .map(|name| StationName(name.to_string()))
            .map_err(|reason| InvalidStationName { reason })
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the StationName and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Borrow<str> for StationName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    name: StationName,
}

impl Station {
    pub fn new(name: StationName) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &StationName {
        &self.name
    }
}

impl From<StationName> for Station {
    fn from(name: StationName) -> Self {
        Self::new(name)
    }
}
