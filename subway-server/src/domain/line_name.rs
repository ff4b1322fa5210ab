//! Line name type.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

use super::station::validate_name;

/// Error returned when parsing an invalid line name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line name: {reason}")]
pub struct InvalidLineName {
    reason: &'static str,
}

/// The name a line is registered under (e.g. "2호선").
///
/// Follows the same rules as station names: trimmed, at least two characters.
///
/// # Examples
///
/// ```
/// use subway_server::domain::LineName;
///
/// let line = LineName::parse("신분당선").unwrap();
/// assert_eq!(line.as_str(), "신분당선");
/// assert!(LineName::parse("2").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LineName(String);

impl LineName {
    /// Parse a line name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidLineName> {
        validate_name(s)
            .map(|name| LineName(name.to_string()))
            .map_err(|reason| InvalidLineName { reason })
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LineName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineName({})", self.0)
    }
}

impl fmt::Display for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert_eq!(LineName::parse("2호선").unwrap().as_str(), "2호선");
        assert_eq!(LineName::parse(" 3호선 ").unwrap().as_str(), "3호선");
    }

    #[test]
    fn reject_short() {
        assert!(LineName::parse("").is_err());
        assert!(LineName::parse("선").is_err());
    }

    #[test]
    fn error_display() {
        let err = LineName::parse("").unwrap_err();
        assert_eq!(err.to_string(), "invalid line name: name cannot be empty");
    }
}
