//! Registry of known stations.

use std::collections::HashSet;

use tracing::info;

use crate::domain::{Station, StationName};

/// The set of stations known to the network.
///
/// Section lists consult the registry for existence checks only; it is
/// passed to them explicitly rather than held as global state.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    names: HashSet<StationName>,
}

impl StationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station.
    ///
    /// Returns `true` if the station was newly registered, `false` if a
    /// station with the same name already existed (the registry is unchanged).
    pub fn add_station(&mut self, station: Station) -> bool {
        let name = station.name().clone();
        let inserted = self.names.insert(name);
        if inserted {
            info!(station = %station.name(), "registered station");
        }
        inserted
    }

    /// Check whether a station with this name is registered.
    ///
    /// Surrounding whitespace is ignored, matching [`StationName::parse`].
    pub fn exists(&self, name: &str) -> bool {
        self.names.contains(name.trim())
    }

    /// Look up the registered name matching `name`, ignoring surrounding
    /// whitespace.
    pub fn get(&self, name: &str) -> Option<&StationName> {
        self.names.get(name.trim())
    }

    /// All registered station names, sorted.
    pub fn names(&self) -> Vec<&StationName> {
        let mut names: Vec<_> = self.names.iter().collect();
        names.sort();
        names
    }

    /// Returns the number of registered stations.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no stations are registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(name: &str) -> Station {
        Station::new(StationName::parse(name).unwrap())
    }

    #[test]
    fn empty_registry() {
        let registry = StationRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.exists("강남역"));
    }

    #[test]
    fn registered_station_exists() {
        let mut registry = StationRegistry::new();
        assert!(registry.add_station(station("강남역")));

        assert!(registry.exists("강남역"));
        assert!(!registry.exists("교대역"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_registration_is_ignored() {
        let mut registry = StationRegistry::new();
        assert!(registry.add_station(station("강남역")));
        assert!(!registry.add_station(station("강남역")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn get_returns_registered_name() {
        let mut registry = StationRegistry::new();
        registry.add_station(station("양재역"));

        assert_eq!(registry.get("양재역").map(StationName::as_str), Some("양재역"));
        assert!(registry.get("매봉역").is_none());
    }

    #[test]
    fn lookups_ignore_surrounding_whitespace() {
        let mut registry = StationRegistry::new();
        registry.add_station(station(" 선릉역 "));

        assert!(registry.exists("선릉역"));
        assert!(registry.exists(" 선릉역 "));
        assert_eq!(registry.get("\t선릉역 ").map(StationName::as_str), Some("선릉역"));
        assert!(!registry.exists("선릉"));
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = StationRegistry::new();
        registry.add_station(station("Victoria"));
        registry.add_station(station("Bank"));
        registry.add_station(station("Euston"));

        let names: Vec<_> = registry.names().into_iter().map(StationName::as_str).collect();
        assert_eq!(names, vec!["Bank", "Euston", "Victoria"]);
    }
}
