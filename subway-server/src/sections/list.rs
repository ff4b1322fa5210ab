//! The section list: a line's stations in travel order.

use tracing::debug;

use super::error::SectionError;
use crate::domain::StationName;
use crate::stations::StationRegistry;

/// A line can never be shortened below this many stations.
pub const MIN_SECTION_LEN: usize = 2;

/// Stations of one line, ordered from up terminus to down terminus.
///
/// Invariants maintained by [`add_section`](Self::add_section) and
/// [`delete_section`](Self::delete_section):
/// - every added station is registered,
/// - no station appears twice,
/// - a deletion never takes the list below [`MIN_SECTION_LEN`].
///
/// The initial sequence passed to [`new`](Self::new) is trusted and not
/// re-validated.
///
/// # Examples
///
/// ```
/// use subway_server::domain::{Station, StationName};
/// use subway_server::sections::SectionList;
/// use subway_server::stations::StationRegistry;
///
/// let name = |s: &str| StationName::parse(s).unwrap();
///
/// let mut registry = StationRegistry::new();
/// for s in ["강남역", "교대역", "역삼역"] {
///     registry.add_station(Station::new(name(s)));
/// }
///
/// let mut line = SectionList::new([name("교대역"), name("역삼역")]);
/// line.add_section(&registry, "강남역", 2).unwrap();
///
/// let stations: Vec<_> = line.get_sections().iter().map(|s| s.as_str()).collect();
/// assert_eq!(stations, ["교대역", "강남역", "역삼역"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionList {
    stations: Vec<StationName>,
}

impl SectionList {
    /// Create a section list seeded with `stations` in order.
    pub fn new(stations: impl IntoIterator<Item = StationName>) -> Self {
        Self {
            stations: stations.into_iter().collect(),
        }
    }

    /// Insert a registered station at a 1-based `position`.
    ///
    /// Position 1 makes the station the new up terminus, `len() + 1` makes it
    /// the new down terminus, and anything in between shifts later stations
    /// towards the down end.
    ///
    /// Checks, in order: the station is registered, it is not already on the
    /// line, and the position is within `1..=len() + 1`.
    pub fn add_section(
        &mut self,
        registry: &StationRegistry,
        name: &str,
        position: i64,
    ) -> Result<(), SectionError> {
        let not_registered = || SectionError::NotExistingStation(name.to_string());
        if !registry.exists(name) {
            return Err(not_registered());
        }
        let station = registry.get(name).ok_or_else(not_registered)?;

        if self.contains(name) {
            return Err(SectionError::DuplicatedStation(station.clone()));
        }

        let index = self.insert_index(position)?;
        debug!(station = %station, position, "adding section");
        self.stations.insert(index, station.clone());
        Ok(())
    }

    /// Remove a station from the line.
    ///
    /// Removing a terminus promotes its neighbour to terminus; removing an
    /// interior station joins its two neighbours.
    pub fn delete_section(&mut self, name: &str) -> Result<(), SectionError> {
        let index = self
            .index_of(name)
            .ok_or_else(|| SectionError::StationNotInSection(name.to_string()))?;

        if self.stations.len() <= MIN_SECTION_LEN {
            return Err(SectionError::SectionsSizeUnderTwo {
                len: self.stations.len(),
            });
        }

        let removed = self.stations.remove(index);
        debug!(station = %removed, remaining = self.stations.len(), "deleted section");
        Ok(())
    }

    /// The stations in order, up terminus first.
    pub fn get_sections(&self) -> &[StationName] {
        &self.stations
    }

    /// The first station of the line.
    pub fn up_terminus(&self) -> Option<&StationName> {
        self.stations.first()
    }

    /// The last station of the line.
    pub fn down_terminus(&self) -> Option<&StationName> {
        self.stations.last()
    }

    /// Check whether a station is on the line.
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Returns the number of stations on the line.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the line has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.stations.iter().position(|s| s.as_str() == name)
    }

    /// Convert a 1-based position into a `Vec` index, rejecting anything
    /// outside `1..=len + 1`.
    fn insert_index(&self, position: i64) -> Result<usize, SectionError> {
        let len = self.stations.len();
        usize::try_from(position)
            .ok()
            .filter(|p| (1..=len + 1).contains(p))
            .map(|p| p - 1)
            .ok_or(SectionError::InvalidPosition { position, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Station;

    fn name(s: &str) -> StationName {
        StationName::parse(s).unwrap()
    }

    fn registry(names: &[&str]) -> StationRegistry {
        let mut registry = StationRegistry::new();
        for n in names {
            registry.add_station(Station::new(name(n)));
        }
        registry
    }

    fn sections(names: &[&str]) -> SectionList {
        SectionList::new(names.iter().map(|n| name(n)))
    }

    fn as_strs(list: &SectionList) -> Vec<&str> {
        list.get_sections().iter().map(StationName::as_str).collect()
    }

    const LINE_2: [&str; 5] = ["강남역", "교대역", "삼성역", "서초역", "방배역"];

    #[test]
    fn unregistered_station_cannot_be_added() {
        let registry = StationRegistry::new();
        let mut list = SectionList::default();

        let err = list.add_section(&registry, "등록되지않은역", 0).unwrap_err();
        assert_eq!(
            err,
            SectionError::NotExistingStation("등록되지않은역".to_string())
        );
    }

    #[test]
    fn registration_is_checked_before_position() {
        let registry = registry(&["강남역"]);
        let mut list = sections(&["강남역"]);

        // Both unregistered and out of range: registration wins
        let err = list.add_section(&registry, "교대역", 99).unwrap_err();
        assert!(matches!(err, SectionError::NotExistingStation(_)));
    }

    #[test]
    fn station_already_on_line_cannot_be_added() {
        let registry = registry(&["강남역", "교대역"]);
        let mut list = sections(&["강남역", "교대역"]);

        let err = list.add_section(&registry, "강남역", 0).unwrap_err();
        assert_eq!(err, SectionError::DuplicatedStation(name("강남역")));
        assert_eq!(as_strs(&list), ["강남역", "교대역"]);
    }

    #[test]
    fn position_must_be_within_line_bounds() {
        let registry = registry(&["강남역"]);
        let mut list = SectionList::default();

        let err = list.add_section(&registry, "강남역", 3).unwrap_err();
        assert_eq!(
            err,
            SectionError::InvalidPosition {
                position: 3,
                len: 0
            }
        );

        let err = list.add_section(&registry, "강남역", -1).unwrap_err();
        assert_eq!(
            err,
            SectionError::InvalidPosition {
                position: -1,
                len: 0
            }
        );

        let err = list.add_section(&registry, "강남역", 0).unwrap_err();
        assert!(matches!(err, SectionError::InvalidPosition { .. }));
        assert!(list.is_empty());
    }

    #[test]
    fn position_one_is_valid_on_empty_line() {
        let registry = registry(&["강남역"]);
        let mut list = SectionList::default();

        list.add_section(&registry, "강남역", 1).unwrap();
        assert_eq!(as_strs(&list), ["강남역"]);
    }

    #[test]
    fn add_at_first_position_becomes_up_terminus() {
        let registry = registry(&["강남역", "교대역", "역삼역"]);
        let mut list = sections(&["강남역", "역삼역"]);

        list.add_section(&registry, "교대역", 1).unwrap();
        assert_eq!(list.up_terminus(), Some(&name("교대역")));
        assert_eq!(as_strs(&list), ["교대역", "강남역", "역삼역"]);
    }

    #[test]
    fn add_after_last_becomes_down_terminus() {
        let registry = registry(&["강남역", "교대역", "역삼역"]);
        let mut list = sections(&["교대역", "강남역"]);

        list.add_section(&registry, "역삼역", 3).unwrap();
        assert_eq!(list.down_terminus(), Some(&name("역삼역")));
        assert_eq!(as_strs(&list), ["교대역", "강남역", "역삼역"]);
    }

    #[test]
    fn add_in_middle_shifts_later_stations() {
        let registry = registry(&["교대역", "남부터미널역", "양재역", "매봉역"]);
        let mut list = sections(&["교대역", "양재역", "매봉역"]);

        list.add_section(&registry, "남부터미널역", 2).unwrap();
        assert_eq!(as_strs(&list), ["교대역", "남부터미널역", "양재역", "매봉역"]);
    }

    #[test]
    fn deleting_station_not_on_line_fails() {
        let mut list = SectionList::default();

        let err = list.delete_section("삼성역").unwrap_err();
        assert_eq!(err, SectionError::StationNotInSection("삼성역".to_string()));
    }

    #[test]
    fn line_with_two_stations_cannot_shrink() {
        let mut list = sections(&["강남역", "교대역"]);

        let err = list.delete_section("교대역").unwrap_err();
        assert_eq!(err, SectionError::SectionsSizeUnderTwo { len: 2 });
        assert_eq!(as_strs(&list), ["강남역", "교대역"]);
    }

    #[test]
    fn membership_is_checked_before_size() {
        let mut list = sections(&["강남역", "교대역"]);

        let err = list.delete_section("삼성역").unwrap_err();
        assert!(matches!(err, SectionError::StationNotInSection(_)));
    }

    #[test]
    fn deleting_down_terminus_promotes_previous_station() {
        let mut list = sections(&LINE_2);

        list.delete_section("방배역").unwrap();
        assert_eq!(list.down_terminus(), Some(&name("서초역")));
        assert_eq!(as_strs(&list), ["강남역", "교대역", "삼성역", "서초역"]);
    }

    #[test]
    fn deleting_up_terminus_promotes_next_station() {
        let mut list = sections(&LINE_2);

        list.delete_section("강남역").unwrap();
        assert_eq!(list.up_terminus(), Some(&name("교대역")));
        assert_eq!(as_strs(&list), ["교대역", "삼성역", "서초역", "방배역"]);
    }

    #[test]
    fn deleting_interior_station_joins_neighbours() {
        let mut list = sections(&LINE_2);

        list.delete_section("삼성역").unwrap();
        assert_eq!(as_strs(&list), ["강남역", "교대역", "서초역", "방배역"]);
    }

    #[test]
    fn line_can_shrink_down_to_two_stations() {
        let mut list = sections(&["강남역", "교대역", "삼성역"]);

        list.delete_section("교대역").unwrap();
        assert_eq!(list.len(), MIN_SECTION_LEN);
        assert!(list.delete_section("강남역").is_err());
    }

    #[test]
    fn padded_names_match_registered_station() {
        let registry = registry(&["교대역", "강남역", "역삼역", "선릉역"]);
        let mut list = sections(&["교대역", "강남역", "역삼역"]);

        list.add_section(&registry, " 선릉역 ", 4).unwrap();
        assert_eq!(as_strs(&list), ["교대역", "강남역", "역삼역", "선릉역"]);

        let err = list.add_section(&registry, "선릉역\t", 1).unwrap_err();
        assert_eq!(err, SectionError::DuplicatedStation(name("선릉역")));

        list.delete_section(" 선릉역 ").unwrap();
        assert!(!list.contains("선릉역"));
    }

    #[test]
    fn seeded_list_is_not_revalidated() {
        // Seeding is trusted, even with stations the registry never saw
        let list = sections(&["강남역", "교대역"]);
        assert!(list.contains("강남역"));
        assert_eq!(list.len(), 2);
    }
}
