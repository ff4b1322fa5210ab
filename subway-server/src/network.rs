//! The served network: registered stations plus the lines built on them.

use tracing::info;

use crate::domain::{InvalidLineName, InvalidStationName, LineName, Station, StationName};
use crate::lines::{Line, LineError, LineRegistry};
use crate::stations::StationRegistry;

/// Reference stations loaded by [`Network::seeded`].
const SEED_STATIONS: [&str; 7] = [
    "교대역",
    "강남역",
    "역삼역",
    "남부터미널역",
    "양재역",
    "양재시민의숲역",
    "매봉역",
];

/// Reference lines loaded by [`Network::seeded`], up terminus first.
const SEED_LINES: [(&str, &[&str]); 3] = [
    ("2호선", &["교대역", "강남역", "역삼역"]),
    ("3호선", &["교대역", "남부터미널역", "양재역", "매봉역"]),
    ("신분당선", &["강남역", "양재역", "양재시민의숲역"]),
];

/// Errors loading the reference data set.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    StationName(#[from] InvalidStationName),

    #[error(transparent)]
    LineName(#[from] InvalidLineName),

    #[error("seed line {0} needs at least two stations")]
    ShortLine(&'static str),

    #[error(transparent)]
    Line(#[from] LineError),
}

/// Stations and lines served by one process.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: StationRegistry,
    lines: LineRegistry,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a network holding the reference stations and lines.
    pub fn seeded() -> Result<Self, SeedError> {
        let mut network = Self::new();

        for name in SEED_STATIONS {
            network.register_station(StationName::parse(name)?);
        }

        for (line, stops) in SEED_LINES {
            let [up, interior @ .., down] = stops else {
                return Err(SeedError::ShortLine(line));
            };
            network.add_line(LineName::parse(line)?, up, down)?;

            // Interior stops go in order between the termini
            for (offset, stop) in interior.iter().enumerate() {
                network.add_section(line, stop, offset as i64 + 2)?;
            }
        }

        info!(
            stations = network.stations.len(),
            lines = network.lines.len(),
            "loaded seed network"
        );
        Ok(network)
    }

    pub fn stations(&self) -> &StationRegistry {
        &self.stations
    }

    pub fn lines(&self) -> &LineRegistry {
        &self.lines
    }

    /// Register a station. Returns `false` if it was already registered.
    pub fn register_station(&mut self, name: StationName) -> bool {
        self.stations.add_station(Station::new(name))
    }

    /// Create a line between two registered stations.
    pub fn add_line(
        &mut self,
        name: LineName,
        up_terminus: &str,
        down_terminus: &str,
    ) -> Result<&Line, LineError> {
        self.lines
            .add_line(&self.stations, name, up_terminus, down_terminus)
    }

    pub fn remove_line(&mut self, name: &str) -> Result<Line, LineError> {
        self.lines.remove_line(name)
    }

    /// Insert `station` into `line` at a 1-based position.
    pub fn add_section(
        &mut self,
        line: &str,
        station: &str,
        position: i64,
    ) -> Result<&Line, LineError> {
        let entry = self
            .lines
            .get_mut(line)
            .ok_or_else(|| LineError::LineNotFound(line.to_string()))?;
        entry
            .sections_mut()
            .add_section(&self.stations, station, position)?;
        Ok(&*entry)
    }

    /// Remove `station` from `line`.
    pub fn delete_section(&mut self, line: &str, station: &str) -> Result<&Line, LineError> {
        let entry = self
            .lines
            .get_mut(line)
            .ok_or_else(|| LineError::LineNotFound(line.to_string()))?;
        entry.sections_mut().delete_section(station)?;
        Ok(&*entry)
    }
}
