//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::lines::Line;

/// Request to register a station.
#[derive(Debug, Deserialize)]
pub struct RegisterStationRequest {
    pub name: String,
}

/// A registered station.
#[derive(Debug, Serialize, Deserialize)]
pub struct StationResponse {
    pub name: String,
}

/// All registered stations, sorted by name.
#[derive(Debug, Serialize, Deserialize)]
pub struct StationListResponse {
    pub stations: Vec<String>,
}

/// Request to create a line between two registered stations.
#[derive(Debug, Deserialize)]
pub struct CreateLineRequest {
    pub name: String,
    pub up_terminus: String,
    pub down_terminus: String,
}

/// Request to insert a station into a line.
#[derive(Debug, Deserialize)]
pub struct AddSectionRequest {
    /// Station to insert
    pub station: String,

    /// 1-based position; `len + 1` appends after the down terminus
    pub position: i64,
}

/// A line and its stations, up terminus first.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineResponse {
    pub name: String,
    pub up_terminus: Option<String>,
    pub down_terminus: Option<String>,
    pub stations: Vec<String>,
}

impl LineResponse {
    /// Convert a domain line to a response.
    pub fn from_line(line: &Line) -> Self {
        let sections = line.sections();
        Self {
            name: line.name().to_string(),
            up_terminus: sections.up_terminus().map(ToString::to_string),
            down_terminus: sections.down_terminus().map(ToString::to_string),
            stations: sections
                .get_sections()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// All lines, sorted by name.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineListResponse {
    pub lines: Vec<LineResponse>,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
