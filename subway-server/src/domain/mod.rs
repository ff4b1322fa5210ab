//! Domain types for the subway map.
//!
//! Names are validated at construction time, so code that receives a
//! `StationName` or `LineName` can trust it is well formed.

mod line_name;
mod station;

pub use line_name::{InvalidLineName, LineName};
pub use station::{InvalidStationName, Station, StationName};
