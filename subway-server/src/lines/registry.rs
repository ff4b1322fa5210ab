//! Lines and the line registry.

use std::collections::BTreeMap;

use tracing::info;

use super::error::LineError;
use crate::domain::LineName;
use crate::sections::{SectionError, SectionList};
use crate::stations::StationRegistry;

/// A named line and the stations it runs through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    name: LineName,
    sections: SectionList,
}

impl Line {
    /// Create a line from an already-ordered section list.
    pub fn new(name: LineName, sections: SectionList) -> Self {
        Self { name, sections }
    }

    pub fn name(&self) -> &LineName {
        &self.name
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut SectionList {
        &mut self.sections
    }
}

/// All lines on the network, keyed by name.
///
/// A station may appear on any number of lines; each line's sections are
/// validated independently.
#[derive(Debug, Clone, Default)]
pub struct LineRegistry {
    lines: BTreeMap<LineName, Line>,
}

impl LineRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new line running from `up_terminus` to `down_terminus`.
    ///
    /// Both termini must be registered stations and must differ.
    pub fn add_line(
        &mut self,
        stations: &StationRegistry,
        name: LineName,
        up_terminus: &str,
        down_terminus: &str,
    ) -> Result<&Line, LineError> {
        if self.lines.contains_key(&name) {
            return Err(LineError::DuplicatedLine(name));
        }

        let up = stations
            .get(up_terminus)
            .ok_or_else(|| SectionError::NotExistingStation(up_terminus.to_string()))?;
        let down = stations
            .get(down_terminus)
            .ok_or_else(|| SectionError::NotExistingStation(down_terminus.to_string()))?;
        if up == down {
            return Err(LineError::SameTermini(up.clone()));
        }

        info!(line = %name, up = %up, down = %down, "registered line");
        let line = Line::new(name.clone(), SectionList::new([up.clone(), down.clone()]));
        Ok(&*self.lines.entry(name).or_insert(line))
    }

    /// Remove a line, returning it.
    pub fn remove_line(&mut self, name: &str) -> Result<Line, LineError> {
        let line = self
            .lines
            .remove(name)
            .ok_or_else(|| LineError::LineNotFound(name.to_string()))?;
        info!(line = %line.name(), "removed line");
        Ok(line)
    }

    pub fn get(&self, name: &str) -> Option<&Line> {
        self.lines.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Line> {
        self.lines.get_mut(name)
    }

    /// Iterate over lines in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if there are no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
