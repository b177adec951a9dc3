//! Metro lines and their stations.

use serde::Serialize;

use super::StationId;

/// A station on a line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    /// Code of the owning line, e.g. `"BL"`.
    pub line_id: String,
}

/// A metro line: an ordered sequence of stations sharing a colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub id: String,
    pub name: String,
    /// CSS colour, e.g. `"#E3002C"`.
    pub color: String,
    pub stations: Vec<Station>,
}

impl Line {
    /// Find a station on this line by code.
    pub fn station(&self, id: &StationId) -> Option<&Station> {
        self.stations.iter().find(|s| &s.id == id)
    }
}
