//! Grouping of raw stations into lines.

use crate::catalog::{LineDto, StationDto};
use crate::domain::StationId;

use super::raw::RawStation;

/// A line the selector offers: code, display name, colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

/// Taipei Metro lines, in selector order.
pub const TAIPEI_LINES: [LineInfo; 6] = [
    LineInfo {
        id: "R",
        name: "淡水信義線 (紅線)",
        color: "#E3002C",
    },
    LineInfo {
        id: "BL",
        name: "板南線 (藍線)",
        color: "#005EB8",
    },
    LineInfo {
        id: "G",
        name: "松山新店線 (綠線)",
        color: "#008659",
    },
    LineInfo {
        id: "O",
        name: "中和新蘆線 (橘線)",
        color: "#F8B61C",
    },
    LineInfo {
        id: "BR",
        name: "文湖線 (棕線)",
        color: "#C48C31",
    },
    LineInfo {
        id: "Y",
        name: "環狀線 (黃線)",
        color: "#FFDB00",
    },
];

/// Group stations into the lines document.
///
/// Stations are assigned by the letter prefix of their code and keep their
/// input order within a line. Stations with malformed codes or on lines not
/// in `lines` are dropped; lines without stations are omitted.
pub fn group_stations(stations: &[RawStation], lines: &[LineInfo]) -> Vec<LineDto> {
    let mut grouped: Vec<LineDto> = lines
        .iter()
        .map(|info| LineDto {
            id: info.id.to_string(),
            name: info.name.to_string(),
            color: info.color.to_string(),
            stations: Vec::new(),
        })
        .collect();

    for station in stations {
        let Ok(id) = StationId::parse(&station.station_code) else {
            tracing::debug!(code = %station.station_code, "skipping malformed station code");
            continue;
        };
        let Some(line) = grouped.iter_mut().find(|l| l.id == id.line_code()) else {
            tracing::debug!(code = %id, "skipping station on unlisted line");
            continue;
        };
        line.stations.push(StationDto {
            id: id.to_string(),
            name: station.station_name.clone(),
        });
    }

    grouped.retain(|l| !l.stations.is_empty());
    grouped
}
