//! Offline data transform.
//!
//! Turns raw station and place exports into the lines and places documents
//! the server loads. Each place is assigned its nearest station, a category,
//! display tags, a walking-time label, an image and a rating.
//!
//! Fetching the raw exports is not part of this module; it only reads files
//! already on disk.

mod appraise;
mod classify;
mod config;
mod error;
mod geo;
mod lines;
mod raw;

use std::path::Path;

pub use appraise::{Appraiser, SeededAppraiser};
pub use classify::{Classification, classify_legacy, classify_osm};
pub use config::TransformConfig;
pub use error::TransformError;
pub use geo::{haversine_km, nearest_station, walking_label};
pub use lines::{LineInfo, TAIPEI_LINES, group_stations};
pub use raw::{LegacyPlace, OsmPlace, RawPlace, RawStation};

use crate::catalog::PlaceDto;
use crate::links::placeholder_image_url;

/// Station code written for places with no station in reach.
pub const UNKNOWN_STATION: &str = "Unknown";

/// Distance label written for places with no station in reach.
pub const UNKNOWN_DISTANCE: &str = "未知";

/// Transform one raw place. Returns `None` for unnamed places.
pub fn transform_place(
    raw: &RawPlace,
    stations: &[RawStation],
    appraiser: &mut impl Appraiser,
) -> Option<PlaceDto> {
    let name = raw.name()?.to_string();
    let (lat, lon) = raw.coordinates();

    // Trust a cached nearest station if it still exists.
    let cached = match raw {
        RawPlace::Osm(osm) => osm.nearest_station.as_deref().and_then(|code| {
            stations
                .iter()
                .find(|s| s.station_code == code)
                .map(|s| (s, haversine_km(lat, lon, s.lat, s.lon)))
        }),
        RawPlace::Legacy(_) => None,
    };
    let nearest = cached.or_else(|| nearest_station(stations, lat, lon));

    let classification = match raw {
        RawPlace::Osm(osm) => classify_osm(osm, &name),
        RawPlace::Legacy(legacy) => classify_legacy(legacy),
    };

    let image = match raw {
        RawPlace::Osm(osm) => osm.tag("image").map(str::to_string),
        RawPlace::Legacy(_) => None,
    }
    .unwrap_or_else(|| placeholder_image_url(&name));

    let (mrt_station, distance) = match nearest {
        Some((station, km)) => (station.station_code.clone(), walking_label(km)),
        None => (UNKNOWN_STATION.to_string(), UNKNOWN_DISTANCE.to_string()),
    };

    let mut tags = classification.tags;
    tags.truncate(crate::domain::Place::MAX_TAGS);

    Some(PlaceDto {
        id: format!("osm{}", raw.raw_id()),
        name,
        mrt_station,
        main_category: classification.main_category,
        sub_category: classification.sub_category,
        rating: appraiser.rating(),
        accessibility: appraiser.accessible(),
        image,
        distance,
        tags,
    })
}

/// Transform every raw place, dropping unnamed ones.
pub fn transform_places(
    raw: &[RawPlace],
    stations: &[RawStation],
    appraiser: &mut impl Appraiser,
) -> Vec<PlaceDto> {
    raw.iter()
        .filter_map(|p| transform_place(p, stations, appraiser))
        .collect()
}

/// Counts reported after a transform run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformSummary {
    pub lines: usize,
    pub places: usize,
    pub skipped: usize,
}

/// Read the raw exports named in `config` and write both documents.
///
/// Places are read from the OSM export, falling back to the simulated
/// dataset when the OSM export is missing or unreadable.
pub fn run(config: &TransformConfig) -> Result<TransformSummary, TransformError> {
    let stations: Vec<RawStation> = read_json(&config.raw_stations)?;

    let raw_places: Vec<RawPlace> = match read_json(&config.raw_osm_places) {
        Ok(places) => places,
        Err(e) => {
            tracing::warn!(error = %e, "could not read OSM data, falling back to simulated data");
            read_json(&config.raw_attractions)?
        }
    };

    let mut appraiser = SeededAppraiser::new(config.seed);
    let places = transform_places(&raw_places, &stations, &mut appraiser);
    let lines = group_stations(&stations, &TAIPEI_LINES);

    write_json(&config.places_out, &places)?;
    write_json(&config.lines_out, &lines)?;

    let summary = TransformSummary {
        lines: lines.len(),
        places: places.len(),
        skipped: raw_places.len() - places.len(),
    };
    tracing::info!(
        lines = summary.lines,
        places = summary.places,
        skipped = summary.skipped,
        "transform complete"
    );
    Ok(summary)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, TransformError> {
    let contents = std::fs::read_to_string(path).map_err(|source| TransformError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| TransformError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), TransformError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|source| TransformError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(value).map_err(|source| TransformError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| TransformError::Io {
        path: path.to_path_buf(),
        source,
    })
}
