//! Static line and place catalogs.
//!
//! The catalogs are produced offline (see [`crate::transform`]) and loaded
//! once at startup. After loading they are read-only.

mod dto;
mod error;

use std::collections::HashSet;
use std::path::Path;

pub use dto::{LineDto, PlaceDto, StationDto};
pub use error::CatalogError;

use crate::domain::{Line, Place, Station, StationId};

/// Loaded lines and places.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    lines: Vec<Line>,
    places: Vec<Place>,
}

impl Catalog {
    /// Build a catalog from already-parsed documents.
    pub fn from_dtos(lines: Vec<LineDto>, places: Vec<PlaceDto>) -> Result<Self, CatalogError> {
        let lines = lines
            .into_iter()
            .map(convert_line)
            .collect::<Result<Vec<_>, _>>()?;

        let places = places
            .into_iter()
            .map(convert_place)
            .collect::<Result<Vec<_>, _>>()?;
        let catalog = Self { lines, places };

        let known: HashSet<&StationId> = catalog.stations().map(|s| &s.id).collect();
        let unknown = catalog
            .places
            .iter()
            .filter(|p| p.mrt_station.as_ref().is_some_and(|s| !known.contains(s)))
            .count();
        if unknown > 0 {
            tracing::warn!(
                count = unknown,
                "places reference stations missing from the lines document"
            );
        }

        Ok(catalog)
    }

    /// Parse a catalog from the JSON text of both documents.
    pub fn from_documents(lines_json: &str, places_json: &str) -> Result<Self, CatalogError> {
        let lines: Vec<LineDto> =
            serde_json::from_str(lines_json).map_err(|source| CatalogError::Json {
                document: "lines",
                source,
            })?;
        let places: Vec<PlaceDto> =
            serde_json::from_str(places_json).map_err(|source| CatalogError::Json {
                document: "places",
                source,
            })?;
        Self::from_dtos(lines, places)
    }

    /// Load a catalog from the two documents on disk.
    pub fn load(lines_path: &Path, places_path: &Path) -> Result<Self, CatalogError> {
        let read = |path: &Path| {
            std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })
        };
        let catalog = Self::from_documents(&read(lines_path)?, &read(places_path)?)?;
        tracing::info!(
            lines = catalog.lines.len(),
            places = catalog.places.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// All lines, in document order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// All places, in document order.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// All stations, line by line.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.lines.iter().flat_map(|l| l.stations.iter())
    }

    /// Find a station by code. The first line listing it wins.
    pub fn station(&self, id: &StationId) -> Option<&Station> {
        self.lines.iter().find_map(|l| l.station(id))
    }

    /// Look up a station's display name.
    ///
    /// A linear scan over every line; the catalog is small and static.
    pub fn station_name(&self, id: &StationId) -> Option<&str> {
        self.station(id).map(|s| s.name.as_str())
    }
}

fn convert_line(dto: LineDto) -> Result<Line, CatalogError> {
    let stations = dto
        .stations
        .into_iter()
        .map(|s| {
            let id = StationId::parse(&s.id).map_err(|source| CatalogError::InvalidStation {
                line: dto.id.clone(),
                source,
            })?;
            Ok(Station {
                id,
                name: s.name,
                line_id: dto.id.clone(),
            })
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;

    Ok(Line {
        id: dto.id,
        name: dto.name,
        color: dto.color,
        stations,
    })
}

fn convert_place(dto: PlaceDto) -> Result<Place, CatalogError> {
    if !dto.rating.is_finite() {
        return Err(CatalogError::InvalidRating {
            place_id: dto.id,
            rating: dto.rating,
        });
    }

    let mrt_station = match StationId::parse(&dto.mrt_station) {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::warn!(place = %dto.id, error = %e, "place has no usable station");
            None
        }
    };

    let mut tags = dto.tags;
    if tags.len() > Place::MAX_TAGS {
        tracing::debug!(place = %dto.id, count = tags.len(), "truncating tags");
        tags.truncate(Place::MAX_TAGS);
    }

    Ok(Place {
        id: dto.id,
        name: dto.name,
        mrt_station,
        main_category: dto.main_category,
        sub_category: dto.sub_category,
        rating: dto.rating,
        accessibility: dto.accessibility,
        image: dto.image,
        distance: dto.distance,
        tags,
    })
}
