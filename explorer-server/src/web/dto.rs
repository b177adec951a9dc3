//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, MainCategory, Place, StationId, SubCategory};
use crate::links::maps_search_url;
use crate::selector::PlaceFilters;

/// Request to list places around a station.
///
/// Every field is optional; an empty `station` means nothing is selected.
#[derive(Debug, Default, Deserialize)]
pub struct PlacesRequest {
    /// Station code, e.g. "R10"
    pub station: Option<String>,

    /// Main category, or "All"
    pub category: Option<String>,

    /// Food sub-category (ignored for other categories)
    pub sub_category: Option<String>,

    /// Only accessible places
    #[serde(default)]
    pub accessible: bool,
}

impl PlacesRequest {
    /// The requested station, if any. Blank means none.
    pub fn station(&self) -> Result<Option<StationId>, String> {
        match self.station.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(code) => StationId::parse_normalized(code)
                .map(Some)
                .map_err(|e| e.to_string()),
        }
    }

    /// The requested filters.
    pub fn filters(&self) -> Result<PlaceFilters, String> {
        let main = match self.category.as_deref().map(str::trim) {
            None | Some("") | Some("All") => None,
            Some(name) => Some(name.parse::<MainCategory>().map_err(|e| e.to_string())?),
        };
        let sub = self
            .sub_category
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(SubCategory::from);

        Ok(PlaceFilters::from_parts(main, sub, self.accessible))
    }
}

/// A place in a places response.
///
/// Field names follow the places document.
#[derive(Debug, Serialize)]
pub struct PlaceResult {
    pub id: String,
    pub name: String,
    pub mrt_station: Option<String>,
    pub main_category: MainCategory,
    pub sub_category: Option<SubCategory>,
    pub rating: f64,
    pub accessibility: bool,
    pub image: String,
    pub distance: String,
    pub tags: Vec<String>,

    /// Google Maps search link for the place
    pub maps_url: String,
}

/// Response for a places request.
#[derive(Debug, Serialize)]
pub struct PlacesResponse {
    /// Selected station code, if any
    pub station: Option<String>,

    /// Display name of the selected station, if known
    pub station_name: Option<String>,

    /// Places, best rated first
    pub places: Vec<PlaceResult>,
}

/// A line in the lines response.
#[derive(Debug, Serialize)]
pub struct LineResult {
    pub id: String,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationResult>,
}

/// A station in the lines response.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,
    pub name: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl PlaceResult {
    /// Create from a domain Place.
    pub fn from_place(place: &Place) -> Self {
        Self {
            id: place.id.clone(),
            name: place.name.clone(),
            mrt_station: place.mrt_station.as_ref().map(|s| s.to_string()),
            main_category: place.main_category,
            sub_category: place.sub_category.clone(),
            rating: place.rating,
            accessibility: place.accessibility,
            image: place.image.clone(),
            distance: place.distance.clone(),
            tags: place.tags.clone(),
            maps_url: maps_search_url(&place.name),
        }
    }
}

impl LineResult {
    /// Create from a domain Line.
    pub fn from_line(line: &Line) -> Self {
        Self {
            id: line.id.clone(),
            name: line.name.clone(),
            color: line.color.clone(),
            stations: line
                .stations
                .iter()
                .map(|s| StationResult {
                    id: s.id.to_string(),
                    name: s.name.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::CategoryFilter;

    fn request(station: Option<&str>, category: Option<&str>, sub: Option<&str>) -> PlacesRequest {
        PlacesRequest {
            station: station.map(str::to_string),
            category: category.map(str::to_string),
            sub_category: sub.map(str::to_string),
            accessible: false,
        }
    }

    #[test]
    fn blank_station_is_none() {
        assert_eq!(request(None, None, None).station(), Ok(None));
        assert_eq!(request(Some(""), None, None).station(), Ok(None));
        assert_eq!(request(Some("  "), None, None).station(), Ok(None));
    }

    #[test]
    fn station_is_normalized() {
        let station = request(Some("bl22"), None, None).station().unwrap();
        assert_eq!(station.map(|s| s.to_string()), Some("BL22".to_string()));
    }

    #[test]
    fn malformed_station_is_rejected() {
        assert!(request(Some("Taipei"), None, None).station().is_err());
    }

    #[test]
    fn all_category_means_no_restriction() {
        for category in [None, Some(""), Some("All")] {
            let filters = request(None, category, Some("Japanese")).filters().unwrap();
            assert_eq!(filters.category, CategoryFilter::All);
        }
    }

    #[test]
    fn food_with_sub_category() {
        let filters = request(None, Some("Food"), Some("Korean")).filters().unwrap();
        assert_eq!(
            filters.category,
            CategoryFilter::Food(Some(SubCategory::Korean))
        );
    }

    #[test]
    fn sub_category_dropped_outside_food() {
        let filters = request(None, Some("Culture"), Some("Korean")).filters().unwrap();
        assert_eq!(filters.category, CategoryFilter::Culture);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = request(None, Some("Nightlife"), None).filters().unwrap_err();
        assert_eq!(err, "unknown category: Nightlife");
    }

    #[test]
    fn place_result_includes_maps_link() {
        let place = Place {
            id: "osm1".into(),
            name: "Din Tai Fung".into(),
            mrt_station: StationId::parse("R03").ok(),
            main_category: MainCategory::Food,
            sub_category: Some(SubCategory::Chinese),
            rating: 4.9,
            accessibility: true,
            image: String::new(),
            distance: "步行 3 分鐘".into(),
            tags: vec!["chinese".into()],
        };

        let result = PlaceResult::from_place(&place);
        assert_eq!(result.mrt_station.as_deref(), Some("R03"));
        assert_eq!(
            result.maps_url,
            "https://www.google.com/maps/search/?api=1&query=Din%20Tai%20Fung"
        );

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["sub_category"], "Chinese");
    }
}
