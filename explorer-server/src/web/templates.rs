//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{FOOD_FILTER_SUB_CATEGORIES, Line, MainCategory, Place};
use crate::links::maps_search_url;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the station selector and filters.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub lines: Vec<LineView>,
    pub categories: Vec<CategoryChip>,
    pub sub_categories: Vec<CategoryChip>,
}

impl IndexTemplate {
    /// Build the page for the given lines.
    pub fn new(lines: &[Line]) -> Self {
        Self {
            lines: lines.iter().map(LineView::from_line).collect(),
            categories: CategoryChip::categories(),
            sub_categories: CategoryChip::food_sub_categories(),
        }
    }
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Place list fragment for a station.
#[derive(Template)]
#[template(path = "place_list.html")]
pub struct PlaceListTemplate {
    /// Whether a station is selected at all.
    pub has_station: bool,

    /// Display name of the station, or its code when the name is unknown.
    pub station_name: String,

    pub places: Vec<PlaceView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Line view model: an optgroup in the station selector.
#[derive(Debug, Clone)]
pub struct LineView {
    pub name: String,
    pub color: String,
    pub stations: Vec<StationOption>,
}

impl LineView {
    /// Create from a domain Line.
    pub fn from_line(line: &Line) -> Self {
        Self {
            name: line.name.clone(),
            color: line.color.clone(),
            stations: line
                .stations
                .iter()
                .map(|s| StationOption {
                    id: s.id.to_string(),
                    name: s.name.clone(),
                })
                .collect(),
        }
    }
}

/// A station option in the selector.
#[derive(Debug, Clone)]
pub struct StationOption {
    pub id: String,
    pub name: String,
}

/// A filter chip.
#[derive(Debug, Clone)]
pub struct CategoryChip {
    /// Value sent back in the request.
    pub id: String,
    pub label: String,
    pub icon: String,
}

impl CategoryChip {
    /// The main category chips, "All" first.
    pub fn categories() -> Vec<Self> {
        let all = CategoryChip {
            id: "All".to_string(),
            label: "全部".to_string(),
            icon: "🔍".to_string(),
        };
        std::iter::once(all)
            .chain(MainCategory::ALL.iter().map(|c| CategoryChip {
                id: c.as_str().to_string(),
                label: c.label().to_string(),
                icon: c.icon().to_string(),
            }))
            .collect()
    }

    /// The Food sub-category chips.
    pub fn food_sub_categories() -> Vec<Self> {
        FOOD_FILTER_SUB_CATEGORIES
            .iter()
            .map(|s| CategoryChip {
                id: s.as_str().to_string(),
                label: s.label().to_string(),
                icon: String::new(),
            })
            .collect()
    }
}

/// Place card view model.
#[derive(Debug, Clone)]
pub struct PlaceView {
    pub name: String,
    pub image: String,
    pub rating: String,
    pub is_accessible: bool,
    pub distance: String,
    pub category: String,
    pub tags: Vec<String>,
    pub maps_url: String,
}

impl PlaceView {
    /// Create from a domain Place.
    pub fn from_place(place: &Place) -> Self {
        Self {
            name: place.name.clone(),
            image: place.image.clone(),
            rating: place.rating.to_string(),
            is_accessible: place.accessibility,
            distance: place.distance.clone(),
            category: place.display_category().to_string(),
            tags: place.tags.clone(),
            maps_url: maps_search_url(&place.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StationId, SubCategory};

    fn place() -> Place {
        Place {
            id: "osm1".into(),
            name: "寧夏夜市".into(),
            mrt_station: StationId::parse("G13").ok(),
            main_category: MainCategory::Food,
            sub_category: Some(SubCategory::NightMarket),
            rating: 5.0,
            accessibility: true,
            image: "https://img/x.jpg".into(),
            distance: "步行 6 分鐘".into(),
            tags: vec!["夜市".into()],
        }
    }

    #[test]
    fn category_chips() {
        let chips = CategoryChip::categories();
        let ids: Vec<&str> = chips.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["All", "Food", "Culture", "Shopping", "Leisure"]);

        let subs = CategoryChip::food_sub_categories();
        assert_eq!(subs.len(), 6);
        assert_eq!(subs[3].label, "火鍋");
    }

    #[test]
    fn place_view() {
        let view = PlaceView::from_place(&place());
        assert_eq!(view.rating, "5");
        assert_eq!(view.category, "NightMarket");
        assert!(view.maps_url.starts_with("https://www.google.com/maps/search/"));
    }

    #[test]
    fn place_list_renders_cards() {
        let html = PlaceListTemplate {
            has_station: true,
            station_name: "雙連".into(),
            places: vec![PlaceView::from_place(&place())],
        }
        .render()
        .unwrap();

        assert!(html.contains("雙連"));
        assert!(html.contains("寧夏夜市"));
        assert!(html.contains("#夜市"));
        assert!(html.contains("♿"));
    }

    #[test]
    fn place_list_empty_state() {
        let html = PlaceListTemplate {
            has_station: true,
            station_name: "雙連".into(),
            places: vec![],
        }
        .render()
        .unwrap();

        assert!(html.contains("找不到相關地點"));
    }

    #[test]
    fn place_list_welcome_state() {
        let html = PlaceListTemplate {
            has_station: false,
            station_name: String::new(),
            places: vec![],
        }
        .render()
        .unwrap();

        assert!(html.contains("請選擇一個捷運站開始探索"));
    }

    #[test]
    fn index_lists_lines() {
        let line = Line {
            id: "R".into(),
            name: "淡水信義線 (紅線)".into(),
            color: "#E3002C".into(),
            stations: vec![crate::domain::Station {
                id: StationId::parse("R10").unwrap(),
                name: "台北車站".into(),
                line_id: "R".into(),
            }],
        };

        let html = IndexTemplate::new(&[line]).render().unwrap();
        assert!(html.contains("淡水信義線 (紅線)"));
        assert!(html.contains("value=\"R10\""));
        assert!(html.contains("R10 - 台北車站"));
    }
}
