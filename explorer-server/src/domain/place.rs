//! Points of interest.

use serde::Serialize;

use super::{MainCategory, StationId, SubCategory};

/// A point of interest associated with its nearest station.
///
/// `image`, `distance` and `tags` are display strings produced upstream
/// and passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub id: String,
    pub name: String,

    /// Nearest station. `None` when upstream could not assign a
    /// well-formed station code; such places are never selected.
    pub mrt_station: Option<StationId>,

    pub main_category: MainCategory,
    pub sub_category: Option<SubCategory>,

    /// Only relied on for ordering; no range is assumed.
    pub rating: f64,

    pub accessibility: bool,
    pub image: String,

    /// Pre-formatted walking time, e.g. "步行 5 分鐘".
    pub distance: String,

    /// At most three short display tags.
    pub tags: Vec<String>,
}

impl Place {
    /// Maximum number of display tags kept per place.
    pub const MAX_TAGS: usize = 3;

    /// The category label shown on a card: the sub-category when present,
    /// otherwise the main category.
    pub fn display_category(&self) -> &str {
        match &self.sub_category {
            Some(sub) => sub.as_str(),
            None => self.main_category.as_str(),
        }
    }
}
