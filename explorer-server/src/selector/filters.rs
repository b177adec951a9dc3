//! Filter criteria for place selection.

use std::fmt;

use crate::domain::{MainCategory, Place, SubCategory};

/// Category criterion.
///
/// A sub-category can only be expressed under Food; that is the only
/// category where it narrows the selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Food(Option<SubCategory>),
    Culture,
    Shopping,
    Leisure,
}

impl CategoryFilter {
    /// Build a category filter from its loose parts.
    ///
    /// `None` means all categories. A sub-category is dropped unless the
    /// main category is Food.
    pub fn from_parts(main: Option<MainCategory>, sub: Option<SubCategory>) -> Self {
        match main {
            None => CategoryFilter::All,
            Some(MainCategory::Food) => CategoryFilter::Food(sub),
            Some(MainCategory::Culture) => CategoryFilter::Culture,
            Some(MainCategory::Shopping) => CategoryFilter::Shopping,
            Some(MainCategory::Leisure) => CategoryFilter::Leisure,
        }
    }

    /// The main category this filter restricts to, if any.
    pub fn main_category(&self) -> Option<MainCategory> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Food(_) => Some(MainCategory::Food),
            CategoryFilter::Culture => Some(MainCategory::Culture),
            CategoryFilter::Shopping => Some(MainCategory::Shopping),
            CategoryFilter::Leisure => Some(MainCategory::Leisure),
        }
    }

    /// The sub-category in effect, if any.
    pub fn sub_category(&self) -> Option<&SubCategory> {
        match self {
            CategoryFilter::Food(sub) => sub.as_ref(),
            _ => None,
        }
    }

    /// Check a place against this filter.
    pub fn matches(&self, place: &Place) -> bool {
        if let Some(main) = self.main_category()
            && place.main_category != main
        {
            return false;
        }
        match self.sub_category() {
            Some(sub) => place.sub_category.as_ref() == Some(sub),
            None => true,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.main_category(), self.sub_category()) {
            (None, _) => f.write_str("All"),
            (Some(main), None) => write!(f, "{main}"),
            (Some(main), Some(sub)) => write!(f, "{main}/{sub}"),
        }
    }
}

/// Everything a place has to satisfy to be selected, apart from its station.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PlaceFilters {
    pub category: CategoryFilter,

    /// Only keep wheelchair-accessible places.
    pub accessibility_only: bool,
}

impl PlaceFilters {
    /// Create filters from a category filter and accessibility flag.
    pub fn new(category: CategoryFilter, accessibility_only: bool) -> Self {
        Self {
            category,
            accessibility_only,
        }
    }

    /// Create filters from loose request parts. See [`CategoryFilter::from_parts`].
    pub fn from_parts(
        main: Option<MainCategory>,
        sub: Option<SubCategory>,
        accessibility_only: bool,
    ) -> Self {
        Self::new(CategoryFilter::from_parts(main, sub), accessibility_only)
    }

    /// Check a place against every criterion.
    pub fn matches(&self, place: &Place) -> bool {
        self.category.matches(place) && (!self.accessibility_only || place.accessibility)
    }
}
