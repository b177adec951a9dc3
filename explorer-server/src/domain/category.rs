//! Place classification.
//!
//! Places carry a closed main category and an optional sub-category. The
//! sub-category only drives filtering under [`MainCategory::Food`]; under
//! other categories it is display-only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown main category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// Top-level place category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainCategory {
    Food,
    Culture,
    Shopping,
    Leisure,
}

impl MainCategory {
    /// All categories, in selector display order.
    pub const ALL: [MainCategory; 4] = [
        MainCategory::Food,
        MainCategory::Culture,
        MainCategory::Shopping,
        MainCategory::Leisure,
    ];

    /// Wire name, as used in the places document.
    pub fn as_str(&self) -> &'static str {
        match self {
            MainCategory::Food => "Food",
            MainCategory::Culture => "Culture",
            MainCategory::Shopping => "Shopping",
            MainCategory::Leisure => "Leisure",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            MainCategory::Food => "美食",
            MainCategory::Culture => "文化",
            MainCategory::Shopping => "購物",
            MainCategory::Leisure => "休閒",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MainCategory::Food => "🍽️",
            MainCategory::Culture => "🏛️",
            MainCategory::Shopping => "🛍️",
            MainCategory::Leisure => "☕",
        }
    }
}

impl FromStr for MainCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MainCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for MainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Refinement of a place's category.
///
/// The six named variants are the ones offered as Food filters. Upstream
/// data may carry other values (e.g. "Thai", "Steak"); those are kept
/// verbatim in [`SubCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubCategory {
    Japanese,
    Korean,
    Chinese,
    HotPot,
    NightMarket,
    Cafe,
    Other(String),
}

/// Sub-categories offered as filters under Food, in display order.
pub const FOOD_FILTER_SUB_CATEGORIES: [SubCategory; 6] = [
    SubCategory::Japanese,
    SubCategory::Korean,
    SubCategory::Chinese,
    SubCategory::HotPot,
    SubCategory::NightMarket,
    SubCategory::Cafe,
];

impl SubCategory {
    /// Wire name, as used in the places document.
    pub fn as_str(&self) -> &str {
        match self {
            SubCategory::Japanese => "Japanese",
            SubCategory::Korean => "Korean",
            SubCategory::Chinese => "Chinese",
            SubCategory::HotPot => "HotPot",
            SubCategory::NightMarket => "NightMarket",
            SubCategory::Cafe => "Cafe",
            SubCategory::Other(s) => s,
        }
    }

    /// Display label. Unrecognised sub-categories display their raw name.
    pub fn label(&self) -> &str {
        match self {
            SubCategory::Japanese => "日式",
            SubCategory::Korean => "韓式",
            SubCategory::Chinese => "中式",
            SubCategory::HotPot => "火鍋",
            SubCategory::NightMarket => "夜市",
            SubCategory::Cafe => "咖啡/甜點",
            SubCategory::Other(s) => s,
        }
    }
}

impl From<&str> for SubCategory {
    fn from(s: &str) -> Self {
        match s {
            "Japanese" => SubCategory::Japanese,
            "Korean" => SubCategory::Korean,
            "Chinese" => SubCategory::Chinese,
            "HotPot" => SubCategory::HotPot,
            "NightMarket" => SubCategory::NightMarket,
            "Cafe" => SubCategory::Cafe,
            other => SubCategory::Other(other.to_string()),
        }
    }
}

impl From<String> for SubCategory {
    fn from(s: String) -> Self {
        SubCategory::from(s.as_str())
    }
}

impl From<SubCategory> for String {
    fn from(sub: SubCategory) -> Self {
        match sub {
            SubCategory::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_category_parse() {
        assert_eq!("Food".parse::<MainCategory>(), Ok(MainCategory::Food));
        assert_eq!("Leisure".parse::<MainCategory>(), Ok(MainCategory::Leisure));
        assert_eq!(
            "food".parse::<MainCategory>(),
            Err(UnknownCategory("food".to_string()))
        );
        assert!("All".parse::<MainCategory>().is_err());
    }

    #[test]
    fn main_category_serde() {
        let c: MainCategory = serde_json::from_str("\"Shopping\"").unwrap();
        assert_eq!(c, MainCategory::Shopping);
        assert_eq!(serde_json::to_string(&MainCategory::Culture).unwrap(), "\"Culture\"");
    }

    #[test]
    fn labels() {
        assert_eq!(MainCategory::Food.label(), "美食");
        assert_eq!(SubCategory::Cafe.label(), "咖啡/甜點");
        assert_eq!(SubCategory::Other("Thai".into()).label(), "Thai");
    }

    #[test]
    fn sub_category_known_and_other() {
        assert_eq!(SubCategory::from("HotPot"), SubCategory::HotPot);
        assert_eq!(
            SubCategory::from("Steak"),
            SubCategory::Other("Steak".to_string())
        );
    }

    #[test]
    fn sub_category_serde_preserves_unknown_values() {
        let subs: Vec<SubCategory> =
            serde_json::from_str(r#"["Japanese", "Vietnamese"]"#).unwrap();
        assert_eq!(
            subs,
            vec![
                SubCategory::Japanese,
                SubCategory::Other("Vietnamese".to_string())
            ]
        );
        assert_eq!(
            serde_json::to_string(&subs).unwrap(),
            r#"["Japanese","Vietnamese"]"#
        );
    }
}
