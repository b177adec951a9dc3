//! Category assignment for raw places.

use crate::domain::{MainCategory, SubCategory};

use super::raw::{LegacyPlace, OsmPlace};

/// Category and display tags derived for a place.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub main_category: MainCategory,
    pub sub_category: Option<SubCategory>,
    pub tags: Vec<String>,
}

/// Classify an OpenStreetMap place from its tags.
///
/// Places that match no rule fall back to Leisure.
pub fn classify_osm(place: &OsmPlace, name: &str) -> Classification {
    let amenity = place.tag("amenity");
    let tourism = place.tag("tourism");
    let shop = place.tag("shop");
    let cuisine = place.tag("cuisine");

    let (main_category, sub_category) = match (amenity, tourism, shop) {
        (Some("restaurant" | "food_court" | "fast_food"), _, _) => (
            MainCategory::Food,
            cuisine
                .and_then(cuisine_sub_category)
                .or_else(|| name_sub_category(name)),
        ),
        (Some("cafe"), _, _) => (MainCategory::Leisure, Some(SubCategory::Cafe)),
        (_, Some("museum" | "artwork" | "gallery"), _) => (MainCategory::Culture, None),
        (_, Some("attraction" | "viewpoint"), _) => (MainCategory::Leisure, None),
        (_, _, Some("mall" | "department_store")) => (MainCategory::Shopping, None),
        (Some("night_market"), _, _) => (MainCategory::Shopping, Some(SubCategory::NightMarket)),
        _ => (MainCategory::Leisure, None),
    };

    let tags = [cuisine, amenity]
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect();

    Classification {
        main_category,
        sub_category,
        tags,
    }
}

/// Classify a place from the simulated dataset by its Chinese category name.
pub fn classify_legacy(place: &LegacyPlace) -> Classification {
    let (main_category, sub_category) = match place.category.as_str() {
        "夜市" => (MainCategory::Food, Some(SubCategory::NightMarket)),
        "美食" => (MainCategory::Food, None),
        "文化" | "古蹟" | "廟宇" | "文創" => (MainCategory::Culture, None),
        "購物" | "商圈" => (MainCategory::Shopping, None),
        _ => (MainCategory::Leisure, None),
    };

    Classification {
        main_category,
        sub_category,
        tags: vec![place.category.clone()],
    }
}

/// Guess a food sub-category from an OSM cuisine value such as `"japanese;sushi"`.
fn cuisine_sub_category(cuisine: &str) -> Option<SubCategory> {
    const RULES: [(&[&str], &str); 6] = [
        (&["japanese", "sushi"], "Japanese"),
        (&["korean"], "Korean"),
        (&["chinese", "taiwanese"], "Chinese"),
        (&["italian", "pizza"], "Italian"),
        (&["thai"], "Thai"),
        (&["vietnamese"], "Vietnamese"),
    ];

    RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| cuisine.contains(n)))
        .map(|(_, sub)| SubCategory::from(*sub))
}

/// Guess a food sub-category from keywords in the place name.
fn name_sub_category(name: &str) -> Option<SubCategory> {
    const RULES: [(&[&str], &str); 4] = [
        (&["壽司", "拉麵", "日式"], "Japanese"),
        (&["韓", "泡菜"], "Korean"),
        (&["鍋"], "HotPot"),
        (&["牛排"], "Steak"),
    ];

    RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| name.contains(n)))
        .map(|(_, sub)| SubCategory::from(*sub))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn osm(tags: &[(&str, &str)]) -> OsmPlace {
        OsmPlace {
            id: 1,
            lat: 25.0,
            lon: 121.5,
            tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
            nearest_station: None,
        }
    }

    fn legacy(category: &str) -> LegacyPlace {
        LegacyPlace {
            id: serde_json::Value::from(1),
            name: "x".to_string(),
            lat: 25.0,
            long: 121.5,
            category: category.to_string(),
        }
    }

    #[test]
    fn restaurant_with_cuisine() {
        let c = classify_osm(&osm(&[("amenity", "restaurant"), ("cuisine", "sushi")]), "Sushi Bar");
        assert_eq!(c.main_category, MainCategory::Food);
        assert_eq!(c.sub_category, Some(SubCategory::Japanese));
        assert_eq!(c.tags, vec!["sushi", "restaurant"]);
    }

    #[test]
    fn cuisine_outside_filter_set() {
        let c = classify_osm(&osm(&[("amenity", "restaurant"), ("cuisine", "thai")]), "x");
        assert_eq!(c.sub_category, Some(SubCategory::Other("Thai".to_string())));
    }

    #[test]
    fn restaurant_name_fallback() {
        let c = classify_osm(&osm(&[("amenity", "fast_food")]), "老四川麻辣鍋");
        assert_eq!(c.main_category, MainCategory::Food);
        assert_eq!(c.sub_category, Some(SubCategory::HotPot));
        assert_eq!(c.tags, vec!["fast_food"]);
    }

    #[test]
    fn unknown_cuisine_falls_back_to_name() {
        let c = classify_osm(&osm(&[("amenity", "restaurant"), ("cuisine", "regional")]), "一蘭拉麵");
        assert_eq!(c.sub_category, Some(SubCategory::Japanese));
    }

    #[test]
    fn restaurant_without_hints() {
        let c = classify_osm(&osm(&[("amenity", "food_court")]), "Food Court");
        assert_eq!(c.main_category, MainCategory::Food);
        assert_eq!(c.sub_category, None);
    }

    #[test]
    fn cafe_is_leisure() {
        let c = classify_osm(&osm(&[("amenity", "cafe")]), "Cafe");
        assert_eq!(c.main_category, MainCategory::Leisure);
        assert_eq!(c.sub_category, Some(SubCategory::Cafe));
    }

    #[test]
    fn tourism_and_shops() {
        let museum = classify_osm(&osm(&[("tourism", "museum")]), "x");
        assert_eq!(museum.main_category, MainCategory::Culture);
        assert!(museum.tags.is_empty());

        let view = classify_osm(&osm(&[("tourism", "viewpoint")]), "x");
        assert_eq!(view.main_category, MainCategory::Leisure);

        let mall = classify_osm(&osm(&[("shop", "mall")]), "x");
        assert_eq!(mall.main_category, MainCategory::Shopping);
    }

    #[test]
    fn night_market() {
        let c = classify_osm(&osm(&[("amenity", "night_market")]), "饒河街觀光夜市");
        assert_eq!(c.main_category, MainCategory::Shopping);
        assert_eq!(c.sub_category, Some(SubCategory::NightMarket));
    }

    #[test]
    fn untagged_is_leisure() {
        let c = classify_osm(&osm(&[]), "x");
        assert_eq!(c.main_category, MainCategory::Leisure);
        assert_eq!(c.sub_category, None);
    }

    #[test]
    fn legacy_categories() {
        let night = classify_legacy(&legacy("夜市"));
        assert_eq!(night.main_category, MainCategory::Food);
        assert_eq!(night.sub_category, Some(SubCategory::NightMarket));
        assert_eq!(night.tags, vec!["夜市"]);

        assert_eq!(classify_legacy(&legacy("廟宇")).main_category, MainCategory::Culture);
        assert_eq!(classify_legacy(&legacy("商圈")).main_category, MainCategory::Shopping);
        assert_eq!(classify_legacy(&legacy("公園")).main_category, MainCategory::Leisure);
    }
}
