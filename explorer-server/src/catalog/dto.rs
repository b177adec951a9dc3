//! Wire formats of the line and place documents.
//!
//! These mirror the JSON written by the data pipeline field for field.
//! Conversion into domain types happens in [`super::Catalog`].

use serde::{Deserialize, Serialize};

use crate::domain::{MainCategory, SubCategory};

/// A line in the lines document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDto {
    pub id: String,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationDto>,
}

/// A station entry within a line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationDto {
    pub id: String,
    pub name: String,
}

/// A place in the places document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDto {
    pub id: String,
    pub name: String,
    pub mrt_station: String,
    pub main_category: MainCategory,
    #[serde(default)]
    pub sub_category: Option<SubCategory>,
    pub rating: f64,
    #[serde(default)]
    pub accessibility: bool,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
