//! Raw input records for the transform.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A station record from the open-data station export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawStation {
    pub station_code: String,
    pub station_name: String,
    pub lat: f64,
    pub lon: f64,
}

/// A place fetched from OpenStreetMap.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OsmPlace {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    /// Station code cached by the fetch step, if any.
    #[serde(default, rename = "_nearest_station")]
    pub nearest_station: Option<String>,
}

impl OsmPlace {
    /// Tag value by key.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Best available name: local, then English, then Chinese.
    pub fn name(&self) -> Option<&str> {
        self.tag("name")
            .or_else(|| self.tag("name:en"))
            .or_else(|| self.tag("name:zh"))
            .filter(|n| !n.is_empty())
    }
}

/// A hand-curated attraction from the simulated dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegacyPlace {
    pub id: serde_json::Value,
    #[serde(default)]
    pub name: String,
    pub lat: f64,
    pub long: f64,
    #[serde(default)]
    pub category: String,
}

/// Either input format.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawPlace {
    Osm(OsmPlace),
    Legacy(LegacyPlace),
}

impl RawPlace {
    pub fn name(&self) -> Option<&str> {
        match self {
            RawPlace::Osm(p) => p.name(),
            RawPlace::Legacy(p) => Some(p.name.as_str()).filter(|n| !n.is_empty()),
        }
    }

    pub fn coordinates(&self) -> (f64, f64) {
        match self {
            RawPlace::Osm(p) => (p.lat, p.lon),
            RawPlace::Legacy(p) => (p.lat, p.long),
        }
    }

    /// Id as it appears in the source, without prefix.
    pub fn raw_id(&self) -> String {
        match self {
            RawPlace::Osm(p) => p.id.to_string(),
            RawPlace::Legacy(p) => match &p.id {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        }
    }
}
