//! Transform configuration.

use std::path::{Path, PathBuf};

use crate::config::{ConfigError, parse_var};

/// Default seed for generated ratings.
const DEFAULT_SEED: u64 = 2024;

/// Input and output paths for a transform run.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformConfig {
    /// Station export (`StationCode`, `StationName`, `Lat`, `Lon`).
    pub raw_stations: PathBuf,

    /// OpenStreetMap place export.
    pub raw_osm_places: PathBuf,

    /// Simulated attractions, used when the OSM export is unavailable.
    pub raw_attractions: PathBuf,

    /// Places document to write.
    pub places_out: PathBuf,

    /// Lines document to write.
    pub lines_out: PathBuf,

    /// Seed for ratings and accessibility.
    pub seed: u64,
}

impl TransformConfig {
    /// All files under one directory, with the conventional names.
    pub fn in_dir(dir: &Path, seed: u64) -> Self {
        Self {
            raw_stations: dir.join("raw_stations.json"),
            raw_osm_places: dir.join("raw_osm_places.json"),
            raw_attractions: dir.join("raw_attractions.json"),
            places_out: dir.join("places.json"),
            lines_out: dir.join("stations.json"),
            seed,
        }
    }

    /// Build a configuration from the environment.
    ///
    /// `EXPLORER_DATA_DIR` selects the directory (default `data`) and
    /// `EXPLORER_SEED` the rating seed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let dir = lookup("EXPLORER_DATA_DIR").unwrap_or_else(|| "data".to_string());
        let seed = parse_var(&lookup, "EXPLORER_SEED")?.unwrap_or(DEFAULT_SEED);
        Ok(Self::in_dir(Path::new(&dir), seed))
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self::in_dir(Path::new("data"), DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let config = TransformConfig::default();
        assert_eq!(config.raw_stations, PathBuf::from("data/raw_stations.json"));
        assert_eq!(config.lines_out, PathBuf::from("data/stations.json"));
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn from_lookup_overrides() {
        let config = TransformConfig::from_lookup(|key| match key {
            "EXPLORER_DATA_DIR" => Some("/tmp/explorer".to_string()),
            "EXPLORER_SEED" => Some("9".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.places_out, PathBuf::from("/tmp/explorer/places.json"));
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn bad_seed() {
        let err = TransformConfig::from_lookup(|key| {
            (key == "EXPLORER_SEED").then(|| "-1".to_string())
        })
        .unwrap_err();
        assert_eq!(err.key, "EXPLORER_SEED");
    }
}
