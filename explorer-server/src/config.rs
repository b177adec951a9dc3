//! Server configuration.
//!
//! Every setting has a default and can be overridden from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {key}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

/// Configuration for the explorer web server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Lines document (stations grouped by line).
    pub lines_path: PathBuf,

    /// Places document.
    pub places_path: PathBuf,

    /// Optional transfer table override. The built-in Taipei table is used
    /// when unset.
    pub transfers_path: Option<PathBuf>,

    /// Static assets directory.
    pub static_dir: PathBuf,

    /// How long a memoized selection stays cached.
    pub cache_ttl: Duration,

    /// Maximum number of memoized selections.
    pub cache_capacity: u64,
}

impl ServerConfig {
    /// Build a configuration from `EXPLORER_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            bind_addr: parse_var(&lookup, "EXPLORER_BIND")?.unwrap_or(defaults.bind_addr),
            lines_path: lookup("EXPLORER_LINES")
                .map(PathBuf::from)
                .unwrap_or(defaults.lines_path),
            places_path: lookup("EXPLORER_PLACES")
                .map(PathBuf::from)
                .unwrap_or(defaults.places_path),
            transfers_path: lookup("EXPLORER_TRANSFERS").map(PathBuf::from),
            static_dir: lookup("EXPLORER_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            cache_ttl: parse_var(&lookup, "EXPLORER_CACHE_TTL_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
            cache_capacity: parse_var(&lookup, "EXPLORER_CACHE_CAPACITY")?
                .unwrap_or(defaults.cache_capacity),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            lines_path: PathBuf::from("data/stations.json"),
            places_path: PathBuf::from("data/places.json"),
            transfers_path: None,
            static_dir: PathBuf::from("static"),
            cache_ttl: Duration::from_secs(10 * 60),
            cache_capacity: 1000,
        }
    }
}

/// Parse a variable if it is set.
pub(crate) fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(key)
        .map(|value| value.trim().parse().map_err(|_| ConfigError { key, value }))
        .transpose()
}
