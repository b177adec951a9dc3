//! Memoized place selections for the web layer.
//!
//! Selection is pure and cheap, but the page re-requests the same station
//! and filters on every toggle. Results are cached per (station, filters)
//! so repeated requests skip the catalog scan and the clone.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{Place, StationId};
use crate::selector::{PlaceFilters, PlaceSelector};

/// Cache key: the selected station and the filters in effect.
type SelectionKey = (Option<StationId>, PlaceFilters);

/// Cached selection: owned copies of the selected places, in order.
pub type SelectionEntry = Arc<Vec<Place>>;

/// Configuration for the selection cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 1000,
        }
    }
}

/// Cache of place selections.
pub struct SelectionCache {
    entries: MokaCache<SelectionKey, SelectionEntry>,
}

impl SelectionCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let entries = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { entries }
    }

    /// Get a cached selection, or run `selector` and cache the result.
    pub async fn select(
        &self,
        selector: PlaceSelector<'_>,
        station: Option<&StationId>,
        filters: &PlaceFilters,
    ) -> SelectionEntry {
        let key = (station.cloned(), filters.clone());

        if let Some(cached) = self.entries.get(&key).await {
            tracing::trace!(?station, category = %filters.category, "selection cache hit");
            return cached;
        }

        let places: Vec<Place> = selector
            .select(station, filters)
            .into_iter()
            .cloned()
            .collect();
        let entry = Arc::new(places);
        self.entries.insert(key, entry.clone()).await;
        tracing::debug!(
            ?station,
            category = %filters.category,
            entries = self.entry_count(),
            "selection cached"
        );
        entry
    }

    /// Approximate number of cached selections.
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }
}
