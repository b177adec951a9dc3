//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, SelectionCache};
use crate::catalog::Catalog;
use crate::selector::PlaceSelector;
use crate::transfer::TransferTable;

/// Shared application state.
///
/// The catalog and transfer table are loaded once and never mutated, so
/// handlers share them without locking.
#[derive(Clone)]
pub struct AppState {
    /// Lines and places
    pub catalog: Arc<Catalog>,

    /// Interchange station groups
    pub transfers: Arc<TransferTable>,

    /// Memoized selections
    pub selections: Arc<SelectionCache>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: Catalog, transfers: TransferTable, cache_config: &CacheConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            transfers: Arc::new(transfers),
            selections: Arc::new(SelectionCache::new(cache_config)),
        }
    }

    /// A selector over the shared catalog.
    pub fn selector(&self) -> PlaceSelector<'_> {
        PlaceSelector::new(&self.catalog, &self.transfers)
    }
}
