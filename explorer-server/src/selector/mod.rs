//! Place selection for a chosen station.
//!
//! This module implements the question the explorer answers: "what is worth
//! visiting around this station?" A station selection is widened to every
//! code of the same interchange, the catalog is filtered by category,
//! sub-category and accessibility, and the result is ordered by rating.
//!
//! Selection is a pure function over read-only data. Callers re-run it when
//! the station or filters change and may memoize results as they see fit.

mod filters;


pub use filters::{CategoryFilter, PlaceFilters};

use crate::catalog::Catalog;
use crate::domain::{Place, StationId};
use crate::transfer::TransferTable;

/// Select and order the places around a station.
///
/// Returns nothing when no station is chosen. Otherwise keeps every place
/// whose station is equivalent to `station` and which passes `filters`,
/// ordered by rating, highest first. Places with equal ratings keep their
/// catalog order.
pub fn select_places<'a>(
    places: &'a [Place],
    transfers: &TransferTable,
    station: Option<&StationId>,
    filters: &PlaceFilters,
) -> Vec<&'a Place> {
    let Some(station) = station else {
        return Vec::new();
    };

    let valid_ids = transfers.equivalents(station);

    let mut selected: Vec<&Place> = places
        .iter()
        .filter(|p| p.mrt_station.as_ref().is_some_and(|s| valid_ids.contains(s)))
        .filter(|p| filters.matches(p))
        .collect();

    // sort_by is stable, so ties keep catalog order
    selected.sort_by(|a, b| rating_key(b).total_cmp(&rating_key(a)));
    selected
}

/// Rating as a sort key. Adding `0.0` turns `-0.0` into `0.0`, so the two
/// compare equal under `total_cmp`.
fn rating_key(place: &Place) -> f64 {
    place.rating + 0.0
}

/// A catalog paired with its transfer table.
///
/// Convenience wrapper for callers that always select against the same
/// reference data.
#[derive(Debug, Clone, Copy)]
pub struct PlaceSelector<'a> {
    catalog: &'a Catalog,
    transfers: &'a TransferTable,
}

impl<'a> PlaceSelector<'a> {
    /// Create a new selector.
    pub fn new(catalog: &'a Catalog, transfers: &'a TransferTable) -> Self {
        Self { catalog, transfers }
    }

    /// Select places around `station`. See [`select_places`].
    pub fn select(&self, station: Option<&StationId>, filters: &PlaceFilters) -> Vec<&'a Place> {
        select_places(self.catalog.places(), self.transfers, station, filters)
    }

    /// Look up a station's display name.
    pub fn station_name(&self, station: &StationId) -> Option<&'a str> {
        self.catalog.station_name(station)
    }
}
