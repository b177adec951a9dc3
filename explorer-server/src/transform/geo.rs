//! Great-circle distance and nearest-station search.

use super::raw::RawStation;

/// Mean earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Walking minutes per kilometre used for the distance label.
pub const WALK_MINS_PER_KM: f64 = 15.0;

/// Haversine distance between two coordinates, in kilometres.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Find the station closest to a coordinate.
///
/// Returns the station and its distance in kilometres, or `None` when
/// there are no stations.
pub fn nearest_station(stations: &[RawStation], lat: f64, lon: f64) -> Option<(&RawStation, f64)> {
    stations
        .iter()
        .map(|s| (s, haversine_km(lat, lon, s.lat, s.lon)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Format a distance as the walking-time label shown on place cards.
pub fn walking_label(km: f64) -> String {
    format!("步行 {} 分鐘", (km * WALK_MINS_PER_KM).ceil() as i64)
}
