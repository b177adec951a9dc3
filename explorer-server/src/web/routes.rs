//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/places", get(list_places))
        .route("/api/lines", get(list_lines))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the station selector.
async fn index_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let html = IndexTemplate::new(state.catalog.lines())
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;
    Ok(Html(html).into_response())
}

/// All lines and their stations.
async fn list_lines(State(state): State<AppState>) -> Json<Vec<LineResult>> {
    Json(
        state
            .catalog
            .lines()
            .iter()
            .map(LineResult::from_line)
            .collect(),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// List places around a station.
async fn list_places(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<PlacesRequest>,
) -> Result<Response, AppError> {
    let station = req
        .station()
        .map_err(|message| AppError::BadRequest { message })?;
    let filters = req
        .filters()
        .map_err(|message| AppError::BadRequest { message })?;

    let selector = state.selector();
    let places = state
        .selections
        .select(selector, station.as_ref(), &filters)
        .await;

    // Fall back to the code when the station is missing from the lines document
    let station_name = station
        .as_ref()
        .map(|s| selector.station_name(s).unwrap_or(s.as_str()).to_string());

    tracing::debug!(
        station = ?station,
        category = %filters.category,
        accessibility_only = filters.accessibility_only,
        count = places.len(),
        "selected places"
    );

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = PlaceListTemplate {
            has_station: station.is_some(),
            station_name: station_name.unwrap_or_default(),
            places: places.iter().map(PlaceView::from_place).collect(),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(PlacesResponse {
            station: station.map(|s| s.to_string()),
            station_name,
            places: places.iter().map(PlaceResult::from_place).collect(),
        })
        .into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            tracing::error!(%status, %message, "request failed");
        } else {
            tracing::warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheConfig;
    use crate::catalog::Catalog;
    use crate::transfer::taipei_transfers;
    use axum::http::HeaderValue;

    const LINES: &str = r##"[
        {"id": "R", "name": "淡水信義線 (紅線)", "color": "#E3002C", "stations": [
            {"id": "R10", "name": "台北車站"}
        ]},
        {"id": "BL", "name": "板南線 (藍線)", "color": "#005EB8", "stations": [
            {"id": "BL22", "name": "台北車站"}
        ]}
    ]"##;

    const PLACES: &str = r#"[
        {"id": "p1", "name": "Ramen", "mrt_station": "R10", "main_category": "Food",
         "sub_category": "Japanese", "rating": 4.5, "accessibility": false,
         "image": "", "distance": "步行 2 分鐘", "tags": ["ramen"]},
        {"id": "p2", "name": "Museum", "mrt_station": "R10", "main_category": "Culture",
         "sub_category": null, "rating": 4.8, "accessibility": true,
         "image": "", "distance": "步行 4 分鐘", "tags": []},
        {"id": "p3", "name": "Mall", "mrt_station": "BL22", "main_category": "Shopping",
         "sub_category": null, "rating": 4.9, "accessibility": true,
         "image": "", "distance": "步行 1 分鐘", "tags": []}
    ]"#;

    fn state() -> AppState {
        let catalog = Catalog::from_documents(LINES, PLACES).unwrap();
        AppState::new(catalog, taipei_transfers(), &CacheConfig::default())
    }

    fn query(pairs: &[(&str, &str)]) -> PlacesRequest {
        let mut req = PlacesRequest::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "station" => req.station = value,
                "category" => req.category = value,
                "sub_category" => req.sub_category = value,
                "accessible" => req.accessible = value.as_deref() == Some("true"),
                other => panic!("unknown key {other}"),
            }
        }
        req
    }

    fn html_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("text/html"));
        headers
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn json_places(pairs: &[(&str, &str)]) -> serde_json::Value {
        let response = list_places(State(state()), HeaderMap::new(), Query(query(pairs)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        serde_json::from_str(&body_string(response).await).unwrap()
    }

    fn place_ids(json: &serde_json::Value) -> Vec<String> {
        json["places"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn no_station_returns_empty_list() {
        let json = json_places(&[("category", "Food")]).await;
        assert!(json["station"].is_null());
        assert!(place_ids(&json).is_empty());
    }

    #[tokio::test]
    async fn transfer_station_json() {
        let json = json_places(&[("station", "BL22")]).await;

        assert_eq!(json["station"], "BL22");
        assert_eq!(json["station_name"], "台北車站");
        assert_eq!(place_ids(&json), vec!["p3", "p2", "p1"]);
        assert_eq!(
            json["places"][0]["maps_url"],
            "https://www.google.com/maps/search/?api=1&query=Mall"
        );
    }

    #[tokio::test]
    async fn filters_are_applied() {
        let json = json_places(&[
            ("station", "r10"),
            ("category", "Food"),
            ("sub_category", "Japanese"),
        ])
        .await;
        assert_eq!(place_ids(&json), vec!["p1"]);

        let json = json_places(&[("station", "R10"), ("accessible", "true")]).await;
        assert_eq!(place_ids(&json), vec!["p3", "p2"]);
    }

    #[tokio::test]
    async fn accessible_flag_defaults_to_off() {
        let all = json_places(&[("station", "R10"), ("accessible", "false")]).await;
        assert_eq!(place_ids(&all), vec!["p3", "p2", "p1"]);
    }

    #[tokio::test]
    async fn unknown_station_name_falls_back_to_code() {
        let json = json_places(&[("station", "G03")]).await;
        assert_eq!(json["station_name"], "G03");
        assert!(place_ids(&json).is_empty());
    }

    #[tokio::test]
    async fn html_fragment() {
        let response = list_places(
            State(state()),
            html_headers(),
            Query(query(&[("station", "R10")])),
        )
        .await
        .unwrap();

        let html = body_string(response).await;
        assert!(html.contains("探索"));
        assert!(html.contains("台北車站"));
        let mall = html.find("Mall").unwrap();
        let museum = html.find("Museum").unwrap();
        let ramen = html.find("Ramen").unwrap();
        assert!(mall < museum && museum < ramen);
    }

    #[tokio::test]
    async fn malformed_station_is_bad_request() {
        let err = list_places(
            State(state()),
            HeaderMap::new(),
            Query(query(&[("station", "Taipei")])),
        )
        .await
        .unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(json["error"].as_str().unwrap().contains("TAIPEI"));
    }

    #[tokio::test]
    async fn unknown_category_is_bad_request() {
        let result = list_places(
            State(state()),
            HeaderMap::new(),
            Query(query(&[("station", "R10"), ("category", "Nightlife")])),
        )
        .await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn lines_endpoint() {
        let Json(lines) = list_lines(State(state())).await;
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].stations[0].id, "BL22");
    }

    #[tokio::test]
    async fn index_page_renders() {
        let response = index_page(State(state())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("station-select"));
        assert!(html.contains("BL22 - 台北車站"));
    }
}
