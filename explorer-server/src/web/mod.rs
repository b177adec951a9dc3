//! Web layer for the metro place explorer.
//!
//! Serves the explorer page and the place list for a station, as an HTML
//! fragment or JSON.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
