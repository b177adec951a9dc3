//! Domain types for the metro place explorer.
//!
//! This module contains the validated reference data: station codes, lines,
//! places and their categories. Station codes enforce their format at
//! construction time, so code that receives a `StationId` can trust it.

mod category;
mod line;
mod place;
mod station;

pub use category::{FOOD_FILTER_SUB_CATEGORIES, MainCategory, SubCategory, UnknownCategory};
pub use line::{Line, Station};
pub use place::Place;
pub use station::{InvalidStationId, StationId};
