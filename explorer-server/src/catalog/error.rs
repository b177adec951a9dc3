//! Catalog loading error types.

use std::path::PathBuf;

use crate::domain::InvalidStationId;

/// Errors that can occur when loading the line and place documents.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Reading a document from disk failed
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document was not valid JSON of the expected shape
    #[error("failed to parse {document} document: {source}")]
    Json {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The lines document contains a malformed station code
    #[error("line {line}: {source}")]
    InvalidStation {
        line: String,
        #[source]
        source: InvalidStationId,
    },

    /// A place rating cannot be ordered
    #[error("place {place_id} has non-finite rating {rating}")]
    InvalidRating { place_id: String, rating: f64 },
}
