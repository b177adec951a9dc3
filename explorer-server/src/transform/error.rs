//! Transform error types.

use std::path::PathBuf;

/// Errors that can occur while reading raw exports or writing documents.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file did not contain the expected JSON
    #[error("JSON error in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
