//! Catalog-specific error types
//!
//! Loading the catalog is the only fallible catalog operation. Callers that
//! must keep running use [`super::load_or_empty`], which logs these errors and
//! degrades to an empty catalog.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a catalog document
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data source could not be read
    #[error("Failed to read catalog '{}': {source}", path.display())]
    Io {
        /// Path of the data file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The document is not JSON, or not an object of string arrays
    #[error("Malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}
