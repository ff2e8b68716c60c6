//! Error types for Folio operations.
//!
//! [`FolioError`] wraps every failure that can occur between reading a
//! content document and writing the rendered layout. The layout engine
//! itself cannot fail; errors only come from input, configuration and
//! export.

use std::io;

use thiserror::Error;

/// The main error type for Folio operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source document next to the JSON error so
/// that callers can point at the offending line and column.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: serde_json::Error, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for FolioError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl FolioError {
    /// Create a new `Parse` error with the associated source document.
    pub fn new_parse_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
