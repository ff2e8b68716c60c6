//! Export functionality for Folio layouts.
//!
//! This module provides the [`Exporter`] trait that turns a positioned
//! [`Layout`] into an output document. It is the final stage in the Folio
//! pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Content JSON
//!     ↓ parse + prepare
//! Content items
//!     ↓ layout (simple or pattern mode)
//! Layout (absolute placements)
//!     ↓ export (this module)
//! SVG / JSON document
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG preview via [`svg::SvgBuilder`] and [`svg::Svg`]
//! - [`json`]: machine-readable placements via [`json::Json`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], which converts into
//! [`FolioError::Export`] at the crate boundary.
//!
//! [`FolioError::Export`]: crate::FolioError::Export

pub mod json;
pub mod svg;

use thiserror::Error;

use crate::layout::Layout;

/// Abstraction for layout export backends.
pub trait Exporter {
    /// Renders `layout` into the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the layout cannot be converted to the
    /// target format, or [`Error::Json`] if serialization fails.
    fn export_layout(&self, layout: &Layout) -> Result<String, Error>;
}

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum Error {
    /// A rendering or conversion failure described by the message.
    #[error("Render error: {0}")]
    Render(String),

    /// The layout could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
