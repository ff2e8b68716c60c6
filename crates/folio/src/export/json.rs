//! JSON export of placements.

use log::debug;

use super::{Error, Exporter};
use crate::layout::Layout;

/// Serializes a [`Layout`] as JSON.
///
/// Coordinates are written unrounded so consumers can apply their own
/// pixel snapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json {
    pretty: bool,
}

impl Json {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent the output for humans.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Exporter for Json {
    fn export_layout(&self, layout: &Layout) -> Result<String, Error> {
        let output = if self.pretty {
            serde_json::to_string_pretty(layout)?
        } else {
            serde_json::to_string(layout)?
        };
        debug!(bytes = output.len(); "JSON document rendered");
        Ok(output)
    }
}
