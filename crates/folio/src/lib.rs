//! Folio - row and pattern layouts for photography portfolios.
//!
//! Takes an ordered list of heterogeneous content blocks (images, GIFs, text,
//! code, collection cards) and arranges them into full-width rows, either by
//! simple chunking or by detecting named compositions such as a 5-star
//! portrait with two stacked secondaries. The result can be rendered as an
//! SVG preview or exported as JSON placements.

pub mod config;

mod error;
mod export;
mod layout;

pub use folio_core::{color, content, geometry};
pub use folio_layout::PatternKind;

pub use error::FolioError;
pub use layout::{Layout, LayoutRow, Placement};

use log::{debug, info, trace};
use serde::Deserialize;

use folio_core::content::ContentItem;
use folio_layout::{process_for_display, process_patterns_for_display, resolve::normalize};

use config::{AppConfig, LayoutMode};
use export::Exporter;

/// A content document: a bare array of items, or an object wrapping them.
#[derive(Deserialize)]
struct ContentEnvelope {
    content: Vec<ContentItem>,
}

/// Builder for laying out and rendering portfolio content.
///
/// This provides an API for processing content through parsing, layout and
/// rendering stages.
///
/// # Examples
///
/// ```rust
/// use folio::{LayoutBuilder, config::AppConfig};
///
/// let source = r#"[
///     { "id": 1, "type": "IMAGE", "imageWidth": 1500, "imageHeight": 1000 },
///     { "id": 2, "type": "IMAGE", "imageWidth": 1500, "imageHeight": 1000 }
/// ]"#;
///
/// let builder = LayoutBuilder::new(AppConfig::default());
///
/// let items = builder.prepare(builder.parse(source).expect("Failed to parse"));
/// let layout = builder.layout(&items).expect("Failed to lay out");
/// assert_eq!(layout.rows().len(), 1);
///
/// let svg = builder.render_svg(&layout).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Default)]
pub struct LayoutBuilder {
    config: AppConfig,
}

impl LayoutBuilder {
    /// Create a new layout builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a JSON content document into items.
    ///
    /// Accepts either an array of items or an object with a `content` array.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Parse`] carrying the source when the document is
    /// not valid JSON or an item does not match the content schema.
    pub fn parse(&self, source: &str) -> Result<Vec<ContentItem>, FolioError> {
        info!("Parsing content");

        let items = if source.trim_start().starts_with('{') {
            serde_json::from_str::<ContentEnvelope>(source).map(|envelope| envelope.content)
        } else {
            serde_json::from_str::<Vec<ContentItem>>(source)
        }
        .map_err(|err| FolioError::new_parse_error(err, source))?;

        debug!(items = items.len(); "Content parsed successfully");
        Ok(items)
    }

    /// Drops hidden items and orders the rest by their order index.
    ///
    /// The sort is stable: items sharing an order index keep their document
    /// order.
    pub fn prepare(&self, items: Vec<ContentItem>) -> Vec<ContentItem> {
        let total = items.len();
        let mut visible: Vec<ContentItem> =
            items.into_iter().filter(ContentItem::is_visible).collect();
        visible.sort_by_key(ContentItem::order_index);

        debug!(total, visible = visible.len(); "Prepared content");
        visible
    }

    /// Lay out `items` in the configured mode.
    ///
    /// Items are used in the given order; call [`prepare`](Self::prepare)
    /// first to apply visibility and ordering.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] when the layout configuration is invalid.
    pub fn layout(&self, items: &[ContentItem]) -> Result<Layout, FolioError> {
        let layout_config = self.config.layout();
        layout_config.validate().map_err(FolioError::Config)?;

        let options = layout_config.options();
        let mode = layout_config.mode();
        let container_width = layout_config.container_width();

        info!(mode:%, container_width, items = items.len(); "Computing layout");
        let normalized = normalize(items, &options);

        let mut layout = Layout::new(mode, container_width);
        match mode {
            LayoutMode::Simple => {
                for row in process_for_display(&normalized, container_width, options.chunk_size())
                {
                    layout.push_row(None, &row);
                }
            }
            LayoutMode::Pattern => {
                for row in process_patterns_for_display(&normalized, container_width, &options) {
                    trace!(pattern:% = row.kind(), items = row.items().len(); "Pattern row");
                    layout.push_row(Some(row.kind()), row.items());
                }
            }
        }

        info!(rows = layout.rows().len(), height = layout.height(); "Layout calculated");
        Ok(layout)
    }

    /// Render a layout to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Export`] when a configured color is invalid.
    pub fn render_svg(&self, layout: &Layout) -> Result<String, FolioError> {
        let svg = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .build()?;
        let output = svg.export_layout(layout)?;

        info!("SVG rendered successfully");
        Ok(output)
    }

    /// Render a layout to a pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Export`] when serialization fails.
    pub fn render_json(&self, layout: &Layout) -> Result<String, FolioError> {
        let output = export::json::Json::new()
            .with_pretty(true)
            .export_layout(layout)?;

        info!("JSON rendered successfully");
        Ok(output)
    }
}
