//! SVG preview of a layout.
//!
//! Each placement is drawn as a filled rectangle, optionally labelled with
//! its kind and id. Coordinates are rounded to two decimals when written;
//! the layout itself is never rounded.

use log::debug;
use svg::{Document, node::element as svg_element};

use folio_core::{color::Color, content::ContentKind};

use super::{Error, Exporter};
use crate::{
    config::StyleConfig,
    layout::{Layout, Placement},
};

const DEFAULT_BACKGROUND: &str = "#ffffff";
const DEFAULT_IMAGE: &str = "#9aa5b1";
const DEFAULT_TEXT: &str = "#e4e7eb";
const DEFAULT_COLLECTION: &str = "#cbd2d9";
const LABEL_COLOR: &str = "#1f2933";
const LABEL_FONT_SIZE: f64 = 14.0;
const GUTTER_COLOR: &str = "#ffffff";

/// Configures an [`Svg`] exporter.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Resolves the configured colors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] when a configured color cannot be parsed.
    pub fn build(self) -> Result<Svg, Error> {
        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);

        Ok(Svg {
            background: resolve(style.background_color(), DEFAULT_BACKGROUND)?,
            image: resolve(style.image_color(), DEFAULT_IMAGE)?,
            text: resolve(style.text_color(), DEFAULT_TEXT)?,
            collection: resolve(style.collection_color(), DEFAULT_COLLECTION)?,
            label: parse_builtin(LABEL_COLOR)?,
            gutter: parse_builtin(GUTTER_COLOR)?,
            show_labels: style.show_labels(),
        })
    }
}

fn resolve(configured: Result<Option<Color>, String>, fallback: &str) -> Result<Color, Error> {
    match configured.map_err(Error::Render)? {
        Some(color) => Ok(color),
        None => parse_builtin(fallback),
    }
}

fn parse_builtin(color: &str) -> Result<Color, Error> {
    Color::new(color).map_err(|err| Error::Render(err.to_string()))
}

/// Renders layouts as SVG documents.
#[derive(Debug, Clone)]
pub struct Svg {
    background: Color,
    image: Color,
    text: Color,
    collection: Color,
    label: Color,
    gutter: Color,
    show_labels: bool,
}

impl Svg {
    /// Builds the SVG document for `layout`.
    ///
    /// The document is exactly as wide as the container and as tall as the
    /// stacked rows.
    pub fn render_layout(&self, layout: &Layout) -> Document {
        let width = round(layout.container_width());
        let height = round(layout.height());

        let background = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", width)
            .set("height", height)
            .set("fill", &self.background);

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height)
            .add(background);

        for (index, row) in layout.rows().iter().enumerate() {
            let mut group = svg_element::Group::new()
                .set("class", "row")
                .set("data-row", index);
            if let Some(pattern) = row.pattern() {
                group = group.set("data-pattern", pattern.name());
            }
            for placement in row.placements() {
                group = group.add(self.render_placement(placement));
            }
            doc = doc.add(group);
        }

        doc
    }

    fn render_placement(&self, placement: &Placement) -> svg_element::Group {
        let rect = svg_element::Rectangle::new()
            .set("x", round(placement.x()))
            .set("y", round(placement.y()))
            .set("width", round(placement.width()))
            .set("height", round(placement.height()))
            .set("fill", self.fill_for(placement))
            .set("stroke", &self.gutter)
            .set("stroke-width", 1);

        let group = svg_element::Group::new()
            .set("data-id", placement.id().to_string())
            .set("data-kind", placement.kind().to_string())
            .add(rect);

        if !self.show_labels {
            return group;
        }

        let bounds = placement.bounds();
        let label = svg_element::Text::new("")
            .set("x", round(bounds.min_x() + bounds.width() / 2.0))
            .set("y", round(bounds.min_y() + bounds.height() / 2.0))
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-family", "sans-serif")
            .set("font-size", LABEL_FONT_SIZE)
            .set("fill", &self.label)
            .add(svg::node::Text::new(format!(
                "{} {}",
                placement.kind(),
                placement.id()
            )));

        group.add(label)
    }

    fn fill_for(&self, placement: &Placement) -> &Color {
        if placement.is_collection_card() {
            return &self.collection;
        }
        match placement.kind() {
            ContentKind::Image | ContentKind::Gif => &self.image,
            ContentKind::Collection => &self.collection,
            ContentKind::Text | ContentKind::Code | ContentKind::Unknown => &self.text,
        }
    }
}

impl Exporter for Svg {
    fn export_layout(&self, layout: &Layout) -> Result<String, Error> {
        let doc = self.render_layout(layout);
        debug!(rows = layout.rows().len(); "SVG document rendered");
        Ok(doc.to_string())
    }
}

/// Rounds to two decimals.
fn round(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
