//! Configuration types for Folio layouts.
//!
//! This module provides configuration structures that control how content is
//! laid out and how the result is styled. All types implement
//! [`serde::Deserialize`] so they can be loaded from TOML or any other serde
//! format. Every field is optional; missing fields take their defaults.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Layout mode, container width and the tuning constants of the engine.
//! - [`StyleConfig`] - Colors and labels used by the SVG renderer.
//!
//! # Example
//!
//! ```
//! # use folio::config::{AppConfig, LayoutMode};
//! let config = AppConfig::default();
//! assert_eq!(config.layout().mode(), LayoutMode::Simple);
//! assert!(config.layout().validate().is_ok());
//! assert!(config.style().background_color().is_ok());
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use folio_core::{
    color::Color,
    content::{MAX_RATING, MIN_RATING},
};
use folio_layout::{LayoutOptions, options};

/// Default width of the layout container, in pixels.
pub const DEFAULT_CONTAINER_WIDTH: f64 = 1200.0;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replaces the layout configuration.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }
}

/// How items are grouped into rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Fixed-size chunks, standalone items on their own row.
    #[default]
    Simple,
    /// Sliding-window pattern detection with stacked composites.
    Pattern,
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => f.write_str("simple"),
            Self::Pattern => f.write_str("pattern"),
        }
    }
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "pattern" => Ok(Self::Pattern),
            other => Err(format!(
                "unknown layout mode `{other}`, expected `simple` or `pattern`"
            )),
        }
    }
}

/// Layout mode, container width and engine tunables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    mode: LayoutMode,
    container_width: f64,
    chunk_size: usize,
    pattern_chunk_size: u32,
    min_pattern_chunk_size: u32,
    default_aspect: f64,
    base_width: f64,
    default_rating: u8,
    window_size: usize,
    max_movement: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: LayoutMode::default(),
            container_width: DEFAULT_CONTAINER_WIDTH,
            chunk_size: options::DEFAULT_CHUNK_SIZE,
            pattern_chunk_size: options::DEFAULT_PATTERN_CHUNK_SIZE,
            min_pattern_chunk_size: options::DEFAULT_MIN_PATTERN_CHUNK_SIZE,
            default_aspect: options::DEFAULT_ASPECT,
            base_width: options::DEFAULT_BASE_WIDTH,
            default_rating: options::DEFAULT_RATING,
            window_size: options::DEFAULT_WINDOW_SIZE,
            max_movement: options::DEFAULT_MAX_MOVEMENT,
        }
    }
}

impl LayoutConfig {
    pub fn with_mode(mut self, mode: LayoutMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_container_width(mut self, container_width: f64) -> Self {
        self.container_width = container_width;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Converts the engine tunables into [`LayoutOptions`].
    pub fn options(&self) -> LayoutOptions {
        LayoutOptions::default()
            .with_chunk_size(self.chunk_size)
            .with_pattern_chunk_size(self.pattern_chunk_size)
            .with_min_pattern_chunk_size(self.min_pattern_chunk_size)
            .with_default_aspect(self.default_aspect)
            .with_base_width(self.base_width)
            .with_default_rating(self.default_rating)
            .with_window_size(self.window_size)
            .with_max_movement(self.max_movement)
    }

    /// Checks that every value is usable by the engine.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        if !is_positive(self.container_width) {
            return Err(format!(
                "container_width must be a positive number, got {}",
                self.container_width
            ));
        }
        if !is_positive(self.default_aspect) {
            return Err(format!(
                "default_aspect must be a positive number, got {}",
                self.default_aspect
            ));
        }
        if !is_positive(self.base_width) {
            return Err(format!(
                "base_width must be a positive number, got {}",
                self.base_width
            ));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.default_rating) {
            return Err(format!(
                "default_rating must be between {MIN_RATING} and {MAX_RATING}, got {}",
                self.default_rating
            ));
        }
        if self.chunk_size == 0 {
            return Err("chunk_size must be at least 1".to_string());
        }
        if self.pattern_chunk_size == 0 {
            return Err("pattern_chunk_size must be at least 1".to_string());
        }
        if self.window_size == 0 {
            return Err("window_size must be at least 1".to_string());
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Visual styling for rendered layouts.
///
/// Colors are CSS color strings. Unset colors fall back to renderer defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Option<String>,
    image_color: Option<String>,
    text_color: Option<String>,
    collection_color: Option<String>,
    show_labels: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            image_color: None,
            text_color: None,
            collection_color: None,
            show_labels: true,
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        parse_color("background", self.background_color.as_deref())
    }

    /// Fill for image and GIF placements.
    pub fn image_color(&self) -> Result<Option<Color>, String> {
        parse_color("image", self.image_color.as_deref())
    }

    /// Fill for text, code and unknown placements.
    pub fn text_color(&self) -> Result<Option<Color>, String> {
        parse_color("text", self.text_color.as_deref())
    }

    /// Fill for collection cards.
    pub fn collection_color(&self) -> Result<Option<Color>, String> {
        parse_color("collection", self.collection_color.as_deref())
    }

    /// Whether placements are labelled with their kind and id.
    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    pub fn with_show_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }
}

fn parse_color(field: &str, value: Option<&str>) -> Result<Option<Color>, String> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("Invalid {field} color in config: {err}"))
}
