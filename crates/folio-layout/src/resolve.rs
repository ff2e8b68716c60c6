//! Dimension resolution.
//!
//! Every item entering the layout needs a width, a height and a rating. This
//! module derives them from whatever the item carries, falling back to
//! values synthesized from [`LayoutOptions`] so that no item is ever sized
//! at zero.

use folio_core::{
    content::{ContentBlock, ContentItem, MAX_RATING, MIN_RATING},
    geometry::Size,
};

use crate::options::LayoutOptions;

/// Width, height and rating resolved for one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedDimensions {
    size: Size,
    rating: u8,
}

impl ResolvedDimensions {
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f64 {
        self.size.width()
    }

    pub fn height(&self) -> f64 {
        self.size.height()
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }
}

/// Resolves the layout dimensions and rating of an item.
///
/// - `IMAGE`/`GIF`: intrinsic image size, then display size, then synthesized.
/// - Everything else: display size, then synthesized.
///
/// A candidate size is only used when both sides are finite and positive.
///
/// Synthesized sizes are `base_width` wide and `round(base_width /
/// default_aspect)` tall, floored at one pixel.
///
/// # Examples
///
/// ```
/// use folio_core::content::{ContentBlock, ContentItem, TextBlock};
/// use folio_layout::{LayoutOptions, resolve_dimensions};
///
/// let text = ContentItem::new(1, ContentBlock::Text(TextBlock::new()));
/// let resolved = resolve_dimensions(&text, &LayoutOptions::default());
///
/// assert_eq!(resolved.width(), 1000.0);
/// assert_eq!(resolved.height(), 1500.0);
/// assert_eq!(resolved.rating(), 3);
/// ```
pub fn resolve_dimensions(item: &ContentItem, options: &LayoutOptions) -> ResolvedDimensions {
    let explicit = match item.block() {
        ContentBlock::Image(image) | ContentBlock::Gif(image) => {
            usable(image.image_size()).or_else(|| usable(image.display_size()))
        }
        block => usable(block.display_size()),
    };

    let size = explicit.unwrap_or_else(|| synthesize(options));
    let rating = item
        .rating()
        .unwrap_or(options.default_rating())
        .clamp(MIN_RATING, MAX_RATING);

    ResolvedDimensions { size, rating }
}

fn usable(size: Option<Size>) -> Option<Size> {
    size.and_then(|size| Size::positive(size.width(), size.height()))
}

fn synthesize(options: &LayoutOptions) -> Size {
    let width = options.base_width().max(1.0);
    let height = (width / options.default_aspect()).round().max(1.0);
    Size::new(width, height)
}

/// A content item with its resolved dimensions, valid for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedItem<'a> {
    item: &'a ContentItem,
    size: Size,
    rating: u8,
    source_index: usize,
}

impl<'a> NormalizedItem<'a> {
    /// Resolves `item`, remembering its position in the input list.
    pub fn new(item: &'a ContentItem, source_index: usize, options: &LayoutOptions) -> Self {
        let resolved = resolve_dimensions(item, options);
        Self {
            item,
            size: resolved.size(),
            rating: resolved.rating(),
            source_index,
        }
    }

    /// The original content item.
    pub fn item(&self) -> &'a ContentItem {
        self.item
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f64 {
        self.size.width()
    }

    pub fn height(&self) -> f64 {
        self.size.height()
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Position of the item in the list it was normalized from.
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.size.aspect_ratio()
    }

    pub fn is_vertical(&self) -> bool {
        self.size.is_vertical()
    }
}

/// Normalizes a whole list, keeping its order.
pub fn normalize<'a>(items: &'a [ContentItem], options: &LayoutOptions) -> Vec<NormalizedItem<'a>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| NormalizedItem::new(item, index, options))
        .collect()
}
