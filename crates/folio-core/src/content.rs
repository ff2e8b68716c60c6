//! Content items consumed by the layout engine.
//!
//! A portfolio page is an ordered list of [`ContentItem`]s. Each item carries a
//! [`ContentBlock`] whose variant decides which optional fields exist: only
//! image-bearing blocks have intrinsic pixel dimensions, a rating, or a
//! parallax flag.
//!
//! # Wire format
//!
//! Items deserialize from the JSON shape served by the content API:
//!
//! ```json
//! { "id": 7, "orderIndex": 2, "type": "IMAGE",
//!   "imageWidth": 6000, "imageHeight": 4000, "rating": 5 }
//! ```
//!
//! The discriminant is read case-insensitively from `type` (or `kind`).
//! Unrecognised discriminants become [`ContentBlock::Unknown`] rather than
//! errors so newer content types still lay out.

use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::geometry::Size;

/// Lowest rating an image can carry.
pub const MIN_RATING: u8 = 1;

/// Highest rating an image can carry.
pub const MAX_RATING: u8 = 5;

/// Identifier of a content item, numeric or textual depending on the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for ItemId {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Payload-free discriminant of a [`ContentBlock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentKind {
    Image,
    Gif,
    Text,
    Code,
    Collection,
    Unknown,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Image => "IMAGE",
            Self::Gif => "GIF",
            Self::Text => "TEXT",
            Self::Code => "CODE",
            Self::Collection => "COLLECTION",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// Fields specific to image-bearing blocks (`IMAGE` and `GIF`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageBlock {
    image: Option<Size>,
    display: Option<Size>,
    rating: Option<u8>,
    parallax: bool,
}

impl ImageBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the intrinsic pixel dimensions of the underlying asset.
    pub fn with_image_size(mut self, size: Size) -> Self {
        self.image = Some(size);
        self
    }

    /// Sets the explicit display-intent dimensions.
    pub fn with_display_size(mut self, size: Size) -> Self {
        self.display = Some(size);
        self
    }

    /// Sets the star rating, clamped to `MIN_RATING..=MAX_RATING`.
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating.clamp(MIN_RATING, MAX_RATING));
        self
    }

    pub fn with_parallax(mut self, parallax: bool) -> Self {
        self.parallax = parallax;
        self
    }

    pub fn image_size(&self) -> Option<Size> {
        self.image
    }

    pub fn display_size(&self) -> Option<Size> {
        self.display
    }

    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    pub fn parallax(&self) -> bool {
        self.parallax
    }
}

/// Fields for blocks without an underlying image (text, code, cards).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBlock {
    display: Option<Size>,
}

impl TextBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_display_size(mut self, size: Size) -> Self {
        self.display = Some(size);
        self
    }

    pub fn display_size(&self) -> Option<Size> {
        self.display
    }
}

/// The kind-specific payload of a content item.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Image(ImageBlock),
    Gif(ImageBlock),
    Text(TextBlock),
    Code(TextBlock),
    /// A card linking to a nested collection.
    Collection(TextBlock),
    /// A block whose discriminant this version does not know.
    Unknown {
        kind: String,
        display: Option<Size>,
    },
}

impl ContentBlock {
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Image(_) => ContentKind::Image,
            Self::Gif(_) => ContentKind::Gif,
            Self::Text(_) => ContentKind::Text,
            Self::Code(_) => ContentKind::Code,
            Self::Collection(_) => ContentKind::Collection,
            Self::Unknown { .. } => ContentKind::Unknown,
        }
    }

    /// Returns the image fields for `IMAGE` and `GIF` blocks.
    pub fn as_image(&self) -> Option<&ImageBlock> {
        match self {
            Self::Image(block) | Self::Gif(block) => Some(block),
            _ => None,
        }
    }

    /// Explicit display-intent dimensions, whatever the variant.
    pub fn display_size(&self) -> Option<Size> {
        match self {
            Self::Image(block) | Self::Gif(block) => block.display_size(),
            Self::Text(block) | Self::Code(block) | Self::Collection(block) => {
                block.display_size()
            }
            Self::Unknown { display, .. } => *display,
        }
    }
}

/// One entry of a portfolio page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawContentItem")]
pub struct ContentItem {
    id: ItemId,
    order_index: i64,
    visible: bool,
    slug: Option<String>,
    block: ContentBlock,
}

impl ContentItem {
    /// Creates a visible item at order index 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_core::content::{ContentBlock, ContentItem, ImageBlock};
    /// use folio_core::geometry::Size;
    ///
    /// let item = ContentItem::new(
    ///     1,
    ///     ContentBlock::Image(
    ///         ImageBlock::new()
    ///             .with_image_size(Size::new(6000.0, 4000.0))
    ///             .with_rating(5),
    ///     ),
    /// )
    /// .with_order_index(3);
    ///
    /// assert_eq!(item.rating(), Some(5));
    /// assert!(item.is_image_bearing());
    /// ```
    pub fn new(id: impl Into<ItemId>, block: ContentBlock) -> Self {
        Self {
            id: id.into(),
            order_index: 0,
            visible: true,
            slug: None,
            block,
        }
    }

    pub fn with_order_index(mut self, order_index: i64) -> Self {
        self.order_index = order_index;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn order_index(&self) -> i64 {
        self.order_index
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn block(&self) -> &ContentBlock {
        &self.block
    }

    pub fn kind(&self) -> ContentKind {
        self.block.kind()
    }

    /// Star rating of image-bearing blocks, `None` for everything else.
    pub fn rating(&self) -> Option<u8> {
        self.block.as_image().and_then(ImageBlock::rating)
    }

    /// Returns true for items that link to a nested collection.
    ///
    /// Either the block is a [`ContentBlock::Collection`] or the item carries
    /// a slug.
    pub fn is_collection_card(&self) -> bool {
        matches!(self.block, ContentBlock::Collection(_)) || self.slug.is_some()
    }

    /// Returns true for items that display an image: `IMAGE` or `GIF`.
    /// Parallax-flagged items are always image blocks. Collection cards never
    /// count.
    pub fn is_image_bearing(&self) -> bool {
        if self.is_collection_card() {
            return false;
        }
        self.block.as_image().is_some()
    }

    /// Returns true when the item requested a parallax treatment.
    pub fn is_parallax(&self) -> bool {
        self.block.as_image().is_some_and(ImageBlock::parallax)
    }
}

/// Loosely-typed item as served by the content API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContentItem {
    id: ItemId,
    order_index: Option<i64>,
    #[serde(rename = "type", alias = "kind")]
    kind: Option<String>,
    width: Option<f64>,
    height: Option<f64>,
    image_width: Option<f64>,
    image_height: Option<f64>,
    rating: Option<f64>,
    visible: Option<bool>,
    slug: Option<String>,
    #[serde(alias = "parallaxEnabled")]
    parallax: Option<bool>,
}

fn size_pair(width: Option<f64>, height: Option<f64>) -> Option<Size> {
    Size::positive(width?, height?)
}

fn wire_rating(rating: Option<f64>) -> Option<u8> {
    let rating = rating.filter(|r| r.is_finite())?;
    // Clamped first, so the cast cannot truncate.
    Some(rating.round().clamp(MIN_RATING as f64, MAX_RATING as f64) as u8)
}

impl From<RawContentItem> for ContentItem {
    fn from(raw: RawContentItem) -> Self {
        let display = size_pair(raw.width, raw.height);
        let image_block = || ImageBlock {
            image: size_pair(raw.image_width, raw.image_height),
            display,
            rating: wire_rating(raw.rating),
            parallax: raw.parallax.unwrap_or(false),
        };
        let text_block = || TextBlock { display };

        let kind = raw.kind.as_deref().unwrap_or_default();
        let block = match kind.to_ascii_lowercase().as_str() {
            "image" => ContentBlock::Image(image_block()),
            "gif" => ContentBlock::Gif(image_block()),
            "text" => ContentBlock::Text(text_block()),
            "code" => ContentBlock::Code(text_block()),
            "collection" => ContentBlock::Collection(text_block()),
            _ => {
                trace!(id:% = raw.id, kind; "Unrecognised content kind");
                ContentBlock::Unknown {
                    kind: kind.to_string(),
                    display,
                }
            }
        };

        Self {
            id: raw.id,
            order_index: raw.order_index.unwrap_or_default(),
            visible: raw.visible.unwrap_or(true),
            slug: raw.slug,
            block,
        }
    }
}
