//! Items as seen by the pattern matchers.

use crate::{
    classify::{TALL_PANORAMA_RATIO, WIDE_PANORAMA_RATIO, slot_width},
    resolve::NormalizedItem,
};

/// A normalized item annotated with the flags the matchers test.
///
/// Scoped to one window; rebuilt on every layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowItem<'a> {
    item: NormalizedItem<'a>,
    is_vertical: bool,
    is_wide_panorama: bool,
    is_tall_panorama: bool,
    is_image: bool,
    slot_width: f64,
}

impl<'a> WindowItem<'a> {
    /// Annotates `item` for a row budget of `chunk_size` slots.
    pub fn new(item: NormalizedItem<'a>, chunk_size: f64) -> Self {
        let ratio = item.aspect_ratio();
        Self {
            item,
            is_vertical: item.is_vertical(),
            is_wide_panorama: ratio >= WIDE_PANORAMA_RATIO,
            is_tall_panorama: ratio <= TALL_PANORAMA_RATIO,
            is_image: item.item().is_image_bearing(),
            slot_width: slot_width(&item, chunk_size),
        }
    }

    pub fn item(&self) -> &NormalizedItem<'a> {
        &self.item
    }

    pub fn source_index(&self) -> usize {
        self.item.source_index()
    }

    pub fn rating(&self) -> u8 {
        self.item.rating()
    }

    pub fn is_vertical(&self) -> bool {
        self.is_vertical
    }

    /// Horizontal means "not vertical": squares count as horizontal.
    pub fn is_horizontal(&self) -> bool {
        !self.is_vertical
    }

    pub fn is_wide_panorama(&self) -> bool {
        self.is_wide_panorama
    }

    pub fn is_tall_panorama(&self) -> bool {
        self.is_tall_panorama
    }

    /// Image-bearing and not a collection card.
    pub fn is_image(&self) -> bool {
        self.is_image
    }

    pub fn slot_width(&self) -> f64 {
        self.slot_width
    }

    /// Returns true when the item needs a whole row.
    pub fn is_standalone(&self) -> bool {
        self.slot_width.is_infinite()
    }
}
