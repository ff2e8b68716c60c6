//! Standalone and slot-width classification.

use folio_core::content::{ContentBlock, MAX_RATING};

use crate::resolve::NormalizedItem;

/// Aspect ratio from which an image counts as a wide panorama.
pub const WIDE_PANORAMA_RATIO: f64 = 2.0;

/// Aspect ratio up to which an image counts as a tall panorama.
pub const TALL_PANORAMA_RATIO: f64 = 0.5;

/// Rating from which an image takes a half-row slot in pattern mode.
const PROMINENT_RATING: u8 = 4;

/// Returns true when the item must occupy a row on its own.
///
/// Only image-bearing items qualify: a wide panorama, or a 5-star image that
/// is not vertical. Text, code and collection cards are never standalone.
pub fn is_standalone(item: &NormalizedItem<'_>) -> bool {
    if !item.item().is_image_bearing() {
        return false;
    }

    item.aspect_ratio() >= WIDE_PANORAMA_RATIO
        || (item.rating() == MAX_RATING && !item.is_vertical())
}

/// Slot capacity an item takes out of a pattern-mode row.
///
/// `chunk_size` is the effective slot budget of a row. Standalone items
/// return [`f64::INFINITY`] so they can never share a row.
///
/// | Item                      | Slots            |
/// |---------------------------|------------------|
/// | standalone                | infinite         |
/// | collection card           | `chunk_size / 2` |
/// | text, code, unknown       | `chunk_size / 2` |
/// | image rated 4 or more     | `chunk_size / 2` |
/// | image rated 3 or less     | `chunk_size / 4` |
pub fn slot_width(item: &NormalizedItem<'_>, chunk_size: f64) -> f64 {
    if is_standalone(item) {
        return f64::INFINITY;
    }

    let half = chunk_size / 2.0;
    if item.item().is_collection_card() {
        return half;
    }

    match item.item().block() {
        ContentBlock::Image(_) | ContentBlock::Gif(_) if item.rating() >= PROMINENT_RATING => half,
        ContentBlock::Image(_) | ContentBlock::Gif(_) => chunk_size / 4.0,
        ContentBlock::Text(_)
        | ContentBlock::Code(_)
        | ContentBlock::Collection(_)
        | ContentBlock::Unknown { .. } => half,
    }
}

#[cfg(test)]
mod tests {
    use folio_core::{
        content::{ContentItem, ImageBlock, TextBlock},
        geometry::Size,
    };

    use super::*;
    use crate::options::LayoutOptions;

    fn image(width: f64, height: f64, rating: u8) -> ContentItem {
        ContentItem::new(
            1,
            ContentBlock::Image(
                ImageBlock::new()
                    .with_image_size(Size::new(width, height))
                    .with_rating(rating),
            ),
        )
    }

    fn normalized(item: &ContentItem) -> NormalizedItem<'_> {
        NormalizedItem::new(item, 0, &LayoutOptions::default())
    }

    #[test]
    fn test_wide_panorama_is_standalone() {
        let item = image(3000.0, 1000.0, 1);
        assert!(is_standalone(&normalized(&item)));

        let exactly_two = image(2000.0, 1000.0, 2);
        assert!(is_standalone(&normalized(&exactly_two)));
    }

    #[test]
    fn test_five_star_horizontal_is_standalone() {
        let item = image(1600.0, 1000.0, 5);
        assert!(is_standalone(&normalized(&item)));

        // Squares are not vertical
        let square = image(1000.0, 1000.0, 5);
        assert!(is_standalone(&normalized(&square)));
    }

    #[test]
    fn test_five_star_vertical_is_not_standalone() {
        let item = image(800.0, 1000.0, 5);
        assert!(!is_standalone(&normalized(&item)));
    }

    #[test]
    fn test_ordinary_images_are_not_standalone() {
        let item = image(1500.0, 1000.0, 4);
        assert!(!is_standalone(&normalized(&item)));
    }

    #[test]
    fn test_text_and_cards_are_never_standalone() {
        let text = ContentItem::new(
            1,
            ContentBlock::Text(TextBlock::new().with_display_size(Size::new(3000.0, 100.0))),
        );
        assert!(!is_standalone(&normalized(&text)));

        let card = image(3000.0, 1000.0, 5).with_slug("iceland");
        assert!(!is_standalone(&normalized(&card)));
    }

    #[test]
    fn test_parallax_image_follows_image_rules() {
        let item = ContentItem::new(
            1,
            ContentBlock::Image(
                ImageBlock::new()
                    .with_image_size(Size::new(2400.0, 1000.0))
                    .with_parallax(true),
            ),
        );
        assert!(is_standalone(&normalized(&item)));
    }

    #[test]
    fn test_slot_widths() {
        let chunk = 4.0;

        assert!(slot_width(&normalized(&image(3000.0, 1000.0, 3)), chunk).is_infinite());
        assert_eq!(slot_width(&normalized(&image(800.0, 1000.0, 5)), chunk), 2.0);
        assert_eq!(slot_width(&normalized(&image(1200.0, 1000.0, 4)), chunk), 2.0);
        assert_eq!(slot_width(&normalized(&image(1200.0, 1000.0, 3)), chunk), 1.0);
        assert_eq!(slot_width(&normalized(&image(800.0, 1000.0, 1)), chunk), 1.0);

        let text = ContentItem::new(1, ContentBlock::Text(TextBlock::new()));
        assert_eq!(slot_width(&normalized(&text), chunk), 2.0);
    }

    #[test]
    fn test_collection_card_takes_half_slot() {
        let card = ContentItem::new(1, ContentBlock::Collection(TextBlock::new()));
        assert_eq!(slot_width(&normalized(&card), 4.0), 2.0);

        // The slug wins over the image rules, even for a low-rated image
        let slugged = image(1200.0, 1000.0, 1).with_slug("trip");
        assert_eq!(slot_width(&normalized(&slugged), 6.0), 3.0);
    }
}
