//! The positioned output of a layout pass.
//!
//! Rows from the engine carry offsets relative to the row. Here they are
//! stacked top to bottom so every [`Placement`] has absolute coordinates
//! inside the container.

use serde::Serialize;

use folio_core::{
    content::{ContentKind, ItemId},
    geometry::{Bounds, Point, Size},
};
use folio_layout::{PatternKind, SizedItem};

use crate::config::LayoutMode;

/// A positioned content item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    id: ItemId,
    kind: ContentKind,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    collection_card: bool,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Placement {
    fn new(sized: &SizedItem<'_>, row_y: f64) -> Self {
        let item = sized.item().item();
        let origin = sized.offset().with_y_offset(row_y);
        Self {
            id: item.id().clone(),
            kind: item.kind(),
            collection_card: item.is_collection_card(),
            x: origin.x(),
            y: origin.y(),
            width: sized.width(),
            height: sized.height(),
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// Returns true for items rendered as a link to a collection.
    pub fn is_collection_card(&self) -> bool {
        self.collection_card
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Absolute bounds inside the container.
    pub fn bounds(&self) -> Bounds {
        Point::new(self.x, self.y).to_bounds(Size::new(self.width, self.height))
    }
}

/// One row of placements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<PatternKind>,
    y: f64,
    height: f64,
    placements: Vec<Placement>,
}

impl LayoutRow {
    /// Pattern that produced the row; `None` in simple mode.
    pub fn pattern(&self) -> Option<PatternKind> {
        self.pattern
    }

    /// Top edge of the row.
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }
}

/// A complete layout: rows stacked without gaps inside a fixed-width container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    mode: LayoutMode,
    container_width: f64,
    height: f64,
    rows: Vec<LayoutRow>,
}

impl Layout {
    pub(crate) fn new(mode: LayoutMode, container_width: f64) -> Self {
        Self {
            mode,
            container_width,
            height: 0.0,
            rows: Vec::new(),
        }
    }

    /// Appends a row below the existing ones.
    pub(crate) fn push_row(&mut self, pattern: Option<PatternKind>, items: &[SizedItem<'_>]) {
        let y = self.height;
        let height = items
            .iter()
            .map(|item| item.bounds().max_y())
            .fold(0.0, f64::max);
        let placements = items.iter().map(|item| Placement::new(item, y)).collect();

        self.rows.push(LayoutRow {
            pattern,
            y,
            height,
            placements,
        });
        self.height = y + height;
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Total height of all rows.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn rows(&self) -> &[LayoutRow] {
        &self.rows
    }

    /// All placements, row by row.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.rows.iter().flat_map(|row| row.placements.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use folio_core::content::{ContentBlock, ContentItem, ImageBlock, TextBlock};
    use folio_layout::{LayoutOptions, resolve::normalize, size_row};

    use super::*;

    #[test]
    fn test_rows_are_stacked() {
        let items = vec![
            ContentItem::new(
                1,
                ContentBlock::Image(ImageBlock::new().with_image_size(Size::new(1500.0, 1000.0))),
            ),
            ContentItem::new(2, ContentBlock::Text(TextBlock::new())).with_slug("trips"),
        ];
        let normalized = normalize(&items, &LayoutOptions::default());

        let mut layout = Layout::new(LayoutMode::Simple, 600.0);
        layout.push_row(None, &size_row(&normalized[..1], 600.0));
        layout.push_row(None, &size_row(&normalized[1..], 600.0));

        assert_eq!(layout.rows().len(), 2);
        assert_approx_eq!(f64, layout.rows()[0].height(), 400.0);
        assert_approx_eq!(f64, layout.rows()[1].y(), 400.0);
        assert_approx_eq!(f64, layout.height(), 400.0 + 900.0);

        let card = &layout.rows()[1].placements()[0];
        assert_eq!(card.id(), &ItemId::Number(2));
        assert!(card.is_collection_card());
        assert_approx_eq!(f64, card.y(), 400.0);
        assert_approx_eq!(f64, card.bounds().max_y(), layout.height());
        assert_eq!(layout.placements().count(), 2);
    }

    #[test]
    fn test_empty_layout() {
        let layout = Layout::new(LayoutMode::Pattern, 1200.0);

        assert!(layout.is_empty());
        assert_eq!(layout.height(), 0.0);
        assert_eq!(layout.placements().count(), 0);
    }
}
