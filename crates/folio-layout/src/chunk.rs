//! Simple-mode chunking.
//!
//! Walks the items once, left to right. Standalone items get a row of their
//! own; everything else is grouped into rows of `chunk_size` items. Row
//! boundaries depend only on the input order and [`is_standalone`].

use std::mem;

use crate::{classify::is_standalone, resolve::NormalizedItem};

/// An ordered, non-empty group of items that render side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a> {
    items: Vec<NormalizedItem<'a>>,
}

impl<'a> Row<'a> {
    fn new(items: Vec<NormalizedItem<'a>>) -> Self {
        debug_assert!(!items.is_empty(), "rows are never empty");
        Self { items }
    }

    pub fn items(&self) -> &[NormalizedItem<'a>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<NormalizedItem<'a>> {
        self.items
    }
}

/// Groups items into rows.
///
/// A `chunk_size` of zero behaves like one.
///
/// # Examples
///
/// ```
/// use folio_core::{
///     content::{ContentBlock, ContentItem, ImageBlock},
///     geometry::Size,
/// };
/// use folio_layout::{LayoutOptions, chunk, resolve::normalize};
///
/// let image = |id: i64, w: f64, h: f64| {
///     ContentItem::new(id, ContentBlock::Image(ImageBlock::new().with_image_size(Size::new(w, h))))
/// };
/// let items = vec![image(1, 100.0, 100.0), image(2, 100.0, 100.0), image(3, 300.0, 100.0)];
///
/// let normalized = normalize(&items, &LayoutOptions::default());
/// let rows = chunk(&normalized, 2);
///
/// assert_eq!(rows.iter().map(|row| row.len()).collect::<Vec<_>>(), vec![2, 1]);
/// ```
pub fn chunk<'a>(items: &[NormalizedItem<'a>], chunk_size: usize) -> Vec<Row<'a>> {
    let chunk_size = chunk_size.max(1);
    let mut rows = Vec::new();
    let mut pending = Vec::with_capacity(chunk_size);

    for item in items {
        if is_standalone(item) {
            if !pending.is_empty() {
                rows.push(Row::new(mem::take(&mut pending)));
            }
            rows.push(Row::new(vec![*item]));
            continue;
        }

        pending.push(*item);
        if pending.len() == chunk_size {
            rows.push(Row::new(mem::take(&mut pending)));
        }
    }

    if !pending.is_empty() {
        rows.push(Row::new(pending));
    }

    rows
}
