//! Row sizing.
//!
//! Items in a row share one height and their widths add up to the container
//! width. Widths are proportional to aspect ratios, so for a row of ratios
//! `r_i` the common height is `W / Σ r_i`. Nothing here rounds; rounding is
//! left to whoever renders the result.

use folio_core::geometry::{Bounds, Point, Size};

use crate::{chunk::chunk, resolve::NormalizedItem};

/// An item with its display size and its offset inside the row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizedItem<'a> {
    item: NormalizedItem<'a>,
    size: Size,
    offset: Point,
}

impl<'a> SizedItem<'a> {
    fn new(item: NormalizedItem<'a>, size: Size, offset: Point) -> Self {
        Self { item, size, offset }
    }

    pub fn item(&self) -> &NormalizedItem<'a> {
        &self.item
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

    /// Top-left corner relative to the row's top-left corner.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Bounds relative to the row.
    pub fn bounds(&self) -> Bounds {
        self.offset.to_bounds(self.size)
    }
}

/// Sizes one row to span `container_width`.
///
/// A single item is shown full bleed at `container_width` wide. Several
/// items share the height `container_width / Σ ratio` and are laid out left
/// to right. An empty row yields no items.
///
/// # Examples
///
/// ```
/// use folio_core::{
///     content::{ContentBlock, ContentItem, ImageBlock},
///     geometry::Size,
/// };
/// use folio_layout::{LayoutOptions, resolve::normalize, size_row};
///
/// let image = |w: f64, h: f64| {
///     ContentItem::new(1, ContentBlock::Image(ImageBlock::new().with_image_size(Size::new(w, h))))
/// };
/// let items = vec![image(1500.0, 1000.0), image(500.0, 1000.0)];
/// let row = normalize(&items, &LayoutOptions::default());
///
/// let sized = size_row(&row, 1200.0);
/// assert_eq!(sized[0].height(), 600.0);
/// assert_eq!(sized[0].width(), 900.0);
/// assert_eq!(sized[1].width(), 300.0);
/// assert_eq!(sized[1].offset().x(), 900.0);
/// ```
pub fn size_row<'a>(row: &[NormalizedItem<'a>], container_width: f64) -> Vec<SizedItem<'a>> {
    if let [item] = row {
        let height = container_width / item.aspect_ratio();
        return vec![SizedItem::new(
            *item,
            Size::new(container_width, height),
            Point::default(),
        )];
    }

    let ratio_sum: f64 = row.iter().map(NormalizedItem::aspect_ratio).sum();
    let common_height = container_width / ratio_sum;

    let mut x = 0.0;
    row.iter()
        .map(|item| {
            let width = item.aspect_ratio() * common_height;
            let sized = SizedItem::new(*item, Size::new(width, common_height), Point::new(x, 0.0));
            x += width;
            sized
        })
        .collect()
}

/// Sizes a composite: `main` on the left, `stacked` in one column on the right.
///
/// The stacked items share the column width and their heights add up to
/// the main item's height. Treating the column as one item of ratio
/// `1 / Σ (1 / r_i)` reduces the problem to a two-item row, so the main
/// width and the column width still add up to `container_width`.
///
/// With nothing to stack, this is [`size_row`] on the main item alone.
pub fn size_stacked<'a>(
    main: NormalizedItem<'a>,
    stacked: &[NormalizedItem<'a>],
    container_width: f64,
) -> Vec<SizedItem<'a>> {
    if stacked.is_empty() {
        return size_row(&[main], container_width);
    }

    let inverse_sum: f64 = stacked.iter().map(|item| 1.0 / item.aspect_ratio()).sum();
    let column_ratio = 1.0 / inverse_sum;

    let height = container_width / (main.aspect_ratio() + column_ratio);
    let main_width = main.aspect_ratio() * height;
    let column_width = column_ratio * height;

    let mut sized = Vec::with_capacity(stacked.len() + 1);
    sized.push(SizedItem::new(
        main,
        Size::new(main_width, height),
        Point::default(),
    ));

    let mut y = 0.0;
    for item in stacked {
        let item_height = column_width / item.aspect_ratio();
        sized.push(SizedItem::new(
            *item,
            Size::new(column_width, item_height),
            Point::new(main_width, y),
        ));
        y += item_height;
    }

    sized
}

/// Chunks `items` and sizes every resulting row.
pub fn process_for_display<'a>(
    items: &[NormalizedItem<'a>],
    container_width: f64,
    chunk_size: usize,
) -> Vec<Vec<SizedItem<'a>>> {
    chunk(items, chunk_size)
        .iter()
        .map(|row| size_row(row.items(), container_width))
        .collect()
}
