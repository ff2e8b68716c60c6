//! Folio layout engine.
//!
//! Turns an ordered list of [`ContentItem`](folio_core::content::ContentItem)s
//! into rows of sized items. Every function in this crate is pure: the same
//! input always yields the same rows, and nothing is cached between calls.
//!
//! The pipeline is:
//!
//! 1. [`resolve`] derives a width, height and rating for every item.
//! 2. Items are grouped into rows, either by the simple [`chunk`]er or by the
//!    [`pattern`] registry which recognises richer compositions.
//! 3. [`row`] sizes each row so its items share one height and span the
//!    container width exactly.
//!
//! # Examples
//!
//! ```
//! use folio_core::{
//!     content::{ContentBlock, ContentItem, ImageBlock},
//!     geometry::Size,
//! };
//! use folio_layout::{LayoutOptions, process_for_display, resolve::normalize};
//!
//! let items = vec![
//!     ContentItem::new(1, ContentBlock::Image(ImageBlock::new().with_image_size(Size::new(1500.0, 1000.0)))),
//!     ContentItem::new(2, ContentBlock::Image(ImageBlock::new().with_image_size(Size::new(500.0, 1000.0)))),
//! ];
//!
//! let options = LayoutOptions::default();
//! let normalized = normalize(&items, &options);
//! let rows = process_for_display(&normalized, 1200.0, options.chunk_size());
//!
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0][0].width(), 900.0);
//! assert_eq!(rows[0][1].width(), 300.0);
//! ```

pub mod chunk;
pub mod classify;
pub mod options;
pub mod pattern;
pub mod resolve;
pub mod row;

pub use chunk::{Row, chunk};
pub use classify::{is_standalone, slot_width};
pub use options::LayoutOptions;
pub use pattern::{
    PatternKind, PatternMatcher, PatternRegistry, PatternResult, PatternRow, match_all,
    process_patterns_for_display,
};
pub use resolve::{NormalizedItem, ResolvedDimensions, resolve_dimensions};
pub use row::{SizedItem, process_for_display, size_row, size_stacked};
