//! Pattern-mode layout.
//!
//! Instead of fixed-size chunks, pattern mode looks at a sliding window of
//! upcoming items and recognises named compositions, such as a 5-star
//! portrait flanked by two stacked secondaries. Matchers are tried in
//! descending priority through a [`PatternRegistry`]; the `standard` matcher
//! is the catch-all that always consumes at least one item.
//!
//! A matcher may reorder items, but never by more than the configured
//! movement distance: see [`within_movement`].

mod driver;
mod matchers;
mod registry;
mod window;

pub use driver::{PatternRow, match_all, match_all_with, process_patterns_for_display};
pub use matchers::{
    FiveStarVerticalMixedMatcher, FiveStarVerticalTwoHorizontalMatcher,
    FiveStarVerticalTwoVerticalMatcher, MainStackedMatcher, PanoramaVerticalMatcher,
    StandaloneMatcher, StandardMatcher,
};
pub use registry::PatternRegistry;
pub use window::WindowItem;

use std::fmt;

use serde::Serialize;

/// Named compositions recognised by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PatternKind {
    #[serde(rename = "standalone")]
    Standalone,
    #[serde(rename = "five-star-vertical-2v")]
    FiveStarVerticalTwoVertical,
    #[serde(rename = "five-star-vertical-2h")]
    FiveStarVerticalTwoHorizontal,
    #[serde(rename = "five-star-vertical-mixed")]
    FiveStarVerticalMixed,
    #[serde(rename = "main-stacked")]
    MainStacked,
    #[serde(rename = "panorama-vertical")]
    PanoramaVertical,
    #[serde(rename = "standard")]
    Standard,
}

impl PatternKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Standalone => "standalone",
            Self::FiveStarVerticalTwoVertical => "five-star-vertical-2v",
            Self::FiveStarVerticalTwoHorizontal => "five-star-vertical-2h",
            Self::FiveStarVerticalMixed => "five-star-vertical-mixed",
            Self::MainStacked => "main-stacked",
            Self::PanoramaVertical => "panorama-vertical",
            Self::Standard => "standard",
        }
    }

    /// Returns true for the main-plus-stacked-secondaries compositions.
    pub fn is_composite(self) -> bool {
        matches!(
            self,
            Self::FiveStarVerticalTwoVertical
                | Self::FiveStarVerticalTwoHorizontal
                | Self::FiveStarVerticalMixed
                | Self::MainStacked
                | Self::PanoramaVertical
        )
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The arrangement a matcher committed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternResult {
    kind: PatternKind,
    start: usize,
    indices: Vec<usize>,
    main: Option<usize>,
}

impl PatternResult {
    /// Creates a result for a plain row of items.
    ///
    /// `start` is the position in the output stream where the window began;
    /// `indices` are the items' source indices in display order.
    pub fn row(kind: PatternKind, start: usize, indices: Vec<usize>) -> Self {
        Self {
            kind,
            start,
            indices,
            main: None,
        }
    }

    /// Creates a result for a main item with stacked secondaries.
    ///
    /// The main item is displayed first, followed by the secondaries in the
    /// given order.
    pub fn composite(kind: PatternKind, start: usize, main: usize, secondaries: &[usize]) -> Self {
        let mut indices = Vec::with_capacity(secondaries.len() + 1);
        indices.push(main);
        indices.extend_from_slice(secondaries);
        Self {
            kind,
            start,
            indices,
            main: Some(main),
        }
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Source indices of the consumed items, in display order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Source index of the main item of a composite.
    pub fn main(&self) -> Option<usize> {
        self.main
    }

    /// Source indices displayed beside the main item.
    pub fn secondaries(&self) -> &[usize] {
        match self.main {
            Some(_) => &self.indices[1..],
            None => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// A named composition that can be recognised in a window of items.
///
/// Matchers never fail: they either commit to an arrangement or return
/// `None` and let the registry try the next one.
pub trait PatternMatcher: fmt::Debug + Send + Sync {
    fn kind(&self) -> PatternKind;

    /// Higher priorities are tried first.
    fn priority(&self) -> u32;

    /// Fewest items the window must hold for this matcher to be tried.
    fn min_items(&self) -> usize;

    /// Most items a match consumes; `None` when unbounded.
    fn max_items(&self) -> Option<usize>;

    /// Cheap pre-check on the window.
    fn can_match(&self, window: &[WindowItem<'_>]) -> bool;

    /// Detects the composition and commits to an arrangement.
    ///
    /// `window_start` is the output position of the window's first item.
    fn try_match(&self, window: &[WindowItem<'_>], window_start: usize) -> Option<PatternResult>;
}

/// Checks that no item in `arrangement` moves more than `max_movement`
/// positions away from its place in `window`.
///
/// `arrangement` holds source indices in display order. The item displayed
/// `k`-th is compared against its position in the window; an index missing
/// from the window fails the check.
pub fn within_movement(window: &[WindowItem<'_>], arrangement: &[usize], max_movement: usize) -> bool {
    arrangement.iter().enumerate().all(|(final_rank, &index)| {
        window
            .iter()
            .position(|item| item.source_index() == index)
            .is_some_and(|window_rank| window_rank.abs_diff(final_rank) <= max_movement)
    })
}
