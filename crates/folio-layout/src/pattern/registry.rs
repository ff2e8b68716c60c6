use std::cmp::Reverse;

use log::{debug, trace};

use super::{
    FiveStarVerticalMixedMatcher, FiveStarVerticalTwoHorizontalMatcher,
    FiveStarVerticalTwoVerticalMatcher, MainStackedMatcher, PanoramaVerticalMatcher,
    PatternKind, PatternMatcher, PatternResult, StandaloneMatcher, StandardMatcher, WindowItem,
};
use crate::options::LayoutOptions;

/// An ordered set of matchers, tried from highest to lowest priority.
#[derive(Debug)]
pub struct PatternRegistry {
    matchers: Vec<Box<dyn PatternMatcher>>,
}

impl PatternRegistry {
    /// Creates a registry holding the built-in matchers, configured from
    /// `options`.
    pub fn new(options: &LayoutOptions) -> Self {
        let max_movement = options.max_movement();
        let mut registry = Self::empty();
        registry.register(StandaloneMatcher);
        registry.register(FiveStarVerticalTwoVerticalMatcher::new(max_movement));
        registry.register(FiveStarVerticalTwoHorizontalMatcher::new(max_movement));
        registry.register(FiveStarVerticalMixedMatcher::new(max_movement));
        registry.register(MainStackedMatcher::new(max_movement));
        registry.register(PanoramaVerticalMatcher::new(max_movement));
        registry.register(StandardMatcher::new(options.effective_pattern_chunk_size()));
        registry
    }

    /// Creates a registry with no matchers.
    ///
    /// [`run`](Self::run) on an empty registry still falls back to a
    /// standard row, so every non-empty window is consumed.
    pub fn empty() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// Adds a matcher, keeping the list sorted by descending priority.
    ///
    /// Matchers with equal priority keep their registration order.
    pub fn register(&mut self, matcher: impl PatternMatcher + 'static) {
        self.matchers.push(Box::new(matcher));
        self.matchers.sort_by_key(|matcher| Reverse(matcher.priority()));
    }

    /// The registered matchers in the order they are tried.
    pub fn matchers(&self) -> &[Box<dyn PatternMatcher>] {
        &self.matchers
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Returns the first valid result for `window`.
    ///
    /// A result is valid when it consumes at least one item and only items
    /// from the window. When no matcher produces one, a single-item standard
    /// row is returned. Returns `None` only for an empty window.
    pub fn run(&self, window: &[WindowItem<'_>], window_start: usize) -> Option<PatternResult> {
        let first = window.first()?;

        for matcher in &self.matchers {
            if window.len() < matcher.min_items() || !matcher.can_match(window) {
                continue;
            }
            let Some(result) = matcher.try_match(window, window_start) else {
                trace!(pattern:% = matcher.kind(), window_start; "Matcher declined window");
                continue;
            };
            if !Self::is_valid(window, &result) {
                debug!(
                    pattern:% = matcher.kind(),
                    indices:? = result.indices();
                    "Discarding invalid pattern result"
                );
                continue;
            }
            debug_assert!(
                matcher.max_items().is_none_or(|max| result.len() <= max),
                "{} consumed more items than it declares",
                matcher.kind(),
            );
            trace!(pattern:% = result.kind(), indices:? = result.indices(); "Matched pattern");
            return Some(result);
        }

        debug!(window_start; "No matcher accepted window, emitting single item");
        Some(PatternResult::row(
            PatternKind::Standard,
            window_start,
            vec![first.source_index()],
        ))
    }

    fn is_valid(window: &[WindowItem<'_>], result: &PatternResult) -> bool {
        !result.is_empty()
            && result.indices().iter().all(|&index| {
                window.iter().any(|item| item.source_index() == index)
            })
            && !has_duplicates(result.indices())
    }
}

fn has_duplicates(indices: &[usize]) -> bool {
    indices
        .iter()
        .enumerate()
        .any(|(position, index)| indices[..position].contains(index))
}

#[cfg(test)]
mod tests {
    use folio_core::{
        content::{ContentBlock, ContentItem, ImageBlock},
        geometry::Size,
    };

    use super::*;
    use crate::resolve::normalize;

    fn image(width: f64, height: f64, rating: u8) -> ContentItem {
        ContentItem::new(
            0,
            ContentBlock::Image(
                ImageBlock::new()
                    .with_image_size(Size::new(width, height))
                    .with_rating(rating),
            ),
        )
    }

    fn window_of<'a>(items: &'a [ContentItem], options: &LayoutOptions) -> Vec<WindowItem<'a>> {
        normalize(items, options)
            .into_iter()
            .map(|item| WindowItem::new(item, options.effective_pattern_chunk_size()))
            .collect()
    }

    /// Claims items that are not in the window.
    #[derive(Debug)]
    struct RogueMatcher;

    impl PatternMatcher for RogueMatcher {
        fn kind(&self) -> PatternKind {
            PatternKind::MainStacked
        }

        fn priority(&self) -> u32 {
            1000
        }

        fn min_items(&self) -> usize {
            1
        }

        fn max_items(&self) -> Option<usize> {
            None
        }

        fn can_match(&self, _window: &[WindowItem<'_>]) -> bool {
            true
        }

        fn try_match(&self, _window: &[WindowItem<'_>], window_start: usize) -> Option<PatternResult> {
            Some(PatternResult::row(PatternKind::MainStacked, window_start, vec![99]))
        }
    }

    #[test]
    fn test_default_matchers_sorted_by_priority() {
        let registry = PatternRegistry::new(&LayoutOptions::default());
        let kinds: Vec<PatternKind> = registry.matchers().iter().map(|matcher| matcher.kind()).collect();

        assert_eq!(
            kinds,
            vec![
                PatternKind::Standalone,
                PatternKind::FiveStarVerticalTwoVertical,
                PatternKind::FiveStarVerticalTwoHorizontal,
                PatternKind::FiveStarVerticalMixed,
                PatternKind::MainStacked,
                PatternKind::PanoramaVertical,
                PatternKind::Standard,
            ]
        );
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn test_standalone_wins_over_composites() {
        let options = LayoutOptions::default();
        let items = vec![
            image(3000.0, 1000.0, 5),
            image(1000.0, 1500.0, 5),
            image(1000.0, 1500.0, 2),
            image(1000.0, 1500.0, 2),
        ];
        let window = window_of(&items, &options);

        let result = PatternRegistry::new(&options).run(&window, 0).expect("result");
        assert_eq!(result.kind(), PatternKind::Standalone);
        assert_eq!(result.indices(), &[0]);
    }

    #[test]
    fn test_five_star_portrait_composite() {
        let options = LayoutOptions::default();
        let items = vec![
            image(1000.0, 1500.0, 5),
            image(1000.0, 1500.0, 3),
            image(1000.0, 1500.0, 2),
        ];
        let window = window_of(&items, &options);

        let result = PatternRegistry::new(&options).run(&window, 0).expect("result");
        assert_eq!(result.kind(), PatternKind::FiveStarVerticalTwoVertical);
        assert_eq!(result.main(), Some(0));
    }

    #[test]
    fn test_empty_registry_falls_back() {
        let options = LayoutOptions::default();
        let items = vec![image(1500.0, 1000.0, 3), image(1500.0, 1000.0, 3)];
        let window = window_of(&items, &options);

        let registry = PatternRegistry::empty();
        assert!(registry.is_empty());

        let result = registry.run(&window, 5).expect("result");
        assert_eq!(result.kind(), PatternKind::Standard);
        assert_eq!(result.indices(), &[0]);
        assert_eq!(result.start(), 5);
    }

    #[test]
    fn test_invalid_result_is_discarded() {
        let options = LayoutOptions::default();
        let items = vec![image(1500.0, 1000.0, 3), image(1500.0, 1000.0, 3)];
        let window = window_of(&items, &options);

        let mut registry = PatternRegistry::new(&options);
        registry.register(RogueMatcher);

        let result = registry.run(&window, 0).expect("result");
        assert_eq!(result.kind(), PatternKind::Standard);
        assert_eq!(result.indices(), &[0, 1]);
    }

    #[test]
    fn test_empty_window() {
        let registry = PatternRegistry::new(&LayoutOptions::default());
        assert!(registry.run(&[], 0).is_none());
    }

    #[test]
    fn test_has_duplicates() {
        assert!(has_duplicates(&[1, 2, 1]));
        assert!(!has_duplicates(&[1, 2, 3]));
        assert!(!has_duplicates(&[]));
    }
}
