//! The built-in pattern matchers.
//!
//! Composite matchers share one shape: pick a main item close to the start
//! of the window, pick two secondaries close to the main item, then check
//! the movement constraint. They differ only in which items qualify and how
//! ties between candidates are broken.

use folio_core::content::MAX_RATING;

use super::{PatternKind, PatternMatcher, PatternResult, WindowItem, within_movement};

const STANDALONE_PRIORITY: u32 = 100;
const FIVE_STAR_VERTICAL_2V_PRIORITY: u32 = 95;
const FIVE_STAR_VERTICAL_2H_PRIORITY: u32 = 94;
const FIVE_STAR_VERTICAL_MIXED_PRIORITY: u32 = 93;
const MAIN_STACKED_PRIORITY: u32 = 80;
const PANORAMA_VERTICAL_PRIORITY: u32 = 75;
const STANDARD_PRIORITY: u32 = 0;

/// Items in every composite: one main plus two secondaries.
const COMPOSITE_ITEMS: usize = 3;

/// Distance within which main-stacked candidates get a proximity bonus.
const CLOSE_DISTANCE: usize = 2;

/// Tolerance when comparing summed slot widths against the row budget.
const SLOT_EPSILON: f64 = 1e-9;

/// Window positions that may host the main item, in window order.
///
/// The main item is moved to the front of the arrangement, so it must sit
/// within `max_movement` of the window start.
fn main_positions(
    window: &[WindowItem<'_>],
    max_movement: usize,
    is_main: impl Fn(&WindowItem<'_>) -> bool,
) -> Vec<usize> {
    window
        .iter()
        .enumerate()
        .take(max_movement + 1)
        .filter(|(_, item)| is_main(item))
        .map(|(position, _)| position)
        .collect()
}

/// Window positions of images within `max_movement` of `main_position`
/// that satisfy `accept`, in window order.
fn neighbours(
    window: &[WindowItem<'_>],
    main_position: usize,
    max_movement: usize,
    accept: impl Fn(&WindowItem<'_>) -> bool,
) -> Vec<usize> {
    window
        .iter()
        .enumerate()
        .filter(|&(position, item)| {
            position != main_position
                && position.abs_diff(main_position) <= max_movement
                && item.is_image()
                && accept(item)
        })
        .map(|(position, _)| position)
        .collect()
}

/// Keeps the `count` candidates closest to the main item, breaking ties by
/// lower rating first, then by window order.
fn nearest_lowest_rated(
    window: &[WindowItem<'_>],
    main_position: usize,
    mut candidates: Vec<usize>,
    count: usize,
) -> Option<Vec<usize>> {
    if candidates.len() < count {
        return None;
    }
    candidates.sort_by_key(|&position| {
        (
            position.abs_diff(main_position),
            window[position].rating(),
            position,
        )
    });
    candidates.truncate(count);
    Some(candidates)
}

/// Builds the arrangement `[main, secondaries in window order]` and checks
/// the movement constraint.
fn commit(
    kind: PatternKind,
    window: &[WindowItem<'_>],
    window_start: usize,
    main_position: usize,
    mut secondary_positions: Vec<usize>,
    max_movement: usize,
) -> Option<PatternResult> {
    secondary_positions.sort_unstable();
    let secondaries: Vec<usize> = secondary_positions
        .iter()
        .map(|&position| window[position].source_index())
        .collect();

    let result = PatternResult::composite(
        kind,
        window_start,
        window[main_position].source_index(),
        &secondaries,
    );

    within_movement(window, result.indices(), max_movement).then_some(result)
}

/// Tries every eligible main item in window order and returns the first
/// arrangement that passes the movement check.
fn match_composite(
    kind: PatternKind,
    window: &[WindowItem<'_>],
    window_start: usize,
    max_movement: usize,
    is_main: impl Fn(&WindowItem<'_>) -> bool,
    select: impl Fn(usize) -> Option<Vec<usize>>,
) -> Option<PatternResult> {
    main_positions(window, max_movement, is_main)
        .into_iter()
        .find_map(|main_position| {
            let secondaries = select(main_position)?;
            commit(
                kind,
                window,
                window_start,
                main_position,
                secondaries,
                max_movement,
            )
        })
}

fn is_five_star_vertical(item: &WindowItem<'_>) -> bool {
    item.is_image() && item.is_vertical() && item.rating() == MAX_RATING && !item.is_standalone()
}

/// A standalone item at the head of the window gets a row to itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandaloneMatcher;

impl PatternMatcher for StandaloneMatcher {
    fn kind(&self) -> PatternKind {
        PatternKind::Standalone
    }

    fn priority(&self) -> u32 {
        STANDALONE_PRIORITY
    }

    fn min_items(&self) -> usize {
        1
    }

    fn max_items(&self) -> Option<usize> {
        Some(1)
    }

    fn can_match(&self, window: &[WindowItem<'_>]) -> bool {
        window.first().is_some_and(WindowItem::is_standalone)
    }

    fn try_match(&self, window: &[WindowItem<'_>], window_start: usize) -> Option<PatternResult> {
        let first = window.first().filter(|item| item.is_standalone())?;
        Some(PatternResult::row(
            PatternKind::Standalone,
            window_start,
            vec![first.source_index()],
        ))
    }
}

/// A 5-star portrait with two lower-rated portraits stacked beside it.
#[derive(Debug, Clone, Copy)]
pub struct FiveStarVerticalTwoVerticalMatcher {
    max_movement: usize,
}

impl FiveStarVerticalTwoVerticalMatcher {
    pub fn new(max_movement: usize) -> Self {
        Self { max_movement }
    }
}

impl PatternMatcher for FiveStarVerticalTwoVerticalMatcher {
    fn kind(&self) -> PatternKind {
        PatternKind::FiveStarVerticalTwoVertical
    }

    fn priority(&self) -> u32 {
        FIVE_STAR_VERTICAL_2V_PRIORITY
    }

    fn min_items(&self) -> usize {
        COMPOSITE_ITEMS
    }

    fn max_items(&self) -> Option<usize> {
        Some(COMPOSITE_ITEMS)
    }

    fn can_match(&self, window: &[WindowItem<'_>]) -> bool {
        !main_positions(window, self.max_movement, is_five_star_vertical).is_empty()
    }

    fn try_match(&self, window: &[WindowItem<'_>], window_start: usize) -> Option<PatternResult> {
        match_composite(
            self.kind(),
            window,
            window_start,
            self.max_movement,
            is_five_star_vertical,
            |main_position| {
                let candidates = neighbours(window, main_position, self.max_movement, |item| {
                    item.is_vertical() && item.rating() < MAX_RATING && !item.is_standalone()
                });
                nearest_lowest_rated(window, main_position, candidates, 2)
            },
        )
    }
}

/// A 5-star portrait with two modest (3 stars or less) landscapes stacked
/// beside it.
#[derive(Debug, Clone, Copy)]
pub struct FiveStarVerticalTwoHorizontalMatcher {
    max_movement: usize,
}

impl FiveStarVerticalTwoHorizontalMatcher {
    pub fn new(max_movement: usize) -> Self {
        Self { max_movement }
    }
}

impl PatternMatcher for FiveStarVerticalTwoHorizontalMatcher {
    fn kind(&self) -> PatternKind {
        PatternKind::FiveStarVerticalTwoHorizontal
    }

    fn priority(&self) -> u32 {
        FIVE_STAR_VERTICAL_2H_PRIORITY
    }

    fn min_items(&self) -> usize {
        COMPOSITE_ITEMS
    }

    fn max_items(&self) -> Option<usize> {
        Some(COMPOSITE_ITEMS)
    }

    fn can_match(&self, window: &[WindowItem<'_>]) -> bool {
        !main_positions(window, self.max_movement, is_five_star_vertical).is_empty()
    }

    fn try_match(&self, window: &[WindowItem<'_>], window_start: usize) -> Option<PatternResult> {
        match_composite(
            self.kind(),
            window,
            window_start,
            self.max_movement,
            is_five_star_vertical,
            |main_position| {
                let candidates = neighbours(window, main_position, self.max_movement, |item| {
                    item.is_horizontal() && item.rating() <= 3 && !item.is_standalone()
                });
                nearest_lowest_rated(window, main_position, candidates, 2)
            },
        )
    }
}

/// A 5-star portrait with one 3-4 star portrait and one landscape rated
/// below 3. The first qualifying candidates in window order are taken.
#[derive(Debug, Clone, Copy)]
pub struct FiveStarVerticalMixedMatcher {
    max_movement: usize,
}

impl FiveStarVerticalMixedMatcher {
    pub fn new(max_movement: usize) -> Self {
        Self { max_movement }
    }
}

impl PatternMatcher for FiveStarVerticalMixedMatcher {
    fn kind(&self) -> PatternKind {
        PatternKind::FiveStarVerticalMixed
    }

    fn priority(&self) -> u32 {
        FIVE_STAR_VERTICAL_MIXED_PRIORITY
    }

    fn min_items(&self) -> usize {
        COMPOSITE_ITEMS
    }

    fn max_items(&self) -> Option<usize> {
        Some(COMPOSITE_ITEMS)
    }

    fn can_match(&self, window: &[WindowItem<'_>]) -> bool {
        !main_positions(window, self.max_movement, is_five_star_vertical).is_empty()
    }

    fn try_match(&self, window: &[WindowItem<'_>], window_start: usize) -> Option<PatternResult> {
        match_composite(
            self.kind(),
            window,
            window_start,
            self.max_movement,
            is_five_star_vertical,
            |main_position| {
                let vertical = neighbours(window, main_position, self.max_movement, |item| {
                    item.is_vertical() && (3..=4).contains(&item.rating())
                })
                .into_iter()
                .next()?;
                let horizontal = neighbours(window, main_position, self.max_movement, |item| {
                    item.is_horizontal() && item.rating() < 3 && !item.is_standalone()
                })
                .into_iter()
                .next()?;
                Some(vec![vertical, horizontal])
            },
        )
    }
}

/// A 3-4 star image of any orientation with two secondaries chosen by score.
///
/// Lower scores win. A candidate rated at least as high as the main item is
/// pushed back hard; otherwise lower ratings, portraits and proximity are
/// preferred.
#[derive(Debug, Clone, Copy)]
pub struct MainStackedMatcher {
    max_movement: usize,
}

impl MainStackedMatcher {
    pub fn new(max_movement: usize) -> Self {
        Self { max_movement }
    }

    fn is_main(item: &WindowItem<'_>) -> bool {
        item.is_image() && (3..=4).contains(&item.rating()) && !item.is_standalone()
    }

    fn score(main: &WindowItem<'_>, candidate: &WindowItem<'_>, distance: usize) -> i64 {
        let mut score = 0;
        if candidate.rating() >= main.rating() {
            score += 100;
        } else {
            score += i64::from(candidate.rating()) * 10;
        }
        if candidate.is_vertical() {
            score -= 5;
        }
        score += 2 * distance as i64;
        if distance <= CLOSE_DISTANCE {
            score -= 10;
        }
        score
    }
}

impl PatternMatcher for MainStackedMatcher {
    fn kind(&self) -> PatternKind {
        PatternKind::MainStacked
    }

    fn priority(&self) -> u32 {
        MAIN_STACKED_PRIORITY
    }

    fn min_items(&self) -> usize {
        COMPOSITE_ITEMS
    }

    fn max_items(&self) -> Option<usize> {
        Some(COMPOSITE_ITEMS)
    }

    fn can_match(&self, window: &[WindowItem<'_>]) -> bool {
        !main_positions(window, self.max_movement, Self::is_main).is_empty()
    }

    fn try_match(&self, window: &[WindowItem<'_>], window_start: usize) -> Option<PatternResult> {
        match_composite(
            self.kind(),
            window,
            window_start,
            self.max_movement,
            Self::is_main,
            |main_position| {
                let main = &window[main_position];
                let mut scored: Vec<(i64, usize)> =
                    neighbours(window, main_position, self.max_movement, |item| {
                        !item.is_standalone()
                    })
                    .into_iter()
                    .map(|position| {
                        let distance = position.abs_diff(main_position);
                        (Self::score(main, &window[position], distance), position)
                    })
                    .collect();

                if scored.len() < 2 {
                    return None;
                }
                scored.sort();
                Some(scored.iter().take(2).map(|&(_, position)| position).collect())
            },
        )
    }
}

/// A portrait with two wide panoramas stacked beside it.
#[derive(Debug, Clone, Copy)]
pub struct PanoramaVerticalMatcher {
    max_movement: usize,
}

impl PanoramaVerticalMatcher {
    pub fn new(max_movement: usize) -> Self {
        Self { max_movement }
    }

    fn is_main(item: &WindowItem<'_>) -> bool {
        item.is_image() && item.is_vertical()
    }
}

impl PatternMatcher for PanoramaVerticalMatcher {
    fn kind(&self) -> PatternKind {
        PatternKind::PanoramaVertical
    }

    fn priority(&self) -> u32 {
        PANORAMA_VERTICAL_PRIORITY
    }

    fn min_items(&self) -> usize {
        COMPOSITE_ITEMS
    }

    fn max_items(&self) -> Option<usize> {
        Some(COMPOSITE_ITEMS)
    }

    fn can_match(&self, window: &[WindowItem<'_>]) -> bool {
        window.iter().filter(|item| item.is_wide_panorama()).count() >= 2
            && !main_positions(window, self.max_movement, Self::is_main).is_empty()
    }

    fn try_match(&self, window: &[WindowItem<'_>], window_start: usize) -> Option<PatternResult> {
        match_composite(
            self.kind(),
            window,
            window_start,
            self.max_movement,
            Self::is_main,
            |main_position| {
                let candidates = neighbours(window, main_position, self.max_movement, |item| {
                    item.is_wide_panorama()
                });
                nearest_lowest_rated(window, main_position, candidates, 2)
            },
        )
    }
}

/// Fallback: packs items in window order while their slot widths fit the
/// row budget.
///
/// Always consumes at least the first item, even if it overflows the budget
/// on its own, so any non-empty window produces a result.
#[derive(Debug, Clone, Copy)]
pub struct StandardMatcher {
    budget: f64,
}

impl StandardMatcher {
    /// Creates a matcher packing rows of `budget` slots.
    pub fn new(budget: f64) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }
}

impl PatternMatcher for StandardMatcher {
    fn kind(&self) -> PatternKind {
        PatternKind::Standard
    }

    fn priority(&self) -> u32 {
        STANDARD_PRIORITY
    }

    fn min_items(&self) -> usize {
        1
    }

    fn max_items(&self) -> Option<usize> {
        None
    }

    fn can_match(&self, window: &[WindowItem<'_>]) -> bool {
        !window.is_empty()
    }

    fn try_match(&self, window: &[WindowItem<'_>], window_start: usize) -> Option<PatternResult> {
        let mut used = 0.0;
        let mut indices = Vec::new();

        for item in window {
            let next = used + item.slot_width();
            if !indices.is_empty() && next > self.budget + SLOT_EPSILON {
                break;
            }
            indices.push(item.source_index());
            used = next;
            if used >= self.budget - SLOT_EPSILON {
                break;
            }
        }

        (!indices.is_empty()).then(|| PatternResult::row(PatternKind::Standard, window_start, indices))
    }
}

#[cfg(test)]
mod tests {
    use folio_core::{
        content::{ContentBlock, ContentItem, ImageBlock, TextBlock},
        geometry::Size,
    };

    use super::*;
    use crate::{options::LayoutOptions, resolve::normalize};

    const CHUNK: f64 = 4.0;

    /// Portrait 2:3
    fn v(rating: u8) -> ContentItem {
        image(1000.0, 1500.0, rating)
    }

    /// Landscape 3:2
    fn h(rating: u8) -> ContentItem {
        image(1500.0, 1000.0, rating)
    }

    /// Wide panorama 3:1
    fn pano(rating: u8) -> ContentItem {
        image(3000.0, 1000.0, rating)
    }

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

    fn text() -> ContentItem {
        ContentItem::new(0, ContentBlock::Text(TextBlock::new()))
    }

    fn window_of(items: &[ContentItem]) -> Vec<WindowItem<'_>> {
        normalize(items, &LayoutOptions::default())
            .into_iter()
            .map(|item| WindowItem::new(item, CHUNK))
            .collect()
    }

    #[test]
    fn test_standalone_matches_head_only() {
        let items = vec![pano(3), v(3)];
        let window = window_of(&items);

        let result = StandaloneMatcher.try_match(&window, 7).expect("standalone");
        assert_eq!(result.kind(), PatternKind::Standalone);
        assert_eq!(result.indices(), &[0]);
        assert_eq!(result.start(), 7);

        let items = vec![v(3), pano(3)];
        let window = window_of(&items);
        assert!(!StandaloneMatcher.can_match(&window));
        assert!(StandaloneMatcher.try_match(&window, 0).is_none());
    }

    #[test]
    fn test_five_star_vertical_two_vertical() {
        let items = vec![v(3), v(5), v(2), h(1), v(4)];
        let window = window_of(&items);
        let matcher = FiveStarVerticalTwoVerticalMatcher::new(2);

        assert!(matcher.can_match(&window));
        let result = matcher.try_match(&window, 0).expect("match");
        assert_eq!(result.main(), Some(1));
        // Positions 0 and 2 are both at distance 1; position 4 is further away
        assert_eq!(result.indices(), &[1, 0, 2]);
    }

    #[test]
    fn test_five_star_vertical_tie_break_by_rating() {
        // Candidates at distance 1 (rating 4) and distance 2 (ratings 3 and 1)
        let items = vec![v(5), v(4), v(3), h(2), h(2)];
        let window = window_of(&items);
        let matcher = FiveStarVerticalTwoVerticalMatcher::new(2);

        let result = matcher.try_match(&window, 0).expect("match");
        assert_eq!(result.indices(), &[0, 1, 2]);

        let items = vec![v(3), v(2), v(5), v(1), v(4)];
        let window = window_of(&items);
        let result = matcher.try_match(&window, 0).expect("match");
        // Distance-1 candidates are positions 1 (rating 2) and 3 (rating 1)
        assert_eq!(result.indices(), &[2, 1, 3]);
    }

    #[test]
    fn test_five_star_vertical_needs_two_secondaries() {
        let items = vec![v(5), v(3), h(3)];
        let window = window_of(&items);

        assert!(FiveStarVerticalTwoVerticalMatcher::new(2).try_match(&window, 0).is_none());
    }

    #[test]
    fn test_five_star_vertical_two_horizontal() {
        let items = vec![h(4), v(5), h(3), h(1)];
        let window = window_of(&items);
        let matcher = FiveStarVerticalTwoHorizontalMatcher::new(2);

        let result = matcher.try_match(&window, 0).expect("match");
        assert_eq!(result.kind(), PatternKind::FiveStarVerticalTwoHorizontal);
        // h(4) is rated too high
        assert_eq!(result.indices(), &[1, 2, 3]);
    }

    #[test]
    fn test_five_star_vertical_two_horizontal_tie_break() {
        let matcher = FiveStarVerticalTwoHorizontalMatcher::new(2);

        // Position 3 is nearest; positions 0 and 4 tie on distance, 4 is rated lower
        let items = vec![h(3), h(4), v(5), h(3), h(1)];
        let window = window_of(&items);
        let result = matcher.try_match(&window, 0).expect("match");
        assert_eq!(result.indices(), &[2, 3, 4]);

        let items = vec![h(1), h(4), v(5), h(3), h(3)];
        let window = window_of(&items);
        let result = matcher.try_match(&window, 0).expect("match");
        assert_eq!(result.indices(), &[2, 0, 3]);
    }

    #[test]
    fn test_five_star_vertical_mixed() {
        let items = vec![v(5), h(2), v(4)];
        let window = window_of(&items);
        let matcher = FiveStarVerticalMixedMatcher::new(2);

        let result = matcher.try_match(&window, 0).expect("match");
        assert_eq!(result.indices(), &[0, 1, 2]);

        let items = vec![v(5), h(3), v(4)];
        let window = window_of(&items);
        assert!(matcher.try_match(&window, 0).is_none());
    }

    #[test]
    fn test_main_must_be_near_window_start() {
        let items = vec![h(1), h(1), h(1), v(5), v(3)];
        let window = window_of(&items);

        assert!(!FiveStarVerticalTwoVerticalMatcher::new(2).can_match(&window));
    }

    #[test]
    fn test_movement_constraint_rejects_far_secondaries() {
        // Main at position 2, vertical candidates at 3 and 4
        let items = vec![h(1), h(1), v(5), v(3), v(2)];
        let window = window_of(&items);
        let matcher = FiveStarVerticalTwoVerticalMatcher::new(2);
        let result = matcher.try_match(&window, 0).expect("match");
        assert_eq!(result.indices(), &[2, 3, 4]);

        // With a tighter limit the main item cannot move from position 2 to 0.
        let tight = FiveStarVerticalTwoVerticalMatcher::new(1);
        assert!(tight.try_match(&window, 0).is_none());
    }

    #[test]
    fn test_main_stacked_prefers_lower_rated_portraits() {
        let items = vec![h(4), h(4), v(2), h(1), h(3)];
        let window = window_of(&items);
        let matcher = MainStackedMatcher::new(2);

        let result = matcher.try_match(&window, 0).expect("match");
        // Main is the first 3-4 star item. Scores: pos1 (rating 4 >= 4) 100+2-10 = 92,
        // pos2 20-5+4-10 = 9, no further candidates within distance 2.
        assert_eq!(result.kind(), PatternKind::MainStacked);
        assert_eq!(result.indices(), &[0, 1, 2]);
    }

    #[test]
    fn test_main_stacked_scores_pick_lowest() {
        let items = vec![h(2), h(3), v(1), h(1), h(2)];
        let window = window_of(&items);
        let matcher = MainStackedMatcher::new(2);

        let result = matcher.try_match(&window, 0).expect("match");
        // Main at position 1 (rating 3). Scores:
        //   pos0: 20 + 2 - 10 = 12, pos2: 10 - 5 + 2 - 10 = -3,
        //   pos3: 10 + 4 - 10 = 4
        assert_eq!(result.main(), Some(1));
        assert_eq!(result.indices(), &[1, 2, 3]);
    }

    #[test]
    fn test_main_stacked_ignores_text() {
        let items = vec![h(3), text(), text()];
        let window = window_of(&items);

        assert!(MainStackedMatcher::new(2).try_match(&window, 0).is_none());
    }

    #[test]
    fn test_panorama_vertical() {
        let items = vec![v(2), pano(4), pano(1)];
        let window = window_of(&items);
        let matcher = PanoramaVerticalMatcher::new(2);

        assert!(matcher.can_match(&window));
        let result = matcher.try_match(&window, 0).expect("match");
        assert_eq!(result.indices(), &[0, 1, 2]);
    }

    #[test]
    fn test_panorama_vertical_tie_break() {
        let matcher = PanoramaVerticalMatcher::new(2);

        // Distance wins over rating: position 2 beats the lower rated position 3
        let items = vec![pano(1), v(2), pano(5), pano(4)];
        let window = window_of(&items);
        let result = matcher.try_match(&window, 0).expect("match");
        assert_eq!(result.indices(), &[1, 0, 2]);

        // Positions 0 and 4 tie on distance, 4 is rated lower
        let items = vec![pano(4), h(3), v(2), pano(1), pano(2)];
        let window = window_of(&items);
        let result = matcher.try_match(&window, 0).expect("match");
        assert_eq!(result.indices(), &[2, 3, 4]);
    }

    #[test]
    fn test_panorama_vertical_needs_two_panoramas() {
        let items = vec![v(2), pano(4), h(1)];
        let window = window_of(&items);

        assert!(!PanoramaVerticalMatcher::new(2).can_match(&window));
    }

    #[test]
    fn test_standard_fills_budget() {
        // Slots: 1 + 1 + 2 = 4 fills the budget exactly
        let items = vec![h(3), v(2), text(), h(1)];
        let window = window_of(&items);

        let result = StandardMatcher::new(CHUNK).try_match(&window, 0).expect("match");
        assert_eq!(result.indices(), &[0, 1, 2]);
    }

    #[test]
    fn test_standard_stops_at_overflow() {
        // Slots: 1 + 2 = 3, next would be 5
        let items = vec![h(3), text(), text()];
        let window = window_of(&items);

        let result = StandardMatcher::new(CHUNK).try_match(&window, 0).expect("match");
        assert_eq!(result.indices(), &[0, 1]);
    }

    #[test]
    fn test_standard_always_takes_first_item() {
        let items = vec![pano(1), h(1)];
        let window = window_of(&items);

        let result = StandardMatcher::new(CHUNK).try_match(&window, 3).expect("match");
        assert_eq!(result.indices(), &[0]);
        assert_eq!(result.start(), 3);

        assert!(StandardMatcher::new(CHUNK).try_match(&[], 0).is_none());
    }

    #[test]
    fn test_standard_stops_before_standalone() {
        let items = vec![h(1), pano(1)];
        let window = window_of(&items);

        let result = StandardMatcher::new(CHUNK).try_match(&window, 0).expect("match");
        assert_eq!(result.indices(), &[0]);
    }
}
