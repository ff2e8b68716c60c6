//! Tunables shared by every stage of the layout pipeline.

use folio_core::content::{MAX_RATING, MIN_RATING};

/// Default width-to-height ratio for items without usable dimensions (2:3 portrait).
pub const DEFAULT_ASPECT: f64 = 2.0 / 3.0;

/// Default width used when dimensions have to be synthesized.
pub const DEFAULT_BASE_WIDTH: f64 = 1000.0;

/// Rating assumed for items without one.
pub const DEFAULT_RATING: u8 = 3;

/// Items per row in the simple chunker.
pub const DEFAULT_CHUNK_SIZE: usize = 2;

/// Slot budget of one row in pattern mode.
pub const DEFAULT_PATTERN_CHUNK_SIZE: u32 = 4;

/// Floor applied to the pattern-mode slot budget.
pub const DEFAULT_MIN_PATTERN_CHUNK_SIZE: u32 = 2;

/// Number of unconsumed items the pattern registry looks at per step.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Largest distance an item may move from its natural position in a pattern.
pub const DEFAULT_MAX_MOVEMENT: usize = 2;

/// Options for a layout pass.
///
/// One value of this type is threaded through dimension resolution,
/// chunking and pattern matching so that every stage agrees on the same
/// defaults.
///
/// # Examples
///
/// ```
/// use folio_layout::LayoutOptions;
///
/// let options = LayoutOptions::default()
///     .with_chunk_size(3)
///     .with_base_width(800.0);
///
/// assert_eq!(options.chunk_size(), 3);
/// assert_eq!(options.base_width(), 800.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    default_aspect: f64,
    base_width: f64,
    default_rating: u8,
    chunk_size: usize,
    pattern_chunk_size: u32,
    min_pattern_chunk_size: u32,
    window_size: usize,
    max_movement: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            default_aspect: DEFAULT_ASPECT,
            base_width: DEFAULT_BASE_WIDTH,
            default_rating: DEFAULT_RATING,
            chunk_size: DEFAULT_CHUNK_SIZE,
            pattern_chunk_size: DEFAULT_PATTERN_CHUNK_SIZE,
            min_pattern_chunk_size: DEFAULT_MIN_PATTERN_CHUNK_SIZE,
            window_size: DEFAULT_WINDOW_SIZE,
            max_movement: DEFAULT_MAX_MOVEMENT,
        }
    }
}

impl LayoutOptions {
    /// Sets the aspect ratio used to synthesize missing dimensions.
    ///
    /// Non-finite or non-positive values are ignored.
    pub fn with_default_aspect(mut self, aspect: f64) -> Self {
        if aspect.is_finite() && aspect > 0.0 {
            self.default_aspect = aspect;
        }
        self
    }

    /// Sets the width used to synthesize missing dimensions.
    ///
    /// Non-finite values and widths below 1 are ignored.
    pub fn with_base_width(mut self, base_width: f64) -> Self {
        if base_width.is_finite() && base_width >= 1.0 {
            self.base_width = base_width;
        }
        self
    }

    /// Sets the rating assumed for unrated items.
    ///
    /// Ratings outside `MIN_RATING..=MAX_RATING` are ignored.
    pub fn with_default_rating(mut self, rating: u8) -> Self {
        if (MIN_RATING..=MAX_RATING).contains(&rating) {
            self.default_rating = rating;
        }
        self
    }

    /// Sets the number of items per row in the simple chunker.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_pattern_chunk_size(mut self, chunk_size: u32) -> Self {
        self.pattern_chunk_size = chunk_size;
        self
    }

    pub fn with_min_pattern_chunk_size(mut self, chunk_size: u32) -> Self {
        self.min_pattern_chunk_size = chunk_size;
        self
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_max_movement(mut self, max_movement: usize) -> Self {
        self.max_movement = max_movement;
        self
    }

    pub fn default_aspect(&self) -> f64 {
        self.default_aspect
    }

    pub fn base_width(&self) -> f64 {
        self.base_width
    }

    pub fn default_rating(&self) -> u8 {
        self.default_rating
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn pattern_chunk_size(&self) -> u32 {
        self.pattern_chunk_size
    }

    pub fn min_pattern_chunk_size(&self) -> u32 {
        self.min_pattern_chunk_size
    }

    /// Window size, never below one item.
    pub fn window_size(&self) -> usize {
        self.window_size.max(1)
    }

    pub fn max_movement(&self) -> usize {
        self.max_movement
    }

    /// Slot budget of a pattern-mode row: the configured chunk size floored
    /// at the configured minimum, and never below one slot.
    pub fn effective_pattern_chunk_size(&self) -> f64 {
        self.pattern_chunk_size
            .max(self.min_pattern_chunk_size)
            .max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = LayoutOptions::default();

        assert_eq!(options.default_aspect(), 2.0 / 3.0);
        assert_eq!(options.base_width(), 1000.0);
        assert_eq!(options.default_rating(), 3);
        assert_eq!(options.chunk_size(), 2);
        assert_eq!(options.window_size(), 5);
        assert_eq!(options.max_movement(), 2);
        assert_eq!(options.effective_pattern_chunk_size(), 4.0);
    }

    #[test]
    fn test_invalid_synthesis_values_are_ignored() {
        let options = LayoutOptions::default()
            .with_default_aspect(0.0)
            .with_default_aspect(f64::NAN)
            .with_base_width(-10.0)
            .with_base_width(0.5);

        assert_eq!(options.default_aspect(), DEFAULT_ASPECT);
        assert_eq!(options.base_width(), DEFAULT_BASE_WIDTH);
    }

    #[test]
    fn test_out_of_range_default_rating_is_ignored() {
        let options = LayoutOptions::default()
            .with_default_rating(0)
            .with_default_rating(6);
        assert_eq!(options.default_rating(), DEFAULT_RATING);

        let options = LayoutOptions::default().with_default_rating(1);
        assert_eq!(options.default_rating(), 1);
    }

    #[test]
    fn test_effective_pattern_chunk_size_is_floored() {
        let options = LayoutOptions::default()
            .with_pattern_chunk_size(1)
            .with_min_pattern_chunk_size(3);
        assert_eq!(options.effective_pattern_chunk_size(), 3.0);

        let options = LayoutOptions::default()
            .with_pattern_chunk_size(0)
            .with_min_pattern_chunk_size(0);
        assert_eq!(options.effective_pattern_chunk_size(), 1.0);
    }

    #[test]
    fn test_window_size_never_zero() {
        assert_eq!(LayoutOptions::default().with_window_size(0).window_size(), 1);
    }
}
