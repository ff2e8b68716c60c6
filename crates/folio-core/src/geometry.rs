//! Basic geometric types used by the layout engine.
//!
//! All values are `f64` so that row widths can be summed back to the
//! container width without visible drift.

use serde::Serialize;

/// A point in layout space, measured from the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Returns a new point with the y-coordinate shifted by `dy`
    pub fn with_y_offset(self, dy: f64) -> Self {
        Self {
            y: self.y + dy,
            ..self
        }
    }

    /// Treats this point as a top-left corner and returns the bounds of a
    /// rectangle of the given size anchored there.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_top_left(self, size)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Builds a size only when both dimensions are finite and strictly positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_core::geometry::Size;
    ///
    /// assert!(Size::positive(1200.0, 800.0).is_some());
    /// assert!(Size::positive(1200.0, 0.0).is_none());
    /// assert!(Size::positive(f64::NAN, 800.0).is_none());
    /// ```
    pub fn positive(width: f64, height: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        (valid(width) && valid(height)).then_some(Self { width, height })
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f64 {
        self.height
    }

    /// Width-to-height ratio with the height floored at 1.
    ///
    /// The floor keeps the ratio finite for degenerate sizes; it never
    /// divides by zero.
    pub fn aspect_ratio(self) -> f64 {
        self.width / self.height.max(1.0)
    }

    /// Returns true when the size is taller than it is wide
    pub fn is_vertical(self) -> bool {
        self.height > self.width
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates bounds from a top-left corner and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }
}
