//! Axis-aligned rectangles used as projection source and target spaces.
//!
//! An [`Interval`] is defined by its minimum corner (`left`) and maximum
//! corner (`right`). Corners must be strictly increasing on both axes, which
//! is checked once at construction. The per-axis extents are cached so that
//! projections can use them directly.
//!
//! # Examples
//!
//! ```rust
//! use mapmaker_projection::{Axis, Interval, IntervalError};
//!
//! let canvas = Interval::new(0.0, 0.0, 10.0, 20.0)?;
//! assert_eq!(canvas.diff_x(), 10.0);
//! assert_eq!(canvas.diff_y(), 20.0);
//!
//! // Inverted corners are rejected
//! let inverted = Interval::new(5.0, 5.0, 1.0, 1.0);
//! assert_eq!(inverted, Err(IntervalError::NotIncreasing(Axis::X)));
//! # Ok::<(), IntervalError>(())
//! ```

use std::cmp::Ordering;

use num_traits::Float;

use crate::{
    error::{Axis, IntervalError},
    point::Point,
};

/// A validated axis-aligned rectangle.
///
/// Every `Interval` satisfies `left.x < right.x` and `left.y < right.y` with
/// finite corners, so [`diff_x`](Interval::diff_x) and
/// [`diff_y`](Interval::diff_y) are always strictly positive and finite. The
/// type is immutable once built.
///
/// # Type Parameters
///
/// - `T`: Coordinate type, any [`Float`] (defaults to `f64`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T = f64> {
    left: Point<T>,
    right: Point<T>,
    diff_x: T,
    diff_y: T,
}

impl<T: Float> Interval<T> {
    /// Creates an interval from the coordinates of its minimum and maximum corners.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NotIncreasing`] if `left_x < right_x` or
    /// `left_y < right_y` does not hold, and [`IntervalError::NonFiniteExtent`]
    /// if a corner is infinite or the extent overflows. The x axis is checked
    /// first.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapmaker_projection::Interval;
    ///
    /// let extent = Interval::new(-180.0, -90.0, 180.0, 90.0).unwrap();
    /// assert_eq!(extent.diff_x(), 360.0);
    /// assert_eq!(extent.diff_y(), 180.0);
    /// ```
    pub fn new(left_x: T, left_y: T, right_x: T, right_y: T) -> Result<Self, IntervalError> {
        let diff_x = checked_extent(left_x, right_x, Axis::X)?;
        let diff_y = checked_extent(left_y, right_y, Axis::Y)?;

        Ok(Self {
            left: Point::new(left_x, left_y),
            right: Point::new(right_x, right_y),
            diff_x,
            diff_y,
        })
    }

    /// Creates an interval from its minimum and maximum corner points.
    ///
    /// Accepts [`Point`]s or `(x, y)` tuples.
    ///
    /// # Errors
    ///
    /// Same as [`Interval::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mapmaker_projection::{Interval, Point};
    ///
    /// let a = Interval::from_points((0.0, 0.0), (4.0, 2.0)).unwrap();
    /// let b = Interval::from_points(Point::new(0.0, 0.0), Point::new(4.0, 2.0)).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn from_points(
        left: impl Into<Point<T>>,
        right: impl Into<Point<T>>,
    ) -> Result<Self, IntervalError> {
        let left = left.into();
        let right = right.into();
        Self::new(left.x, left.y, right.x, right.y)
    }

    /// Creates an interval from any two opposite corners.
    ///
    /// Coordinates are sorted per axis before validation, so the corners may
    /// be given in any order. Corners sharing a coordinate on either axis
    /// still fail, since the rectangle would have no extent.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapmaker_projection::Interval;
    ///
    /// let interval = Interval::from_unordered((10.0, 0.0), (0.0, 5.0)).unwrap();
    /// assert_eq!(interval.left().x, 0.0);
    /// assert_eq!(interval.right().y, 5.0);
    /// ```
    pub fn from_unordered(
        a: impl Into<Point<T>>,
        b: impl Into<Point<T>>,
    ) -> Result<Self, IntervalError> {
        let a = a.into();
        let b = b.into();
        let (min_x, max_x) = sorted_pair(a.x, b.x);
        let (min_y, max_y) = sorted_pair(a.y, b.y);
        Self::new(min_x, min_y, max_x, max_y)
    }

    /// The unit square, `(0, 0)` to `(1, 1)`.
    pub fn unit() -> Self {
        let (zero, one) = (T::zero(), T::one());
        Self::new_unchecked(Point::new(zero, zero), Point::new(one, one))
    }

    /// The symmetric unit square, `(-1, -1)` to `(1, 1)`.
    pub fn symmetric_unit() -> Self {
        let one = T::one();
        Self::new_unchecked(Point::new(-one, -one), Point::new(one, one))
    }

    /// Returns true if the point lies within this interval.
    ///
    /// Bounds are inclusive.
    pub fn contains(&self, point: impl Into<Point<T>>) -> bool {
        let point = point.into();
        point.x >= self.left.x
            && point.x <= self.right.x
            && point.y >= self.left.y
            && point.y <= self.right.y
    }

    // Callers must guarantee strictly increasing, finite corners.
    fn new_unchecked(left: Point<T>, right: Point<T>) -> Self {
        Self {
            left,
            right,
            diff_x: right.x - left.x,
            diff_y: right.y - left.y,
        }
    }
}

impl<T: Copy> Interval<T> {
    /// Returns the minimum corner.
    pub const fn left(&self) -> Point<T> {
        self.left
    }

    /// Returns the maximum corner.
    pub const fn right(&self) -> Point<T> {
        self.right
    }

    /// Returns the width, `right.x - left.x`. Always positive and finite.
    pub const fn diff_x(&self) -> T {
        self.diff_x
    }

    /// Returns the height, `right.y - left.y`. Always positive and finite.
    pub const fn diff_y(&self) -> T {
        self.diff_y
    }
}

fn checked_extent<T: Float>(min: T, max: T, axis: Axis) -> Result<T, IntervalError> {
    // NaN compares as unordered and is rejected along with the rest.
    if min.partial_cmp(&max) != Some(Ordering::Less) {
        return Err(rejected(IntervalError::NotIncreasing(axis)));
    }

    let extent = max - min;
    if !extent.is_finite() {
        return Err(rejected(IntervalError::NonFiniteExtent(axis)));
    }
    Ok(extent)
}

fn rejected(err: IntervalError) -> IntervalError {
    log::debug!("rejecting interval: {err}");
    err
}

/// Return `(min, max)` for two owned values.
fn sorted_pair<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}
