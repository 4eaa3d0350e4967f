//! Affine mappings between two axis-aligned coordinate spaces.
//!
//! A [`Projection`] holds a *source* and a *target* [`Interval`] and maps
//! points between them with independent linear interpolation on each axis.
//! The fractional position of a point inside the source rectangle is applied
//! to the target rectangle's extents and offset by its minimum corner.
//!
//! # Key Types
//!
//! - [`Projection`] - Maps points from a source interval to a target interval
//! - [`Interval`] - The validated rectangles on either side
//! - [`Point`] - A coordinate pair, interchangeable with `(x, y)` tuples
//!
//! # Canonical Targets
//!
//! Three factories fix the target to a common rectangle:
//!
//! - [`Projection::identity`] - target equals source, points pass through untouched
//! - [`Projection::unit`] - target is the unit square `(0, 0)` to `(1, 1)`
//! - [`Projection::symmetric_unit`] - target is `(-1, -1)` to `(1, 1)`
//!
//! All of them are plain `Projection` values, so calling code does not need
//! to know which one it holds.
//!
//! # Examples
//!
//! ## Geographic Extent to Pixel Canvas
//!
//! ```rust
//! use mapmaker_projection::{Interval, Projection};
//!
//! let bounds = Interval::new(4.0, 51.0, 6.0, 53.0).unwrap();
//! let canvas = Interval::new(0.0, 0.0, 1024.0, 1024.0).unwrap();
//! let projection = Projection::new(bounds, canvas);
//!
//! let (px, py) = projection.translate(5.0, 52.0);
//! assert_eq!(px, 512.0);
//! assert_eq!(py, 512.0);
//! ```
//!
//! ## Normalizing to the Unit Square
//!
//! ```rust
//! use mapmaker_projection::{Interval, Point, Projection};
//!
//! let extent = Interval::new(0.0, 0.0, 10.0, 20.0).unwrap();
//! let projection = Projection::unit(extent);
//!
//! assert_eq!(projection.translate_point((5.0, 10.0)), Point::new(0.5, 0.5));
//! ```
//!
//! ## Points Outside the Source
//!
//! There is no clamping. Points outside the source rectangle land outside the
//! target rectangle on the same line:
//!
//! ```rust
//! use mapmaker_projection::{Interval, Projection};
//!
//! let extent = Interval::new(0.0, 0.0, 100.0, 100.0).unwrap();
//! let projection = Projection::unit(extent);
//!
//! assert_eq!(projection.translate(150.0, -50.0), (1.5, -0.5));
//! ```

use num_traits::Float;

use crate::{interval::Interval, point::Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    General,
    Identity,
}

/// Maps points from a source interval to a target interval.
///
/// Each axis is mapped independently:
///
/// ```text
/// tx = target.left.x + (target.diff_x / source.diff_x) * (x - source.left.x)
/// ty = target.left.y + (target.diff_y / source.diff_y) * (y - source.left.y)
/// ```
///
/// Source and target may have different aspect ratios, which gives a
/// non-uniform scaling. The divisors are interval extents and therefore
/// strictly positive and finite, so translation never divides by zero and
/// cannot fail.
///
/// Both intervals are copied in. A projection is immutable and can be shared
/// between threads and translated from concurrently.
///
/// # Type Parameters
///
/// - `T`: Coordinate type, any [`Float`] (defaults to `f64`)
///
/// # Examples
///
/// ```rust
/// use mapmaker_projection::{Interval, Projection};
///
/// let source = Interval::new(0.0, 0.0, 10.0, 20.0).unwrap();
/// let target = Interval::new(-1.0, 0.0, 1.0, 4.0).unwrap();
/// let projection = Projection::new(source, target);
///
/// assert_eq!(projection.translate(0.0, 0.0), (-1.0, 0.0));
/// assert_eq!(projection.translate(5.0, 10.0), (0.0, 2.0));
/// assert_eq!(projection.translate(10.0, 20.0), (1.0, 4.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection<T = f64> {
    source: Interval<T>,
    target: Interval<T>,
    kind: Kind,
}

impl<T: Float> Projection<T> {
    /// Creates a projection from `source` to `target`.
    pub fn new(source: Interval<T>, target: Interval<T>) -> Self {
        Self {
            source,
            target,
            kind: Kind::General,
        }
    }

    /// Creates a projection whose target is its source.
    ///
    /// Translation returns its input unchanged, bit for bit, without going
    /// through the interpolation formula.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapmaker_projection::{Interval, Projection};
    ///
    /// let extent = Interval::new(0.0, 0.0, 3.0, 7.0).unwrap();
    /// let projection = Projection::identity(extent);
    ///
    /// assert_eq!(projection.target(), extent);
    /// assert_eq!(projection.translate(0.1, 0.7), (0.1, 0.7));
    /// ```
    pub fn identity(source: Interval<T>) -> Self {
        Self {
            source,
            target: source,
            kind: Kind::Identity,
        }
    }

    /// Creates a projection from `source` onto the unit square `(0, 0)` to `(1, 1)`.
    pub fn unit(source: Interval<T>) -> Self {
        Self::new(source, Interval::unit())
    }

    /// Creates a projection from `source` onto the square `(-1, -1)` to `(1, 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapmaker_projection::{Interval, Projection};
    ///
    /// let extent = Interval::new(0.0, 0.0, 800.0, 400.0).unwrap();
    /// let projection = Projection::symmetric_unit(extent);
    ///
    /// assert_eq!(projection.translate(0.0, 0.0), (-1.0, -1.0));
    /// assert_eq!(projection.translate(400.0, 200.0), (0.0, 0.0));
    /// ```
    pub fn symmetric_unit(source: Interval<T>) -> Self {
        Self::new(source, Interval::symmetric_unit())
    }

    /// Maps the point `(x, y)` from source space to target space.
    pub fn translate(&self, x: T, y: T) -> (T, T) {
        match self.kind {
            Kind::Identity => (x, y),
            Kind::General => {
                let (source, target) = (&self.source, &self.target);
                let tx = target.left().x
                    + (target.diff_x() / source.diff_x()) * (x - source.left().x);
                let ty = target.left().y
                    + (target.diff_y() / source.diff_y()) * (y - source.left().y);
                (tx, ty)
            }
        }
    }

    /// Maps a point from source space to target space.
    ///
    /// Accepts [`Point`]s or `(x, y)` tuples.
    pub fn translate_point(&self, point: impl Into<Point<T>>) -> Point<T> {
        let point = point.into();
        let (x, y) = self.translate(point.x, point.y);
        Point::new(x, y)
    }

    /// Returns the projection mapping target space back to source space.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapmaker_projection::{Interval, Projection};
    ///
    /// let extent = Interval::new(0.0, 0.0, 10.0, 20.0).unwrap();
    /// let to_unit = Projection::unit(extent);
    /// let from_unit = to_unit.inverse();
    ///
    /// assert_eq!(from_unit.translate(0.5, 0.25), (5.0, 5.0));
    /// ```
    pub fn inverse(&self) -> Self {
        match self.kind {
            Kind::Identity => *self,
            Kind::General => Self::new(self.target, self.source),
        }
    }

    /// Returns true if this projection was built with [`Projection::identity`].
    pub fn is_identity(&self) -> bool {
        self.kind == Kind::Identity
    }
}

impl<T: Copy> Projection<T> {
    /// Returns the source interval.
    pub const fn source(&self) -> Interval<T> {
        self.source
    }

    /// Returns the target interval.
    pub const fn target(&self) -> Interval<T> {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn translate_to_unit_square() {
        let source = Interval::new(0.0, 0.0, 10.0, 20.0).unwrap();
        let target = Interval::new(0.0, 0.0, 1.0, 1.0).unwrap();
        let projection = Projection::new(source, target);

        assert_eq!(projection.translate(5.0, 10.0), (0.5, 0.5));
        assert_eq!(projection.translate_point((5.0, 10.0)), Point::new(0.5, 0.5));
    }

    #[test]
    fn translate_with_offsets_on_both_sides() {
        let source = Interval::new(100.0, -50.0, 200.0, 50.0).unwrap();
        let target = Interval::new(10.0, 20.0, 810.0, 420.0).unwrap();
        let projection = Projection::new(source, target);

        let (x, y) = projection.translate(120.0, -10.0);
        assert_relative_eq!(x, 170.0);
        assert_relative_eq!(y, 180.0);
    }

    #[test]
    fn non_uniform_scaling() {
        let source = Interval::new(0.0, 0.0, 1.0, 1.0).unwrap();
        let target = Interval::new(0.0, 0.0, 4.0, 2.0).unwrap();
        let projection = Projection::new(source, target);

        assert_eq!(projection.translate(0.5, 0.5), (2.0, 1.0));
    }

    #[test]
    fn extrapolates_outside_source() {
        let source = Interval::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let projection = Projection::symmetric_unit(source);

        assert_eq!(projection.translate(-5.0, 20.0), (-2.0, 3.0));
    }

    #[test]
    fn identity_is_bit_exact() {
        let source = Interval::new(0.3, 0.7, 1.1, 2.9).unwrap();
        let projection = Projection::identity(source);
        let x = 0.1 + 0.2;
        let y = f64::MAX;

        let (tx, ty) = projection.translate(x, y);
        assert_eq!(tx.to_bits(), x.to_bits());
        assert_eq!(ty.to_bits(), y.to_bits());
        assert!(projection.is_identity());
        assert_eq!(projection.source(), projection.target());
    }

    #[test]
    fn factories_fix_the_target() {
        let source = Interval::new(2.0f32, 3.0, 4.0, 9.0).unwrap();

        let unit = Projection::unit(source);
        assert_eq!(unit.source(), source);
        assert_eq!(unit.target(), Interval::unit());
        assert!(!unit.is_identity());

        let symmetric = Projection::symmetric_unit(source);
        assert_eq!(symmetric.target(), Interval::symmetric_unit());
        assert!(!symmetric.is_identity());
    }

    #[test]
    fn inverse_swaps_intervals() {
        let source = Interval::new(0.0, 0.0, 10.0, 20.0).unwrap();
        let target = Interval::new(5.0, 5.0, 6.0, 7.0).unwrap();
        let projection = Projection::new(source, target);
        let inverse = projection.inverse();

        assert_eq!(inverse.source(), target);
        assert_eq!(inverse.target(), source);

        let (x, y) = inverse.translate(5.5, 6.0);
        assert_relative_eq!(x, 5.0);
        assert_relative_eq!(y, 10.0);
    }

    #[test]
    fn inverse_of_identity_is_identity() {
        let source = Interval::new(-1.0, -2.0, 1.0, 2.0).unwrap();
        let projection = Projection::identity(source);

        assert_eq!(projection.inverse(), projection);
    }

    #[test]
    fn outlives_the_caller_intervals() {
        let projection = {
            let source = Interval::new(0.0, 0.0, 2.0, 2.0).unwrap();
            let target = Interval::new(0.0, 0.0, 4.0, 4.0).unwrap();
            Projection::new(source, target)
        };

        assert_eq!(projection.translate(1.0, 1.0), (2.0, 2.0));
    }
}
