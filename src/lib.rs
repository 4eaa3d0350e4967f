//! Coordinate projections between axis-aligned 2D spaces
//!
//! `mapmaker_projection` maps points between rectangular coordinate spaces:
//! geographic extents, pixel canvases and normalized squares. It is the
//! coordinate-mapping building block of a map rendering pipeline.
//!
//! # Core Concepts
//!
//! ## Intervals
//!
//! An [`Interval`] is an axis-aligned rectangle given by its minimum and
//! maximum corners. Corners must be strictly increasing on both axes:
//! - Construction returns [`IntervalError`] for inverted, degenerate, NaN or infinite corners
//! - The width and height are cached at construction
//! - There is no way to build an unvalidated interval
//!
//! ## Projections
//!
//! A [`Projection`] maps points from a source interval to a target interval
//! with independent linear interpolation per axis. There is no rotation, no
//! shear and no clamping.
//!
//! Factories for common targets:
//! - [`Projection::identity`] - No-op projection, returns points untouched
//! - [`Projection::unit`] - Normalizes onto `(0, 0)` to `(1, 1)`
//! - [`Projection::symmetric_unit`] - Normalizes onto `(-1, -1)` to `(1, 1)`
//!
//! ## Numeric Types
//!
//! Everything is generic over [`Float`] and defaults to `f64`. Choose `f32`
//! for compact render data, or any other `Float` implementation such as a
//! decimal type.
//!
//! # Examples
//!
//! ## Basic Projection
//!
//! ```rust
//! use mapmaker_projection::{Interval, Projection};
//!
//! let source = Interval::new(0.0, 0.0, 10.0, 20.0).unwrap();
//! let target = Interval::new(0.0, 0.0, 1.0, 1.0).unwrap();
//! let projection = Projection::new(source, target);
//!
//! assert_eq!(projection.translate(5.0, 10.0), (0.5, 0.5));
//! ```
//!
//! ## Handling Invalid Corners
//!
//! ```rust
//! use mapmaker_projection::{Axis, Interval, IntervalError};
//!
//! match Interval::new(5.0, 5.0, 1.0, 1.0) {
//!     Ok(_) => unreachable!(),
//!     Err(IntervalError::NotIncreasing(axis)) => assert_eq!(axis, Axis::X),
//!     Err(IntervalError::NonFiniteExtent(_)) => unreachable!(),
//! }
//!
//! // Corners in unknown order can be sorted first
//! let interval = Interval::from_unordered((5.0, 5.0), (1.0, 1.0)).unwrap();
//! assert_eq!(interval.diff_x(), 4.0);
//! ```
//!
//! ## Round Trip
//!
//! ```rust
//! use mapmaker_projection::{Interval, Projection};
//!
//! let canvas = Interval::new(0.0, 0.0, 2048.0, 1024.0).unwrap();
//! let normalize = Projection::symmetric_unit(canvas);
//! let denormalize = normalize.inverse();
//!
//! let (nx, ny) = normalize.translate(1024.0, 512.0);
//! assert_eq!((nx, ny), (0.0, 0.0));
//! assert_eq!(denormalize.translate(nx, ny), (1024.0, 512.0));
//! ```

pub mod error;
pub mod interval;
pub mod point;
pub mod projection;

pub use error::{Axis, IntervalError};
pub use interval::Interval;
pub use num_traits::Float;
pub use point::Point;
pub use projection::Projection;
