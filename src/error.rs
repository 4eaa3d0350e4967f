use std::fmt;

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Error returned when an [`Interval`](crate::Interval) cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
    /// The corners are not strictly increasing along the given axis.
    ///
    /// This also covers coincident coordinates (a zero extent) and NaN.
    NotIncreasing(Axis),
    /// A corner is infinite, or the extent along the given axis overflows.
    NonFiniteExtent(Axis),
}

impl fmt::Display for IntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalError::NotIncreasing(axis) => write!(
                f,
                "interval corners are not strictly increasing along the {axis} axis"
            ),
            IntervalError::NonFiniteExtent(axis) => {
                write!(f, "interval extent along the {axis} axis is not finite")
            }
        }
    }
}

impl std::error::Error for IntervalError {}
