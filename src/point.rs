/// A point in a 2D coordinate space.
///
/// Converts to and from `(x, y)` tuples, so APIs taking `impl Into<Point<T>>`
/// accept either form.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point<T = f64> {
    /// X coordinate.
    pub x: T,
    /// Y coordinate.
    pub y: T,
}

impl<T> Point<T> {
    /// Creates a new point at the given coordinates.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<Point<T>> for (T, T) {
    fn from(point: Point<T>) -> Self {
        (point.x, point.y)
    }
}
