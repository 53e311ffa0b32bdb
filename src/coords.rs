use super::core;

/// A single coordinate pair on the plane (2D)
///
/// Examples
/// ```rust
/// use wktlib::Coordinate;
/// let my_coord = Coordinate::new(0.2, -7.9);
/// let (x, y) = my_coord.coords();
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    /// Instantiate a new coordinate
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return true if the coordinate is approximately equal to other.
    pub fn is_close(&self, other: &Coordinate) -> bool {
        core::approx(self.x, other.x) && core::approx(self.y, other.y)
    }

    /// Get coordinates as a tuple
    pub fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// Compare two coordinates for exact equality.
///
/// No tolerance is applied: `0.1 + 0.2` and `0.3` are different coordinates.
/// Use [`Coordinate::is_close`] for a tolerant comparison.
///
/// Examples
/// ```rust
/// use wktlib::{Coordinate, same_coords};
/// assert!(same_coords(&Coordinate::new(1.0, 2.0), &Coordinate::new(1.0, 2.0)));
/// assert!(!same_coords(&Coordinate::new(0.1 + 0.2, 0.0), &Coordinate::new(0.3, 0.0)));
/// ```
pub fn same_coords(a: &Coordinate, b: &Coordinate) -> bool {
    a.x == b.x && a.y == b.y
}
