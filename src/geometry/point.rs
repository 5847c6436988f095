//! 2D point value type

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::EPSILON;

/// A point in the plane.
///
/// Deliberately does not implement `PartialEq`: equality on points is
/// tolerance-based ([`Point::approx_eq`]), and a derived bitwise comparison
/// would silently disagree with it after a few frames of f64 drift.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        DVec2::from(*self).distance(other.into())
    }

    /// Tolerance equality: both coordinate deltas under [`EPSILON`]
    pub fn approx_eq(&self, other: Point) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert!((b.distance(a) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn approx_eq_tolerates_drift() {
        let a = Point::new(10.0, 20.0);
        let drifted = Point::new(10.0 + EPSILON / 2.0, 20.0 - EPSILON / 2.0);
        assert!(a.approx_eq(drifted));
        assert!(!a.approx_eq(Point::new(10.0 + EPSILON * 2.0, 20.0)));
        assert!(!a.approx_eq(Point::new(10.0, 20.1)));
    }
}
