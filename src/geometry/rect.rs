//! Axis-aligned rectangles
//!
//! Obstacles expose their footprint as one of these; the collision core only
//! ever reads the four edges for intersection tests.

use serde::{Deserialize, Serialize};

use super::{Line, Point};

/// An axis-aligned rectangle anchored at its upper-left corner.
///
/// Width and height are expected to be positive; a degenerate rectangle simply
/// never intersects anything useful.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub upper_left: Point,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(upper_left: Point, width: f64, height: f64) -> Self {
        Self {
            upper_left,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.upper_left.x
    }

    pub fn right(&self) -> f64 {
        self.upper_left.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.upper_left.y
    }

    pub fn bottom(&self) -> f64 {
        self.upper_left.y + self.height
    }

    /// Corners in [upper-left, upper-right, lower-left, lower-right] order
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left(), self.top()),
            Point::new(self.right(), self.top()),
            Point::new(self.left(), self.bottom()),
            Point::new(self.right(), self.bottom()),
        ]
    }

    /// Edges in [top, bottom, left, right] order.
    ///
    /// The order is part of the tie-break contract: on an exact corner hit the
    /// earlier edge in this array wins the closest-intersection fold.
    pub fn edges(&self) -> [Line; 4] {
        let [ul, ur, ll, lr] = self.corners();
        [
            Line::new(ul, ur),
            Line::new(ll, lr),
            Line::new(ul, ll),
            Line::new(ur, lr),
        ]
    }

    /// Whether a point lies inside or on the rectangle boundary
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }
}
