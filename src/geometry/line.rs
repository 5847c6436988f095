//! Line segments and intersection queries
//!
//! The trajectory of a moving body for one step is a segment; so are the four
//! edges of every obstacle rectangle. Intersection uses the perp-dot
//! parametric form, which needs no slope and therefore no vertical special
//! case.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::{EPSILON, Point, Rect};

/// A segment between two points. Constructed fresh per query, never mutated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Midpoint of the segment
    pub fn middle(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Slope of the carrying line, `None` when the segment is vertical
    pub fn slope(&self) -> Option<f64> {
        let dx = self.end.x - self.start.x;
        if dx.abs() < EPSILON {
            None
        } else {
            Some((self.end.y - self.start.y) / dx)
        }
    }

    /// Whether `other` is the same segment, in either orientation
    pub fn approx_eq(&self, other: &Line) -> bool {
        (self.start.approx_eq(other.start) && self.end.approx_eq(other.end))
            || (self.start.approx_eq(other.end) && self.end.approx_eq(other.start))
    }

    /// Single intersection point of two segments.
    ///
    /// Returns `None` for parallel segments - including collinear overlap,
    /// which has no single intersection point - and when the crossing falls
    /// outside either segment's [0, 1] parameter range. Endpoint and corner
    /// touches count as intersections (the range check carries [`EPSILON`]
    /// slack).
    pub fn intersection_with(&self, other: &Line) -> Option<Point> {
        let p = DVec2::from(self.start);
        let r = DVec2::from(self.end) - p;
        let q = DVec2::from(other.start);
        let s = DVec2::from(other.end) - q;

        let denom = r.perp_dot(s);
        if denom.abs() < EPSILON {
            return None;
        }

        let qp = q - p;
        let t = qp.perp_dot(s) / denom;
        let u = qp.perp_dot(r) / denom;

        let in_range = |v: f64| (-EPSILON..=1.0 + EPSILON).contains(&v);
        if in_range(t) && in_range(u) {
            Some(Point::from(p + r * t))
        } else {
            None
        }
    }

    /// Nearest intersection of this segment with any edge of `rect`, measured
    /// from `self.start`.
    ///
    /// Strict less-than fold: when two edges report the same distance (a
    /// corner hit) the first edge in [`Rect::edges`] order wins, and the two
    /// candidate points are equal under tolerance anyway.
    pub fn closest_intersection_to_start(&self, rect: &Rect) -> Option<Point> {
        let mut closest: Option<Point> = None;
        let mut closest_distance = f64::MAX;

        for edge in rect.edges() {
            if let Some(hit) = self.intersection_with(&edge) {
                let distance = self.start.distance(hit);
                if distance < closest_distance {
                    closest_distance = distance;
                    closest = Some(hit);
                }
            }
        }

        closest
    }
}
