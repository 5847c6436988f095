//! Planar geometry primitives
//!
//! Everything the collision core needs: points with tolerance equality, line
//! segments with parametric intersection, and axis-aligned rectangles exposed
//! as four edges. All coordinates are f64; vector arithmetic goes through
//! `glam::DVec2`.

pub mod line;
pub mod point;
pub mod rect;

pub use line::Line;
pub use point::Point;
pub use rect::Rect;

/// Tolerance for point equality and for the parametric range slack of segment
/// intersection. Repeated per-frame transforms accumulate f64 drift; two
/// points closer than this on both axes are the same point.
pub const EPSILON: f64 = 1e-7;
