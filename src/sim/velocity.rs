//! Per-step displacement vectors

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// The displacement a body travels in one step.
///
/// A plain `Copy` value: reflections and hit responses produce new velocities
/// and the ball rebinds its field, so no two components ever alias the same
/// mutable vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub dx: f64,
    pub dy: f64,
}

impl Velocity {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Build a velocity from a heading and a speed.
    ///
    /// Angles are in degrees, 0° pointing straight up and growing clockwise,
    /// so 90° moves right and 180° moves down (screen coordinates, y grows
    /// downward).
    pub fn from_angle_speed(angle_deg: f64, speed: f64) -> Self {
        let rad = angle_deg.to_radians();
        Self::new(rad.sin() * speed, -rad.cos() * speed)
    }

    /// The point reached from `p` after one step at this velocity
    pub fn apply_to(&self, p: Point) -> Point {
        Point::from(DVec2::from(p) + DVec2::new(self.dx, self.dy))
    }

    /// Reflection off a vertical surface: x component negated
    #[must_use]
    pub fn flip_dx(self) -> Self {
        Self::new(-self.dx, self.dy)
    }

    /// Reflection off a horizontal surface: y component negated
    #[must_use]
    pub fn flip_dy(self) -> Self {
        Self::new(self.dx, -self.dy)
    }

    /// Magnitude of the displacement
    pub fn speed(&self) -> f64 {
        DVec2::new(self.dx, self.dy).length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_translates() {
        let v = Velocity::new(3.0, -4.0);
        let p = v.apply_to(Point::new(10.0, 10.0));
        assert!(p.approx_eq(Point::new(13.0, 6.0)));
        assert!((v.speed() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn flips_negate_one_axis() {
        let v = Velocity::new(3.0, -4.0);
        assert_eq!(v.flip_dx(), Velocity::new(-3.0, -4.0));
        assert_eq!(v.flip_dy(), Velocity::new(3.0, 4.0));
        // Double flip is the identity
        assert_eq!(v.flip_dx().flip_dx(), v);
    }

    #[test]
    fn angle_zero_points_up() {
        let up = Velocity::from_angle_speed(0.0, 10.0);
        assert!(up.dx.abs() < 1e-9);
        assert!((up.dy + 10.0).abs() < 1e-9);

        let right = Velocity::from_angle_speed(90.0, 10.0);
        assert!((right.dx - 10.0).abs() < 1e-9);
        assert!(right.dy.abs() < 1e-9);

        let down = Velocity::from_angle_speed(180.0, 10.0);
        assert!((down.dy - 10.0).abs() < 1e-9);
    }
}
