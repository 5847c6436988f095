//! Rectangular obstacle blocks

use crate::color::Color;
use crate::geometry::{EPSILON, Point, Rect};
use crate::sim::{Ball, Collidable, HitNotifier, SharedListener, Velocity};
use crate::sim::events::remove_listener;

/// An axis-aligned obstacle.
///
/// Blocks own their reflection policy: the ball asks the struck block for its
/// new velocity rather than deciding itself. A block flagged as a death zone
/// additionally makes contact count as leaving play.
pub struct Block {
    rect: Rect,
    color: Color,
    death_zone: bool,
    hit_listeners: Vec<SharedListener>,
}

impl Block {
    pub fn new(rect: Rect, color: Color) -> Self {
        Self {
            rect,
            color,
            death_zone: false,
            hit_listeners: Vec::new(),
        }
    }

    /// A block whose contact means the ball exits play. It still reflects
    /// like any other block; exit handling is the ball's notification, not a
    /// change in response policy.
    pub fn new_death_zone(rect: Rect, color: Color) -> Self {
        Self {
            death_zone: true,
            ..Self::new(rect, color)
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Collidable for Block {
    fn collision_rectangle(&self) -> Rect {
        self.rect
    }

    /// Edge-based reflection: a hit on a vertical edge flips dx, on a
    /// horizontal edge flips dy, and an exact corner flips both.
    fn hit(
        &mut self,
        _hitter: &mut Ball,
        collision_point: Point,
        current_velocity: Velocity,
    ) -> Velocity {
        let mut velocity = current_velocity;

        let on_vertical_edge = (collision_point.x - self.rect.left()).abs() < EPSILON
            || (collision_point.x - self.rect.right()).abs() < EPSILON;
        let on_horizontal_edge = (collision_point.y - self.rect.top()).abs() < EPSILON
            || (collision_point.y - self.rect.bottom()).abs() < EPSILON;

        if on_vertical_edge {
            velocity = velocity.flip_dx();
        }
        if on_horizontal_edge {
            velocity = velocity.flip_dy();
        }

        velocity
    }

    fn is_death_zone(&self) -> bool {
        self.death_zone
    }

    fn color(&self) -> Color {
        self.color
    }
}

impl HitNotifier for Block {
    fn add_hit_listener(&mut self, listener: SharedListener) {
        self.hit_listeners.push(listener);
    }

    fn remove_hit_listener(&mut self, listener: &SharedListener) {
        remove_listener(&mut self.hit_listeners, listener);
    }

    fn hit_listeners(&self) -> Vec<SharedListener> {
        self.hit_listeners.clone()
    }
}
