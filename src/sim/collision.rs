//! Collidable registry and the closest-collision query

use std::cell::RefCell;
use std::rc::Rc;

use crate::color::Color;
use crate::geometry::{Line, Point, Rect};

use super::ball::Ball;
use super::events::HitNotifier;
use super::velocity::Velocity;

/// Shared handle to a collidable body.
///
/// The environment holds these by reference only; creation and removal are
/// the caller's business. Single-threaded by design, hence `Rc`.
pub type SharedCollidable = Rc<RefCell<dyn Collidable>>;

/// Anything a moving ball can run into: a bounding rectangle plus a hit
/// response. The response policy (how velocity changes) belongs to the
/// collidable, not to the ball.
pub trait Collidable: HitNotifier {
    /// Footprint used for trajectory intersection. Never mutated mid-query.
    fn collision_rectangle(&self) -> Rect;

    /// Compute the velocity `hitter` leaves with after striking this body at
    /// `collision_point` while travelling at `current_velocity`.
    fn hit(
        &mut self,
        hitter: &mut Ball,
        collision_point: Point,
        current_velocity: Velocity,
    ) -> Velocity;

    /// Whether contact means the ball is leaving play rather than bouncing.
    fn is_death_zone(&self) -> bool {
        false
    }

    /// Fill color, carried through hit events for consumers that recolor.
    fn color(&self) -> Color;
}

/// The nearest thing a trajectory would hit, and where.
///
/// Produced fresh by every query; never stored across steps.
#[derive(Clone)]
pub struct CollisionInfo {
    point: Point,
    object: SharedCollidable,
}

impl CollisionInfo {
    pub fn new(point: Point, object: SharedCollidable) -> Self {
        Self { point, object }
    }

    pub fn collision_point(&self) -> Point {
        self.point
    }

    pub fn collision_object(&self) -> &SharedCollidable {
        &self.object
    }
}

/// The collision world: an ordered set of collidable handles.
///
/// Insertion order is irrelevant for correctness but fixes the tie-break:
/// when two bodies are struck at exactly the same distance, the one
/// registered first wins.
#[derive(Default)]
pub struct Environment {
    collidables: Vec<SharedCollidable>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.collidables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collidables.is_empty()
    }

    /// Register a body at the end of the scan order.
    pub fn add_collidable(&mut self, c: SharedCollidable) {
        self.collidables.push(c);
    }

    /// Remove the first matching handle; unknown handles are a no-op.
    pub fn remove_collidable(&mut self, c: &SharedCollidable) {
        if let Some(idx) = self.collidables.iter().position(|x| Rc::ptr_eq(x, c)) {
            self.collidables.remove(idx);
        }
    }

    /// Scan every registered body and return the collision nearest to
    /// `trajectory.start`, or `None` when the path is clear.
    ///
    /// Linear pass, no spatial index: the registry holds one level's worth of
    /// blocks. Strict less-than comparison keeps the first-registered body on
    /// exact distance ties.
    pub fn closest_collision(&self, trajectory: &Line) -> Option<CollisionInfo> {
        let mut closest: Option<CollisionInfo> = None;
        let mut closest_distance = f64::MAX;

        for c in &self.collidables {
            let rect = c.borrow().collision_rectangle();
            if let Some(hit) = trajectory.closest_intersection_to_start(&rect) {
                let distance = trajectory.start.distance(hit);
                if distance < closest_distance {
                    closest_distance = distance;
                    closest = Some(CollisionInfo::new(hit, Rc::clone(c)));
                }
            }
        }

        closest
    }
}
