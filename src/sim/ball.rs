//! Ball movement and per-step collision response

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::consts;
use crate::geometry::{Line, Point};

use super::collision::{Environment, SharedCollidable};
use super::events::{HitNotifier, SharedListener, remove_listener};
use super::velocity::Velocity;

/// Shared handle to a collision world
pub type SharedEnvironment = Rc<RefCell<Environment>>;

#[derive(Debug, Error)]
pub enum BallError {
    #[error("ball radius must be positive, got {0}")]
    NonPositiveRadius(f64),
}

/// The reflecting edges of the playfield.
///
/// Left, right and top are walls inset by the border thickness; the bottom is
/// intentionally open, so a ball travelling past the lower edge exits play
/// instead of bouncing (breakout life-loss semantics).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
    pub side_border: f64,
    pub top_border: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: consts::WORLD_WIDTH,
            height: consts::WORLD_HEIGHT,
            side_border: consts::SIDE_BORDER,
            top_border: consts::TOP_BORDER,
        }
    }
}

/// A moving circular body.
///
/// Owns its center, velocity and listener set; holds a non-owning handle to
/// the collision world it was placed in. Radius is fixed at construction and
/// must be positive.
pub struct Ball {
    center: Point,
    radius: f64,
    color: Color,
    velocity: Velocity,
    environment: Option<SharedEnvironment>,
    bounds: Bounds,
    hit_listeners: Vec<SharedListener>,
}

impl Ball {
    pub fn new(center: Point, radius: f64, color: Color, velocity: Velocity) -> Result<Self, BallError> {
        if radius <= 0.0 {
            return Err(BallError::NonPositiveRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            color,
            velocity,
            environment: None,
            bounds: Bounds::default(),
            hit_listeners: Vec::new(),
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Place the ball in (or lift it out of) a collision world.
    pub fn set_environment(&mut self, environment: Option<SharedEnvironment>) {
        self.environment = environment;
    }

    /// Advance the ball by one step.
    ///
    /// Builds the trajectory for the current velocity, asks the environment
    /// for the closest collision on it, applies the struck body's response
    /// (or advances freely), then resolves wall reflection. A ball with no
    /// environment is not in play and does not move.
    pub fn move_one_step(&mut self) {
        let Some(env) = self.environment.clone() else {
            return;
        };

        let trajectory = Line::new(self.center, self.velocity.apply_to(self.center));
        let hit = env.borrow().closest_collision(&trajectory);

        match hit {
            None => {
                self.center = self.velocity.apply_to(self.center);
            }
            Some(info) => {
                let object = Rc::clone(info.collision_object());
                let collision_point = info.collision_point();
                log::debug!(
                    "collision at ({:.2}, {:.2})",
                    collision_point.x,
                    collision_point.y
                );

                // Exit notification fires before any positional correction so
                // listeners observe the ball as it was when it struck.
                if object.borrow().is_death_zone() {
                    self.notify_exit(&object);
                }

                let current = self.velocity;
                let new_velocity = object.borrow_mut().hit(self, collision_point, current);

                // The struck body's own listeners also see the pre-correction
                // ball. Dispatching from here, outside the body's `&mut`
                // borrow, lets a listener re-borrow it (e.g. to deregister).
                let listeners = object.borrow().hit_listeners();
                for listener in listeners {
                    listener.borrow_mut().hit_event(&object, self);
                }

                self.center = nudged_off(collision_point, current, self.radius);
                self.velocity = new_velocity;
            }
        }

        self.resolve_boundary_collision();
    }

    /// Notify this ball's listeners that it struck a death zone.
    fn notify_exit(&mut self, being_hit: &SharedCollidable) {
        // Snapshot before iterating: listeners may deregister mid-callback.
        let listeners = self.hit_listeners.clone();
        for listener in listeners {
            listener.borrow_mut().hit_event(being_hit, self);
        }
    }

    /// Reflect off the playfield walls and clamp the center so the ball edge
    /// sits exactly on the wall. Runs every step, even on steps that already
    /// resolved an obstacle collision, because a bounce near a wall can need
    /// both. The bottom edge is not checked.
    fn resolve_boundary_collision(&mut self) {
        let min_y = self.bounds.top_border + self.radius;
        if self.center.y <= min_y {
            self.velocity = self.velocity.flip_dy();
            self.center = Point::new(self.center.x, min_y);
        }

        let max_x = self.bounds.width - self.bounds.side_border - self.radius;
        if self.center.x >= max_x {
            self.velocity = self.velocity.flip_dx();
            self.center = Point::new(max_x, self.center.y);
        }

        let min_x = self.bounds.side_border + self.radius;
        if self.center.x <= min_x {
            self.velocity = self.velocity.flip_dx();
            self.center = Point::new(min_x, self.center.y);
        }
    }

    /// Drop every listener relation, for when the ball leaves play.
    pub fn remove_listeners(&mut self) {
        self.hit_listeners.clear();
    }
}

impl HitNotifier for Ball {
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

/// Center position adjacent to (not on top of) a collision point: back off by
/// the radius against the direction of travel on each moving axis. The signs
/// matter; flipping one reintroduces the stuck-on-the-edge and tunneling bug
/// class this exists to prevent.
fn nudged_off(collision_point: Point, velocity: Velocity, radius: f64) -> Point {
    let mut x = collision_point.x;
    let mut y = collision_point.y;
    if velocity.dx < 0.0 {
        x += radius;
    } else if velocity.dx > 0.0 {
        x -= radius;
    }
    if velocity.dy < 0.0 {
        y += radius;
    } else if velocity.dy > 0.0 {
        y -= radius;
    }
    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::geometry::Rect;
    use crate::sim::HitListener;
    use crate::world::Block;

    use super::*;

    fn ball(x: f64, y: f64, v: Velocity) -> Ball {
        Ball::new(Point::new(x, y), 5.0, Color::WHITE, v).unwrap()
    }

    fn shared_env() -> SharedEnvironment {
        Rc::new(RefCell::new(Environment::new()))
    }

    fn add_block(env: &SharedEnvironment, rect: Rect) -> SharedCollidable {
        let block: SharedCollidable = Rc::new(RefCell::new(Block::new(rect, Color::BLUE)));
        env.borrow_mut().add_collidable(Rc::clone(&block));
        block
    }

    #[test]
    fn radius_must_be_positive() {
        assert!(matches!(
            Ball::new(Point::new(0.0, 0.0), 0.0, Color::WHITE, Velocity::default()),
            Err(BallError::NonPositiveRadius(_))
        ));
        assert!(matches!(
            Ball::new(Point::new(0.0, 0.0), -3.0, Color::WHITE, Velocity::default()),
            Err(BallError::NonPositiveRadius(_))
        ));
        assert!(Ball::new(Point::new(0.0, 0.0), 1.0, Color::WHITE, Velocity::default()).is_ok());
    }

    #[test]
    fn unplaced_ball_does_not_move() {
        let mut b = ball(100.0, 100.0, Velocity::new(5.0, 5.0));
        b.move_one_step();
        assert!(b.center().approx_eq(Point::new(100.0, 100.0)));
        assert_eq!(b.velocity(), Velocity::new(5.0, 5.0));
    }

    #[test]
    fn free_advance_on_clear_path() {
        let mut b = ball(100.0, 100.0, Velocity::new(5.0, -3.0));
        b.set_environment(Some(shared_env()));
        b.move_one_step();
        assert!(b.center().approx_eq(Point::new(105.0, 97.0)));
        assert_eq!(b.velocity(), Velocity::new(5.0, -3.0));
    }

    #[test]
    fn bounces_off_block_and_never_tunnels() {
        // Ball at (50,50) r5 v(5,0), block spanning x in [60,70], y in [40,60]
        let env = shared_env();
        add_block(&env, Rect::new(Point::new(60.0, 40.0), 10.0, 20.0));
        let mut b = ball(50.0, 50.0, Velocity::new(5.0, 0.0));
        b.set_environment(Some(env));

        // First step is free: the trajectory stops short of the block
        b.move_one_step();
        assert!(b.center().approx_eq(Point::new(55.0, 50.0)));
        assert_eq!(b.velocity(), Velocity::new(5.0, 0.0));

        // Second step strikes the left edge at (60,50): the block flips dx
        // and the ball re-seats at edge minus radius
        b.move_one_step();
        assert!(b.center().approx_eq(Point::new(55.0, 50.0)));
        assert_eq!(b.velocity(), Velocity::new(-5.0, 0.0));

        // The ball never ends up inside or beyond the block
        let mut b = ball(50.0, 50.0, Velocity::new(5.0, 0.0));
        let env = shared_env();
        add_block(&env, Rect::new(Point::new(60.0, 40.0), 10.0, 20.0));
        b.set_environment(Some(env));
        for _ in 0..200 {
            b.move_one_step();
            assert!(b.center().x < 60.0 + 1e-9, "tunneled to {:?}", b.center());
        }
    }

    #[test]
    fn vertical_bounce_flips_dy() {
        let env = shared_env();
        add_block(&env, Rect::new(Point::new(380.0, 100.0), 40.0, 10.0));
        // Moving straight up into the block's bottom edge at y = 110
        let mut b = ball(400.0, 118.0, Velocity::new(0.0, -10.0));
        b.set_environment(Some(env));
        b.move_one_step();
        assert_eq!(b.velocity(), Velocity::new(0.0, 10.0));
        // Re-seated below the edge by the radius; x untouched (dx == 0)
        assert!(b.center().approx_eq(Point::new(400.0, 115.0)));
    }

    #[test]
    fn left_wall_reflects_and_clamps() {
        let mut b = ball(31.0, 300.0, Velocity::new(-10.0, 0.0));
        b.set_environment(Some(shared_env()));
        b.move_one_step();
        // side_border (25) + radius (5)
        assert!(b.center().approx_eq(Point::new(30.0, 300.0)));
        assert_eq!(b.velocity(), Velocity::new(10.0, 0.0));
    }

    #[test]
    fn right_wall_reflects_and_clamps() {
        let mut b = ball(765.0, 300.0, Velocity::new(12.0, 0.0));
        b.set_environment(Some(shared_env()));
        b.move_one_step();
        // width (800) - side_border (25) - radius (5)
        assert!(b.center().approx_eq(Point::new(770.0, 300.0)));
        assert_eq!(b.velocity(), Velocity::new(-12.0, 0.0));
    }

    #[test]
    fn top_wall_reflects_and_clamps() {
        let mut b = ball(400.0, 33.0, Velocity::new(0.0, -6.0));
        b.set_environment(Some(shared_env()));
        b.move_one_step();
        // top_border (25) + radius (5)
        assert!(b.center().approx_eq(Point::new(400.0, 30.0)));
        assert_eq!(b.velocity(), Velocity::new(0.0, 6.0));
    }

    #[test]
    fn bottom_stays_open() {
        let mut b = ball(400.0, 590.0, Velocity::new(0.0, 20.0));
        b.set_environment(Some(shared_env()));
        for _ in 0..5 {
            b.move_one_step();
        }
        assert!(b.center().y > Bounds::default().height);
        assert_eq!(b.velocity(), Velocity::new(0.0, 20.0));
    }

    #[test]
    fn custom_bounds_are_respected() {
        let bounds = Bounds {
            width: 200.0,
            height: 100.0,
            side_border: 10.0,
            top_border: 10.0,
        };
        let mut b = ball(18.0, 50.0, Velocity::new(-5.0, 0.0)).with_bounds(bounds);
        b.set_environment(Some(shared_env()));
        b.move_one_step();
        assert!(b.center().approx_eq(Point::new(15.0, 50.0)));
        assert_eq!(b.velocity(), Velocity::new(5.0, 0.0));
    }

    /// Records each callback with the hitter's center at delivery time.
    struct Recorder {
        seen_centers: Rc<RefCell<Vec<Point>>>,
    }

    impl HitListener for Recorder {
        fn hit_event(&mut self, _being_hit: &SharedCollidable, hitter: &mut Ball) {
            self.seen_centers.borrow_mut().push(hitter.center());
        }
    }

    /// Deregisters itself from the hitter on its first callback.
    struct SelfRemover {
        handle: Option<SharedListener>,
        calls: Rc<Cell<u32>>,
    }

    impl HitListener for SelfRemover {
        fn hit_event(&mut self, _being_hit: &SharedCollidable, hitter: &mut Ball) {
            self.calls.set(self.calls.get() + 1);
            if let Some(handle) = self.handle.take() {
                hitter.remove_hit_listener(&handle);
            }
        }
    }

    fn death_env() -> (SharedEnvironment, SharedCollidable) {
        let env = shared_env();
        let strip: SharedCollidable = Rc::new(RefCell::new(Block::new_death_zone(
            Rect::new(Point::new(0.0, 60.0), 800.0, 20.0),
            Color::BLACK,
        )));
        env.borrow_mut().add_collidable(Rc::clone(&strip));
        (env, strip)
    }

    #[test]
    fn death_zone_notifies_before_correction() {
        let (env, _strip) = death_env();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let recorder: SharedListener = Rc::new(RefCell::new(Recorder {
            seen_centers: Rc::clone(&seen),
        }));

        // Moving down into the strip's top edge at y = 60
        let mut b = ball(100.0, 55.0, Velocity::new(0.0, 10.0));
        b.set_environment(Some(env));
        b.add_hit_listener(recorder);
        b.move_one_step();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        // Listener observed the ball before it was re-seated off the strip
        assert!(seen[0].approx_eq(Point::new(100.0, 55.0)));
        // The strip still bounced the ball afterwards
        assert_eq!(b.velocity(), Velocity::new(0.0, -10.0));
    }

    #[test]
    fn plain_block_does_not_notify_ball_listeners() {
        let env = shared_env();
        add_block(&env, Rect::new(Point::new(0.0, 60.0), 800.0, 20.0));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let recorder: SharedListener = Rc::new(RefCell::new(Recorder {
            seen_centers: Rc::clone(&seen),
        }));
        let mut b = ball(100.0, 55.0, Velocity::new(0.0, 10.0));
        b.set_environment(Some(env));
        b.add_hit_listener(recorder);
        b.move_one_step();
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn listener_removing_itself_does_not_disturb_delivery() {
        let (env, _strip) = death_env();

        let calls = Rc::new(Cell::new(0));
        let concrete = Rc::new(RefCell::new(SelfRemover {
            handle: None,
            calls: Rc::clone(&calls),
        }));
        let self_remover: SharedListener = concrete.clone();
        concrete.borrow_mut().handle = Some(Rc::clone(&self_remover));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let recorder: SharedListener = Rc::new(RefCell::new(Recorder {
            seen_centers: Rc::clone(&seen),
        }));

        let mut b = ball(100.0, 55.0, Velocity::new(0.0, 10.0));
        b.set_environment(Some(env));
        b.add_hit_listener(Rc::clone(&self_remover));
        b.add_hit_listener(recorder);

        b.move_one_step();
        // Both snapshotted listeners were delivered exactly once
        assert_eq!(calls.get(), 1);
        assert_eq!(seen.borrow().len(), 1);
        // Only the recorder is still registered
        assert_eq!(b.hit_listeners().len(), 1);

        // A second strike now reaches the recorder alone
        b.set_velocity(Velocity::new(0.0, 10.0));
        b.move_one_step();
        assert_eq!(calls.get(), 1);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn remove_listeners_clears_relations() {
        let mut b = ball(0.0, 0.0, Velocity::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        b.add_hit_listener(Rc::new(RefCell::new(Recorder {
            seen_centers: seen,
        })));
        assert_eq!(b.hit_listeners().len(), 1);
        b.remove_listeners();
        assert!(b.hit_listeners().is_empty());
    }
}
