//! Brickbreak - a deterministic breakout-style collision core
//!
//! Core modules:
//! - `geometry`: Point/line/rectangle primitives and intersection queries
//! - `sim`: Collision world, ball stepping, hit observer contracts
//! - `world`: Blocks and the block-remover consumer of hit events
//!
//! The crate is an in-process engine: an external driver calls
//! [`sim::Ball::move_one_step`] once per frame tick and reads back positions
//! for drawing. Nothing here renders, schedules, or persists.

pub mod color;
pub mod geometry;
pub mod sim;
pub mod world;

pub use color::Color;
pub use geometry::{EPSILON, Line, Point, Rect};
pub use sim::{Ball, Bounds, Environment, Velocity};

/// World configuration constants
pub mod consts {
    /// Playfield width in world units
    pub const WORLD_WIDTH: f64 = 800.0;
    /// Playfield height in world units
    pub const WORLD_HEIGHT: f64 = 600.0;
    /// Thickness of the left/right border walls
    pub const SIDE_BORDER: f64 = 25.0;
    /// Thickness of the top border wall
    pub const TOP_BORDER: f64 = 25.0;

    /// Default ball radius
    pub const BALL_RADIUS: f64 = 5.0;
}
