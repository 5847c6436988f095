//! Deterministic collision simulation
//!
//! All stepping logic lives here. The module is single-threaded and
//! synchronous by design: one driver loop advances one ball at a time, a step
//! runs to completion with no suspension points, and the collidable registry
//! is never touched while a scan is in flight.

pub mod ball;
pub mod collision;
pub mod events;
pub mod velocity;

pub use ball::{Ball, BallError, Bounds, SharedEnvironment};
pub use collision::{Collidable, CollisionInfo, Environment, SharedCollidable};
pub use events::{HitListener, HitNotifier, SharedListener};
pub use velocity::Velocity;
