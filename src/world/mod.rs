//! Blocks and the consumers of their hit events
//!
//! The minimum world layer around the collision core: rectangular obstacle
//! blocks, the shared remaining-block counter, and the remover that takes a
//! struck block out of play. Level layout and scoring live with the driver,
//! not here.

pub mod block;
pub mod counter;
pub mod remover;

pub use block::Block;
pub use counter::{Counter, SharedCounter};
pub use remover::BlockRemover;
