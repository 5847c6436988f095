//! Removing struck blocks from play

use crate::sim::{Ball, HitListener, HitNotifier, SharedCollidable, SharedEnvironment};

use super::counter::SharedCounter;

/// Takes a block out of the world when it is hit.
///
/// On every hit event: the hitting ball takes over the block's color, the
/// block is deregistered from all of its own listeners and removed from the
/// collision world, and the shared remaining-block count drops by one.
pub struct BlockRemover {
    environment: SharedEnvironment,
    remaining_blocks: SharedCounter,
}

impl BlockRemover {
    pub fn new(environment: SharedEnvironment, remaining_blocks: SharedCounter) -> Self {
        Self {
            environment,
            remaining_blocks,
        }
    }

    pub fn remaining_blocks(&self) -> &SharedCounter {
        &self.remaining_blocks
    }
}

impl HitListener for BlockRemover {
    fn hit_event(&mut self, being_hit: &SharedCollidable, hitter: &mut Ball) {
        hitter.set_color(being_hit.borrow().color());

        // The block must not keep notifying anyone once it is out of play.
        // Snapshot first; holding the borrow across the removals would alias.
        let listeners = being_hit.borrow().hit_listeners();
        for listener in listeners {
            being_hit.borrow_mut().remove_hit_listener(&listener);
        }

        self.environment.borrow_mut().remove_collidable(being_hit);
        self.remaining_blocks.decrease(1);
        log::debug!("block removed, {} remaining", self.remaining_blocks.value());
    }
}
