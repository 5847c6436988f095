//! Hit observer contracts
//!
//! Anything can watch for impacts: balls notify their listeners when they
//! strike a death zone, blocks notify theirs on every hit. Listeners are held
//! as shared handles and every notification pass iterates a snapshot copy, so
//! a listener may deregister itself (or others) mid-callback without
//! corrupting or skipping the in-flight delivery.

use std::cell::RefCell;
use std::rc::Rc;

use super::ball::Ball;
use super::collision::SharedCollidable;

/// Shared handle to a hit listener
pub type SharedListener = Rc<RefCell<dyn HitListener>>;

/// Receives impact notifications, synchronously and in registration order.
pub trait HitListener {
    /// `being_hit` was just struck by `hitter`. The hitter is observed in its
    /// pre-correction state: its center has not yet been moved off the
    /// collision point when this fires.
    fn hit_event(&mut self, being_hit: &SharedCollidable, hitter: &mut Ball);
}

/// Maintains an ordered set of hit listeners.
pub trait HitNotifier {
    /// Register a listener at the end of the notification order.
    fn add_hit_listener(&mut self, listener: SharedListener);

    /// Deregister the first matching handle; unknown handles are a no-op.
    fn remove_hit_listener(&mut self, listener: &SharedListener);

    /// Snapshot of the current listeners, in registration order. Notification
    /// passes iterate this copy, never the live list.
    fn hit_listeners(&self) -> Vec<SharedListener>;
}

/// Remove the first `Rc::ptr_eq` match from an ordered listener list.
pub(crate) fn remove_listener(listeners: &mut Vec<SharedListener>, target: &SharedListener) {
    if let Some(idx) = listeners.iter().position(|l| Rc::ptr_eq(l, target)) {
        listeners.remove(idx);
    }
}
