//! Shared countdown of remaining blocks

use std::cell::Cell;
use std::rc::Rc;

/// Handle to a counter shared between the driver and hit listeners
pub type SharedCounter = Rc<Counter>;

/// An integer counter with interior mutability, so several listeners can hold
/// the same count. Single-threaded, like the rest of the simulation.
#[derive(Debug, Default)]
pub struct Counter {
    value: Cell<i64>,
}

impl Counter {
    pub fn new(start: i64) -> Self {
        Self {
            value: Cell::new(start),
        }
    }

    pub fn increase(&self, amount: i64) {
        self.value.set(self.value.get() + amount);
    }

    pub fn decrease(&self, amount: i64) {
        self.value.set(self.value.get() - amount);
    }

    pub fn value(&self) -> i64 {
        self.value.get()
    }
}
