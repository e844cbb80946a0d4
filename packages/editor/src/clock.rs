//! Time source for gesture coalescing.
//!
//! The history engine asks the clock for wall time in milliseconds. Tests
//! swap in a [`ManualClock`] to simulate fast and slow drags.

use std::cell::Cell;
use std::rc::Rc;

pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// Real wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Hand-driven clock. Clones share the same time, so a test can keep one
/// handle while the store owns another.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    pub fn new(start: i64) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, millis: i64) {
        self.now.set(millis);
    }

    pub fn advance(&self, millis: i64) {
        self.now.set(self.now.get() + millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}
