// SPDX-License-Identifier: MPL-2.0
//! Time sources for the carousel controller.
//!
//! The controller never calls `Instant::now()` directly; it reads time
//! through a [`Clock`] so that tests and benchmarks can drive it
//! deterministically with a [`ManualClock`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Wall-clock time via [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying instant, so a test can keep one handle
/// while the controller owns another.
///
/// # Example
///
/// ```
/// use hero_carousel::clock::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let start = clock.now();
/// clock.advance(Duration::from_millis(200));
/// assert_eq!(clock.now() - start, Duration::from_millis(200));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    /// Creates a clock frozen at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Creates a clock frozen at `start`.
    #[must_use]
    pub fn starting_at(start: Instant) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Sets the clock to `instant`. Moving backwards is ignored.
    pub fn set(&self, instant: Instant) {
        if instant > self.now.get() {
            self.now.set(instant);
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}
