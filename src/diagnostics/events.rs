// SPDX-License-Identifier: MPL-2.0
//! Carousel event types recorded by the journal.

use std::time::Instant;

/// Who requested a slide change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOrigin {
    /// A direct `next()`/`prev()` call (buttons, controls trait).
    Manual,
    /// An arrow key handled by the input controller.
    Keyboard,
    /// The autoplay timer.
    Autoplay,
}

/// Why a navigation request changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    /// A transition was still in progress.
    Locked,
    /// There are no slides.
    Empty,
}

/// Something observable the controller did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselEvent {
    /// Timers started and keyboard binding attached.
    Mounted,
    /// Every scheduled task cancelled and keyboard binding dropped.
    Unmounted {
        /// Number of tasks that were still pending.
        cancelled_tasks: usize,
    },
    /// The current index changed.
    Advanced {
        from: usize,
        to: usize,
        origin: NavigationOrigin,
    },
    /// A navigation request was swallowed.
    NavigationIgnored {
        origin: NavigationOrigin,
        reason: IgnoredReason,
    },
    /// The transition lock expired.
    LockReleased,
    /// Autoplay suspended.
    AutoplayPaused,
    /// Autoplay suspension lifted.
    AutoplayResumed,
    /// An autoplay tick arrived while paused and was dropped.
    TickDropped,
    /// The slide list was replaced.
    SlidesReplaced { count: usize },
}

/// A journal entry: the event plus when it took effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub at: Instant,
    pub event: CarouselEvent,
}
