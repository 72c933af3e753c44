// SPDX-License-Identifier: MPL-2.0
//! Automatic slide-rotation controller.
//!
//! [`Carousel`] owns the slide list, the current index, the transition
//! lock, the autoplay pause flag and the progress value. Consumers read
//! those through accessors and change them only through [`Carousel::next`],
//! [`Carousel::prev`], [`Carousel::pause_autoplay`],
//! [`Carousel::resume_autoplay`] and [`Carousel::handle_key`].
//!
//! All timed work lives in one [`Scheduler`]. Nothing runs on its own: a
//! driver calls [`Carousel::poll`] once per display frame, and every public
//! operation first runs the tasks that were due before it, so the state is
//! exact at the instant of the call.
//!
//! # Example
//!
//! ```
//! use hero_carousel::carousel::{Carousel, CarouselOptions};
//! use hero_carousel::clock::ManualClock;
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut carousel =
//!     Carousel::with_clock(vec!["A", "B", "C"], CarouselOptions::default(), clock.clone());
//! carousel.mount();
//!
//! carousel.next();
//! assert_eq!(carousel.current_index(), 1);
//! assert!(carousel.is_animating());
//!
//! clock.advance(Duration::from_millis(1_000));
//! carousel.poll();
//! assert!(!carousel.is_animating());
//! ```

mod controls;
mod input;
mod options;
mod progress;
mod scheduler;
mod sequencer;

pub use controls::CarouselControls;
pub use input::{InputController, KeyBinding, NavigationKey};
pub use options::CarouselOptions;
pub use progress::ProgressTracker;
pub use scheduler::{DueTask, Scheduler, TaskHandle, TaskKind};
pub use sequencer::{reorder, OrderedSlide};

use crate::clock::{Clock, SystemClock};
use crate::diagnostics::{CarouselEvent, EventJournal, IgnoredReason, NavigationOrigin};
use crate::domain::carousel::Direction;
use sequencer::OrderCache;
use std::time::Instant;

/// Coarse autoplay state, independent of the transition lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayStatus {
    /// `autoplay` is off, or the controller is not mounted.
    Disabled,
    /// Ticks advance the slides.
    Running,
    /// Ticks keep arriving but are dropped.
    Paused,
}

/// Hero carousel controller over slides of type `T`.
///
/// The controller never inspects `T`.
pub struct Carousel<T, C: Clock = SystemClock> {
    slides: Vec<T>,
    revision: u64,
    order_cache: OrderCache,
    options: CarouselOptions,
    clock: C,
    current_index: usize,
    is_animating: bool,
    paused: bool,
    mounted: bool,
    progress: ProgressTracker,
    scheduler: Scheduler,
    input: InputController,
    journal: EventJournal,
}

impl<T, C: Clock> std::fmt::Debug for Carousel<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("slides", &self.slides.len())
            .field("current_index", &self.current_index)
            .field("is_animating", &self.is_animating)
            .field("paused", &self.paused)
            .field("mounted", &self.mounted)
            .field("progress", &self.progress.value())
            .field("pending_tasks", &self.scheduler.len())
            .finish()
    }
}

impl<T> Carousel<T> {
    /// Creates an unmounted controller reading the system clock.
    #[must_use]
    pub fn new(slides: Vec<T>, options: CarouselOptions) -> Self {
        Self::with_clock(slides, options, SystemClock)
    }
}

impl<T, C: Clock> Carousel<T, C> {
    /// Creates an unmounted controller reading time from `clock`.
    #[must_use]
    pub fn with_clock(slides: Vec<T>, options: CarouselOptions, clock: C) -> Self {
        let now = clock.now();
        Self {
            slides,
            revision: 0,
            order_cache: OrderCache::default(),
            options,
            clock,
            current_index: 0,
            is_animating: false,
            paused: false,
            mounted: false,
            progress: ProgressTracker::new(now),
            scheduler: Scheduler::new(),
            input: InputController::new(options.resume_policy),
            journal: EventJournal::new(options.journal_capacity),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Starts autoplay, the progress sampler and the keyboard binding.
    ///
    /// Does nothing if already mounted.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        let now = self.clock.now();
        self.mounted = true;

        if self.options.autoplay {
            self.progress.reset(now);
            let interval = self.options.autoplay_interval.as_duration();
            self.scheduler
                .schedule_repeating(TaskKind::AutoplayTick, now + interval, interval);
        }

        let frame = self.options.frame_interval.as_duration();
        self.scheduler
            .schedule_repeating(TaskKind::SampleProgress, now + frame, frame);

        if self.options.keyboard {
            self.input.attach();
        }
        self.journal.record(now, CarouselEvent::Mounted);
    }

    /// Cancels every scheduled task and drops the keyboard binding.
    ///
    /// Pending grace-period resumes are cancelled too, so the pause flag is
    /// cleared here. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        let now = self.clock.now();
        let cancelled_tasks = self.scheduler.cancel_all();
        self.input.detach();
        self.progress.clear();
        self.is_animating = false;
        self.paused = false;
        self.mounted = false;
        self.journal
            .record(now, CarouselEvent::Unmounted { cancelled_tasks });
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Moves to the next slide unless locked or empty.
    pub fn next(&mut self) {
        let now = self.catch_up();
        self.advance_at(Direction::Forward, now, NavigationOrigin::Manual);
    }

    /// Moves to the previous slide unless locked or empty.
    pub fn prev(&mut self) {
        let now = self.catch_up();
        self.advance_at(Direction::Backward, now, NavigationOrigin::Manual);
    }

    /// Suppresses autoplay ticks. The timer keeps running.
    pub fn pause_autoplay(&mut self) {
        let now = self.catch_up();
        self.pause_at(now);
    }

    /// Lifts the suspension and restarts the progress interval.
    pub fn resume_autoplay(&mut self) {
        let now = self.catch_up();
        self.resume_at(now);
    }

    /// Handles a key from the bound pair.
    ///
    /// Navigates in the key's direction, pauses autoplay and schedules a
    /// resume one autoplay interval later. The pause and the resume happen
    /// even when the navigation itself is swallowed by the lock. Keys are
    /// ignored while no binding is attached.
    pub fn handle_key(&mut self, key: NavigationKey) {
        let now = self.catch_up();
        let Some(direction) = self.input.direction_for(key) else {
            return;
        };
        self.advance_at(direction, now, NavigationOrigin::Keyboard);
        self.pause_at(now);
        let due = now + self.options.autoplay_interval.as_duration();
        self.input.schedule_resume(&mut self.scheduler, due);
    }

    /// Runs due tasks and samples progress if a frame was due.
    ///
    /// Drivers call this once per display frame.
    pub fn poll(&mut self) {
        self.catch_up();
    }

    /// Replaces the slide list.
    ///
    /// The current index is wrapped into the new list (or reset to 0 when it
    /// is empty) and the display order is recomputed on the next read. A
    /// wrapped index restarts the progress interval.
    pub fn set_slides(&mut self, slides: Vec<T>) {
        let now = self.catch_up();
        self.slides = slides;
        self.revision += 1;
        self.order_cache.invalidate();
        let wrapped = match self.slides.len() {
            0 => 0,
            len => self.current_index % len,
        };
        if wrapped != self.current_index {
            self.current_index = wrapped;
            self.progress.reset(now);
        }
        self.journal.record(
            now,
            CarouselEvent::SlidesReplaced {
                count: self.slides.len(),
            },
        );
    }

    // =========================================================================
    // Observables
    // =========================================================================

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Elapsed fraction of the autoplay interval, in `[0, 1]`.
    #[must_use]
    pub fn autoplay_progress(&self) -> f32 {
        self.progress.value().value()
    }

    #[must_use]
    pub fn status(&self) -> AutoplayStatus {
        if !self.options.autoplay || !self.mounted {
            AutoplayStatus::Disabled
        } else if self.paused {
            AutoplayStatus::Paused
        } else {
            AutoplayStatus::Running
        }
    }

    /// Slides in display order, current slide first.
    #[must_use]
    pub fn ordered_slides(&self) -> Vec<OrderedSlide<'_, T>> {
        self.order_cache
            .ordered(&self.slides, self.revision, self.current_index)
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&T> {
        self.slides.get(self.current_index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    #[must_use]
    pub fn journal(&self) -> &EventJournal {
        &self.journal
    }

    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn keyboard_attached(&self) -> bool {
        self.input.is_attached()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Runs every task due at or before now, then samples progress if the
    /// sampler fired. Returns the instant used.
    fn catch_up(&mut self) -> Instant {
        let now = self.clock.now();
        let mut frame_due = false;

        while let Some(task) = self.scheduler.pop_due(now) {
            match task.kind {
                TaskKind::AutoplayTick => {
                    if self.paused {
                        self.journal.record(task.at, CarouselEvent::TickDropped);
                    } else {
                        self.advance_at(Direction::Forward, task.at, NavigationOrigin::Autoplay);
                    }
                }
                TaskKind::ReleaseLock => {
                    self.is_animating = false;
                    self.journal.record(task.at, CarouselEvent::LockReleased);
                }
                TaskKind::ResumeAutoplay => {
                    self.input.resume_fired(task.handle);
                    self.resume_at(task.at);
                }
                TaskKind::SampleProgress => frame_due = true,
            }
        }

        if frame_due {
            self.sample_progress(now);
        }
        now
    }

    fn advance_at(&mut self, direction: Direction, at: Instant, origin: NavigationOrigin) {
        if self.is_animating {
            self.ignore(at, origin, IgnoredReason::Locked);
            return;
        }
        let Some(next_index) = direction.step(self.current_index, self.slides.len()) else {
            self.ignore(at, origin, IgnoredReason::Empty);
            return;
        };

        let from = self.current_index;
        self.current_index = next_index;
        self.progress.reset(at);
        // A zero-length transition has an empty lock window.
        let transition = self.options.transition_duration.as_duration();
        if !transition.is_zero() {
            self.is_animating = true;
            self.scheduler
                .schedule_once(TaskKind::ReleaseLock, at + transition);
        }
        self.journal.record(
            at,
            CarouselEvent::Advanced {
                from,
                to: next_index,
                origin,
            },
        );
    }

    fn ignore(&mut self, at: Instant, origin: NavigationOrigin, reason: IgnoredReason) {
        self.journal
            .record(at, CarouselEvent::NavigationIgnored { origin, reason });
    }

    fn pause_at(&mut self, at: Instant) {
        self.paused = true;
        self.journal.record(at, CarouselEvent::AutoplayPaused);
    }

    fn resume_at(&mut self, at: Instant) {
        self.paused = false;
        self.progress.reset(at);
        self.journal.record(at, CarouselEvent::AutoplayResumed);
    }

    fn sample_progress(&mut self, now: Instant) {
        if !self.options.autoplay || self.paused || self.is_animating {
            return;
        }
        self.progress.sample(now, self.options.autoplay_interval);
    }
}

impl<T, C: Clock> Drop for Carousel<T, C> {
    fn drop(&mut self) {
        self.unmount();
    }
}
