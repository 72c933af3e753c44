// SPDX-License-Identifier: MPL-2.0
//! Carousel newtypes.
//!
//! Type-safe wrappers for the carousel timing values, guaranteeing they are
//! always within valid ranges so the controller never has to re-check them.

use crate::config::{
    DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_FRAME_INTERVAL_MS, DEFAULT_JOURNAL_CAPACITY,
    DEFAULT_TRANSITION_DURATION_MS, MAX_AUTOPLAY_INTERVAL_MS, MAX_FRAME_INTERVAL_MS,
    MAX_JOURNAL_CAPACITY, MAX_TRANSITION_DURATION_MS, MIN_AUTOPLAY_INTERVAL_MS,
    MIN_FRAME_INTERVAL_MS, MIN_JOURNAL_CAPACITY, MIN_TRANSITION_DURATION_MS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// =============================================================================
// Direction
// =============================================================================

/// Navigation direction through the cyclic slide order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `+1`: towards the next slide.
    Forward,
    /// `-1`: towards the previous slide.
    Backward,
}

impl Direction {
    /// Returns the signed offset of this direction.
    #[must_use]
    pub fn offset(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// Applies this direction to `index` in a cycle of `len` slides.
    ///
    /// Computes `(index + offset + len) mod len`. Returns `None` for an empty
    /// cycle.
    #[must_use]
    pub fn step(self, index: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let len_i = len as i64;
        let next = (index as i64 % len_i + self.offset() + len_i) % len_i;
        Some(next as usize)
    }
}

// =============================================================================
// AutoplayInterval
// =============================================================================

/// Autoplay cadence, guaranteed to be within 100 ms – 10 min.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayInterval(u64);

impl AutoplayInterval {
    /// Creates a new interval, clamping the value to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AutoplayInterval {
    fn default() -> Self {
        Self(DEFAULT_AUTOPLAY_INTERVAL_MS)
    }
}

// =============================================================================
// TransitionDuration
// =============================================================================

/// Length of the navigation lock after each slide change (0 – 10 s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDuration(u64);

impl TransitionDuration {
    /// Creates a new duration, clamping the value to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TRANSITION_DURATION_MS, MAX_TRANSITION_DURATION_MS))
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the lock length as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(DEFAULT_TRANSITION_DURATION_MS)
    }
}

// =============================================================================
// FrameInterval
// =============================================================================

/// Progress sampling period (1 ms – 1 s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInterval(u64);

impl FrameInterval {
    /// Creates a new sampling period, clamping the value to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_FRAME_INTERVAL_MS, MAX_FRAME_INTERVAL_MS))
    }

    /// Returns the period in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the period as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for FrameInterval {
    fn default() -> Self {
        Self(DEFAULT_FRAME_INTERVAL_MS)
    }
}

// =============================================================================
// Progress
// =============================================================================

/// Elapsed fraction of the current autoplay interval, always in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Progress(f32);

impl Progress {
    /// No time elapsed.
    pub const ZERO: Self = Self(0.0);

    /// Creates a progress value, clamping to `[0, 1]`. NaN maps to zero.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Computes `min(elapsed / interval, 1)`.
    #[must_use]
    pub fn from_elapsed(elapsed: Duration, interval: AutoplayInterval) -> Self {
        let ratio = elapsed.as_secs_f64() / interval.as_duration().as_secs_f64();
        Self::new(ratio as f32)
    }

    /// Returns the raw fraction.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true once the full interval has elapsed.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= 1.0
    }
}

// =============================================================================
// JournalCapacity
// =============================================================================

/// Number of events retained by the diagnostics journal (1 – 10 000).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalCapacity(usize);

impl JournalCapacity {
    /// Creates a new capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_JOURNAL_CAPACITY, MAX_JOURNAL_CAPACITY))
    }

    /// Returns the capacity.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for JournalCapacity {
    fn default() -> Self {
        Self(DEFAULT_JOURNAL_CAPACITY)
    }
}

// =============================================================================
// ResumePolicy
// =============================================================================

/// How the grace period after keyboard navigation is scheduled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ResumePolicy {
    /// Every key press schedules its own resume; earlier ones are never cancelled.
    #[default]
    Independent,
    /// A key press cancels the pending resume, so the grace period counts
    /// from the last interaction.
    Restart,
}
