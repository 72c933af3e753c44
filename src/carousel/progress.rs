// SPDX-License-Identifier: MPL-2.0
//! Elapsed-fraction tracking for the autoplay progress indicator.

use crate::domain::carousel::{AutoplayInterval, Progress};
use std::time::Instant;

/// Samples wall-clock time against a resettable baseline.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    baseline: Instant,
    value: Progress,
}

impl ProgressTracker {
    #[must_use]
    pub fn new(baseline: Instant) -> Self {
        Self {
            baseline,
            value: Progress::ZERO,
        }
    }

    /// Restarts the interval at `at` and reports zero progress.
    pub fn reset(&mut self, at: Instant) {
        self.baseline = at;
        self.value = Progress::ZERO;
    }

    /// Drops the reported value to zero without moving the baseline.
    pub fn clear(&mut self) {
        self.value = Progress::ZERO;
    }

    /// Updates the value to `min((now - baseline) / interval, 1)`.
    ///
    /// A `now` earlier than the baseline counts as zero elapsed time.
    pub fn sample(&mut self, now: Instant, interval: AutoplayInterval) {
        let elapsed = now.saturating_duration_since(self.baseline);
        self.value = Progress::from_elapsed(elapsed, interval);
    }

    #[must_use]
    pub fn value(&self) -> Progress {
        self.value
    }

    #[must_use]
    pub fn baseline(&self) -> Instant {
        self.baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use std::time::Duration;

    #[test]
    fn sample_reports_fraction_of_interval() {
        let t0 = Instant::now();
        let mut tracker = ProgressTracker::new(t0);
        tracker.sample(t0 + Duration::from_millis(1_250), AutoplayInterval::new(5_000));
        assert_abs_diff_eq!(tracker.value().value(), 0.25, epsilon = F32_EPSILON);
    }

    #[test]
    fn sample_saturates_at_one() {
        let t0 = Instant::now();
        let mut tracker = ProgressTracker::new(t0);
        tracker.sample(t0 + Duration::from_secs(30), AutoplayInterval::new(5_000));
        assert_eq!(tracker.value().value(), 1.0);
    }

    #[test]
    fn reset_zeroes_value_and_moves_baseline() {
        let t0 = Instant::now();
        let mut tracker = ProgressTracker::new(t0);
        let interval = AutoplayInterval::new(1_000);
        tracker.sample(t0 + Duration::from_millis(500), interval);

        let t1 = t0 + Duration::from_millis(600);
        tracker.reset(t1);
        assert_eq!(tracker.value(), Progress::ZERO);
        assert_eq!(tracker.baseline(), t1);

        tracker.sample(t1 + Duration::from_millis(100), interval);
        assert_abs_diff_eq!(tracker.value().value(), 0.1, epsilon = F32_EPSILON);
    }

    #[test]
    fn sample_before_baseline_is_zero() {
        let t0 = Instant::now();
        let mut tracker = ProgressTracker::new(t0 + Duration::from_secs(1));
        tracker.sample(t0, AutoplayInterval::default());
        assert_eq!(tracker.value(), Progress::ZERO);
    }

    #[test]
    fn progress_grows_monotonically() {
        let t0 = Instant::now();
        let mut tracker = ProgressTracker::new(t0);
        let interval = AutoplayInterval::new(5_000);
        let mut last = Progress::ZERO;
        for step in 1..=40 {
            tracker.sample(t0 + Duration::from_millis(step * 150), interval);
            assert!(tracker.value() >= last);
            last = tracker.value();
        }
        assert!(last.is_complete());
    }
}
