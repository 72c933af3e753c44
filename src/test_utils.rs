// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and deterministic timing.
//!
//! Re-exports the `approx` crate's absolute-difference assertion for float comparison,
//! which handles floating-point precision issues that `assert_eq!` cannot.

// Re-export the approx macro for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::carousel::{Carousel, CarouselOptions};
use crate::clock::ManualClock;
use std::time::Duration;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

/// Builds a mounted carousel over `slides` driven by a fresh manual clock.
///
/// Returns the clock so the test can move time forward.
pub fn mounted_carousel<T>(
    slides: Vec<T>,
    options: CarouselOptions,
) -> (Carousel<T, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let mut carousel = Carousel::with_clock(slides, options, clock.clone());
    carousel.mount();
    (carousel, clock)
}

/// Moves `clock` forward by `millis` and lets the carousel catch up.
pub fn advance_ms<T>(carousel: &mut Carousel<T, ManualClock>, clock: &ManualClock, millis: u64) {
    clock.advance(Duration::from_millis(millis));
    carousel.poll();
}
