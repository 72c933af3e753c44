// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Autoplay**: Rotation cadence and on/off default
//! - **Transition**: Navigation lock duration
//! - **Frame**: Progress sampling period
//! - **Diagnostics**: Event journal capacity

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Whether slides rotate automatically by default.
pub const DEFAULT_AUTOPLAY: bool = true;

/// Default autoplay interval (in milliseconds).
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5_000;

/// Minimum autoplay interval (in milliseconds).
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 100;

/// Maximum autoplay interval (in milliseconds).
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 600_000;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default transition lock duration (in milliseconds).
pub const DEFAULT_TRANSITION_DURATION_MS: u64 = 1_000;

/// Minimum transition lock duration (in milliseconds).
pub const MIN_TRANSITION_DURATION_MS: u64 = 0;

/// Maximum transition lock duration (in milliseconds).
pub const MAX_TRANSITION_DURATION_MS: u64 = 10_000;

// ==========================================================================
// Frame Sampling Defaults
// ==========================================================================

/// Default progress sampling period (in milliseconds, ~60 FPS).
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Minimum progress sampling period (in milliseconds).
pub const MIN_FRAME_INTERVAL_MS: u64 = 1;

/// Maximum progress sampling period (in milliseconds).
pub const MAX_FRAME_INTERVAL_MS: u64 = 1_000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of events kept by the carousel journal.
pub const DEFAULT_JOURNAL_CAPACITY: usize = 256;

/// Minimum journal capacity.
pub const MIN_JOURNAL_CAPACITY: usize = 1;

/// Maximum journal capacity.
pub const MAX_JOURNAL_CAPACITY: usize = 10_000;
