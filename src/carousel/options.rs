// SPDX-License-Identifier: MPL-2.0
//! Immutable controller configuration.

use crate::config::Config;
use crate::domain::carousel::{
    AutoplayInterval, FrameInterval, JournalCapacity, ResumePolicy, TransitionDuration,
};

/// Options fixed for the lifetime of one [`Carousel`](super::Carousel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselOptions {
    pub autoplay: bool,
    pub autoplay_interval: AutoplayInterval,
    pub transition_duration: TransitionDuration,
    pub frame_interval: FrameInterval,
    /// Attach the arrow-key binding on mount.
    pub keyboard: bool,
    pub resume_policy: ResumePolicy,
    pub journal_capacity: JournalCapacity,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            autoplay: crate::config::DEFAULT_AUTOPLAY,
            autoplay_interval: AutoplayInterval::default(),
            transition_duration: TransitionDuration::default(),
            frame_interval: FrameInterval::default(),
            keyboard: true,
            resume_policy: ResumePolicy::default(),
            journal_capacity: JournalCapacity::default(),
        }
    }
}

impl CarouselOptions {
    /// Derives controller options from the settings file, filling gaps
    /// with defaults and clamping out-of-range values.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        let carousel = &config.carousel;
        Self {
            autoplay: carousel.autoplay.unwrap_or(defaults.autoplay),
            autoplay_interval: carousel
                .autoplay_interval_ms
                .map_or(defaults.autoplay_interval, AutoplayInterval::new),
            transition_duration: carousel
                .transition_duration_ms
                .map_or(defaults.transition_duration, TransitionDuration::new),
            frame_interval: carousel
                .frame_interval_ms
                .map_or(defaults.frame_interval, FrameInterval::new),
            keyboard: config.keyboard.enabled.unwrap_or(defaults.keyboard),
            resume_policy: config
                .keyboard
                .resume_policy
                .unwrap_or(defaults.resume_policy),
            journal_capacity: config
                .diagnostics
                .journal_capacity
                .map_or(defaults.journal_capacity, JournalCapacity::new),
        }
    }

    #[must_use]
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    #[must_use]
    pub fn with_autoplay_interval_ms(mut self, millis: u64) -> Self {
        self.autoplay_interval = AutoplayInterval::new(millis);
        self
    }

    #[must_use]
    pub fn with_transition_duration_ms(mut self, millis: u64) -> Self {
        self.transition_duration = TransitionDuration::new(millis);
        self
    }

    #[must_use]
    pub fn with_frame_interval_ms(mut self, millis: u64) -> Self {
        self.frame_interval = FrameInterval::new(millis);
        self
    }

    #[must_use]
    pub fn with_keyboard(mut self, keyboard: bool) -> Self {
        self.keyboard = keyboard;
        self
    }

    #[must_use]
    pub fn with_resume_policy(mut self, policy: ResumePolicy) -> Self {
        self.resume_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CarouselConfig, KeyboardConfig};

    #[test]
    fn defaults_follow_reference_values() {
        let options = CarouselOptions::default();
        assert!(options.autoplay);
        assert_eq!(options.autoplay_interval.millis(), 5_000);
        assert_eq!(options.transition_duration.millis(), 1_000);
        assert!(options.keyboard);
        assert_eq!(options.resume_policy, ResumePolicy::Independent);
    }

    #[test]
    fn from_default_config_equals_default_options() {
        assert_eq!(
            CarouselOptions::from_config(&Config::default()),
            CarouselOptions::default()
        );
    }

    #[test]
    fn from_config_clamps_values() {
        let config = Config {
            carousel: CarouselConfig {
                autoplay: Some(false),
                autoplay_interval_ms: Some(1),
                transition_duration_ms: Some(99_999),
                frame_interval_ms: None,
            },
            keyboard: KeyboardConfig {
                enabled: Some(false),
                resume_policy: Some(ResumePolicy::Restart),
            },
            ..Config::default()
        };

        let options = CarouselOptions::from_config(&config);
        assert!(!options.autoplay);
        assert_eq!(options.autoplay_interval, AutoplayInterval::new(0));
        assert_eq!(options.transition_duration.millis(), 10_000);
        assert!(!options.keyboard);
        assert_eq!(options.resume_policy, ResumePolicy::Restart);
    }

    #[test]
    fn builders_override_fields() {
        let options = CarouselOptions::default()
            .with_autoplay(false)
            .with_autoplay_interval_ms(2_000)
            .with_transition_duration_ms(300)
            .with_frame_interval_ms(8);
        assert!(!options.autoplay);
        assert_eq!(options.autoplay_interval.millis(), 2_000);
        assert_eq!(options.transition_duration.millis(), 300);
        assert_eq!(options.frame_interval.millis(), 8);
    }
}
