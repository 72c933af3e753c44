// SPDX-License-Identifier: MPL-2.0
//! Object-safe control surface for consumers that render navigation
//! buttons or a progress indicator.

use super::Carousel;
use crate::clock::Clock;

/// Operations a view may invoke on a carousel, independent of slide type.
pub trait CarouselControls {
    fn next(&mut self);
    fn prev(&mut self);
    fn pause_autoplay(&mut self);
    fn resume_autoplay(&mut self);
    /// Elapsed fraction of the autoplay interval, in `[0, 1]`.
    fn autoplay_progress(&self) -> f32;
}

impl<T, C: Clock> CarouselControls for Carousel<T, C> {
    fn next(&mut self) {
        Carousel::next(self);
    }

    fn prev(&mut self) {
        Carousel::prev(self);
    }

    fn pause_autoplay(&mut self) {
        Carousel::pause_autoplay(self);
    }

    fn resume_autoplay(&mut self) {
        Carousel::resume_autoplay(self);
    }

    fn autoplay_progress(&self) -> f32 {
        Carousel::autoplay_progress(self)
    }
}
