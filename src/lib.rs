// SPDX-License-Identifier: MPL-2.0
//! `hero_carousel` is an automatic slide-rotation controller for hero banners.
//!
//! The [`carousel::Carousel`] controller keeps a current slide, a transition
//! lock, an autoplay timer with a progress value and an arrow-key binding. It
//! is generic over the slide payload and over the time source, so the same
//! code drives the bundled `iced` demo and deterministic tests.

#![doc(html_root_url = "https://docs.rs/hero_carousel/0.1.0")]

pub mod app;
pub mod carousel;
pub mod clock;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod slides;

#[cfg(test)]
mod test_utils;
