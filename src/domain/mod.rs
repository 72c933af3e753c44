// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO UI dependencies.
//!
//! # Modules
//!
//! - [`carousel`]: Carousel timing and navigation types
//!   ([`AutoplayInterval`](carousel::AutoplayInterval),
//!   [`TransitionDuration`](carousel::TransitionDuration),
//!   [`Progress`](carousel::Progress), [`Direction`](carousel::Direction))

pub mod carousel;
