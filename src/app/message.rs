// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::carousel::NavigationKey;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Display frame; drives the controller's scheduler.
    Frame(Instant),
    /// Arrow key pressed while the window had focus.
    Key(NavigationKey),
    Next,
    Prev,
    /// Cursor entered the slide area.
    HoverEnter,
    /// Cursor left the slide area.
    HoverExit,
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Optional slide deck to show instead of the built-in one.
    pub deck_path: Option<String>,
}
