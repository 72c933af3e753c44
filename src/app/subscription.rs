// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and window events are routed to [`Message`]s here; the
//! frame subscription paces the controller's scheduler.

use super::Message;
use crate::carousel::NavigationKey;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Routes arrow keys and window close requests.
///
/// Keys already captured by a focused widget are not forwarded.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if let event::Event::Window(window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }

        match (event, status) {
            (
                event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
                event::Status::Ignored,
            ) => navigation_key(&key).map(Message::Key),
            _ => None,
        }
    })
}

/// Emits a frame message every `frame_interval` while the carousel is mounted.
pub fn create_frame_subscription(mounted: bool, frame_interval: Duration) -> Subscription<Message> {
    if mounted {
        time::every(frame_interval).map(Message::Frame)
    } else {
        Subscription::none()
    }
}

/// Maps the arrow keys the carousel understands.
pub(crate) fn navigation_key(key: &keyboard::Key) -> Option<NavigationKey> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(NavigationKey::Left),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(NavigationKey::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_navigation_keys() {
        assert_eq!(
            navigation_key(&keyboard::Key::Named(keyboard::key::Named::ArrowLeft)),
            Some(NavigationKey::Left)
        );
        assert_eq!(
            navigation_key(&keyboard::Key::Named(keyboard::key::Named::ArrowRight)),
            Some(NavigationKey::Right)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(
            navigation_key(&keyboard::Key::Named(keyboard::key::Named::ArrowUp)),
            None
        );
        assert_eq!(
            navigation_key(&keyboard::Key::Character("l".into())),
            None
        );
    }
}
