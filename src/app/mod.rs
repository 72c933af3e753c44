// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a hero carousel.
//!
//! The `App` struct owns one mounted [`Carousel`] and translates window
//! events into controller operations: display frames drive `poll`, arrow
//! keys go through the keyboard binding, hovering the slide pauses autoplay
//! and closing the window unmounts the controller before exiting.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::carousel::{Carousel, CarouselOptions};
use crate::config::{self, paths};
use crate::slides::{self, HeroSlide};
use iced::{window, Element, Subscription, Task};
use std::fmt;
use std::path::Path;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Root Iced application state.
pub struct App {
    carousel: Carousel<HeroSlide>,
    /// Config or deck problems shown above the slide.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("carousel", &self.carousel)
            .field("warning", &self.warning)
            .finish()
    }
}

/// Builds the window settings.
///
/// Close requests are handled by the app so the controller can be torn down
/// first.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and the slide deck, then mounts the carousel.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();
        let config_warning =
            config_warning.map(|_| String::from("Settings could not be read; using defaults"));
        let (slides, deck_warning) = load_slides(flags.deck_path.as_deref().map(Path::new));

        let mut app = Self::with_slides(slides, CarouselOptions::from_config(&config));
        app.warning = match (config_warning, deck_warning) {
            (Some(config), Some(deck)) => Some(format!("{config}; {deck}")),
            (config, deck) => config.or(deck),
        };
        (app, Task::none())
    }

    /// Builds an app around a freshly mounted carousel.
    fn with_slides(slides: Vec<HeroSlide>, options: CarouselOptions) -> Self {
        let mut carousel = Carousel::new(slides, options);
        carousel.mount();
        Self {
            carousel,
            warning: None,
        }
    }

    fn title(&self) -> String {
        match self.carousel.current_slide() {
            Some(slide) => format!("{} - Hero Carousel", slide.title),
            None => String::from("Hero Carousel"),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let frame_sub = subscription::create_frame_subscription(
            self.carousel.is_mounted(),
            self.carousel.options().frame_interval.as_duration(),
        );
        Subscription::batch([event_sub, frame_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Frame(_) => self.carousel.poll(),
            Message::Key(key) => self.carousel.handle_key(key),
            Message::Next => self.carousel.next(),
            Message::Prev => self.carousel.prev(),
            Message::HoverEnter => self.carousel.pause_autoplay(),
            Message::HoverExit => self.carousel.resume_autoplay(),
            Message::WindowCloseRequested(_) => {
                self.carousel.unmount();
                return iced::exit();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            ordered: self
                .carousel
                .ordered_slides()
                .into_iter()
                .map(|entry| entry.slide)
                .collect(),
            current_index: self.carousel.current_index(),
            slide_count: self.carousel.len(),
            progress: self.carousel.autoplay_progress(),
            status: self.carousel.status(),
            warning: self.warning.as_deref(),
        })
    }
}

/// Reads the deck at `path`, falling back to the built-in deck on failure.
fn load_slides(path: Option<&Path>) -> (Vec<HeroSlide>, Option<String>) {
    let Some(path) = path else {
        return (slides::sample_deck(), None);
    };
    match slides::load_deck(path) {
        Ok(slides) => (slides, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "using built-in slides");
            (slides::sample_deck(), Some(err.to_string()))
        }
    }
}
