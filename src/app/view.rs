// SPDX-License-Identifier: MPL-2.0
//! Rendering of the hero carousel window.

use super::Message;
use crate::carousel::AutoplayStatus;
use crate::slides::HeroSlide;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, progress_bar, text, Column, Container, Row},
    Element, Length,
};

const SPACING: f32 = 12.0;
const PADDING: f32 = 24.0;
const TITLE_SIZE: f32 = 32.0;
const BODY_SIZE: f32 = 16.0;
const CAPTION_SIZE: f32 = 12.0;

/// Contextual data needed to render the window.
pub struct ViewContext<'a> {
    /// Slides in display order, current slide first.
    pub ordered: Vec<&'a HeroSlide>,
    pub current_index: usize,
    pub slide_count: usize,
    pub progress: f32,
    pub status: AutoplayStatus,
    pub warning: Option<&'a str>,
}

/// Render the carousel.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new().spacing(SPACING).width(Length::Fill);

    if let Some(warning) = ctx.warning {
        content = content.push(text(warning).size(CAPTION_SIZE));
    }

    let slide_area: Element<'_, Message> = match ctx.ordered.first().copied() {
        Some(slide) => slide_card(slide),
        None => text("No slides").size(BODY_SIZE).into(),
    };
    content = content.push(
        mouse_area(slide_area)
            .on_enter(Message::HoverEnter)
            .on_exit(Message::HoverExit),
    );

    let position = if ctx.slide_count == 0 {
        String::from("0 / 0")
    } else {
        format!("{} / {}", ctx.current_index + 1, ctx.slide_count)
    };
    let controls = Row::new()
        .spacing(SPACING)
        .align_y(Vertical::Center)
        .push(button(text("‹ Prev")).on_press(Message::Prev))
        .push(text(position).size(BODY_SIZE))
        .push(button(text("Next ›")).on_press(Message::Next))
        .push(text(status_label(ctx.status)).size(CAPTION_SIZE));
    content = content.push(controls);

    if ctx.status != AutoplayStatus::Disabled {
        content = content.push(progress_bar(0.0..=1.0, ctx.progress));
    }

    if ctx.ordered.len() > 1 {
        let upcoming = ctx
            .ordered
            .iter()
            .skip(1)
            .map(|slide| slide.title.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        content = content.push(text(format!("Up next: {upcoming}")).size(CAPTION_SIZE));
    }

    Container::new(content)
        .padding(PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn slide_card(slide: &HeroSlide) -> Element<'_, Message> {
    Column::new()
        .spacing(SPACING)
        .push(text(&slide.title).size(TITLE_SIZE))
        .push(text(&slide.description).size(BODY_SIZE))
        .push(text(format!("[{}] → {}", slide.button.text, slide.button.link)).size(BODY_SIZE))
        .push(text(format!("{} ({})", slide.image, slide.name)).size(CAPTION_SIZE))
        .into()
}

fn status_label(status: AutoplayStatus) -> &'static str {
    match status {
        AutoplayStatus::Disabled => "autoplay off",
        AutoplayStatus::Running => "playing",
        AutoplayStatus::Paused => "paused",
    }
}
