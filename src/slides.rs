// SPDX-License-Identifier: MPL-2.0
//! Hero slide payload and TOML slide-deck loading.
//!
//! The controller never looks inside a slide; this module only exists so the
//! demo application has something to render. A deck file lists slides as an
//! array of tables:
//!
//! ```toml
//! [[slides]]
//! image = "images/spring.jpg"
//! title = "Spring Collection"
//! name = "spring"
//! description = "Fresh colours for the new season."
//!
//! [slides.button]
//! text = "Shop now"
//! link = "/collections/spring"
//! ```

use crate::error::{Result, SlideDeckError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Call-to-action shown on a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideButton {
    pub text: String,
    pub link: String,
}

/// One hero banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSlide {
    /// Image path or URL.
    pub image: String,
    pub title: String,
    /// Short identifier, also used as the image alt text.
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "btn")]
    pub button: SlideButton,
}

#[derive(Debug, Deserialize)]
struct Deck {
    #[serde(default)]
    slides: Vec<HeroSlide>,
}

/// Reads and validates a slide deck from `path`.
pub fn load_deck(path: &Path) -> Result<Vec<HeroSlide>> {
    let content = fs::read_to_string(path)?;
    let slides = parse_deck(&content)?;
    tracing::debug!(path = %path.display(), count = slides.len(), "loaded slide deck");
    Ok(slides)
}

/// Parses and validates a slide deck.
///
/// A deck must contain at least one slide, and every slide needs a
/// non-blank `image`, `title`, `name`, button text and button link.
/// `description` may be empty.
pub fn parse_deck(content: &str) -> std::result::Result<Vec<HeroSlide>, SlideDeckError> {
    let deck: Deck =
        toml::from_str(content).map_err(|err| SlideDeckError::Malformed(err.to_string()))?;

    if deck.slides.is_empty() {
        return Err(SlideDeckError::Empty);
    }
    for (index, slide) in deck.slides.iter().enumerate() {
        validate(index, slide)?;
    }
    Ok(deck.slides)
}

fn validate(index: usize, slide: &HeroSlide) -> std::result::Result<(), SlideDeckError> {
    let required = [
        ("image", &slide.image),
        ("title", &slide.title),
        ("name", &slide.name),
        ("button.text", &slide.button.text),
        ("button.link", &slide.button.link),
    ];
    match required.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((field, _)) => Err(SlideDeckError::MissingField { index, field }),
        None => Ok(()),
    }
}

/// Deck shown when no deck file is given on the command line.
#[must_use]
pub fn sample_deck() -> Vec<HeroSlide> {
    [
        (
            "images/hero-1.jpg",
            "New Season Arrivals",
            "arrivals",
            "Discover the pieces everyone is talking about.",
            "Explore",
            "/new",
        ),
        (
            "images/hero-2.jpg",
            "Free Shipping Weekend",
            "shipping",
            "No minimum order, through Sunday night.",
            "Start shopping",
            "/shop",
        ),
        (
            "images/hero-3.jpg",
            "Members Save More",
            "members",
            "Join today and get early access to every sale.",
            "Join now",
            "/account/register",
        ),
    ]
    .into_iter()
    .map(|(image, title, name, description, text, link)| HeroSlide {
        image: image.to_string(),
        title: title.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        button: SlideButton {
            text: text.to_string(),
            link: link.to_string(),
        },
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    const TWO_SLIDES: &str = r#"
[[slides]]
image = "a.jpg"
title = "First"
name = "first"
description = "One"
button = { text = "Go", link = "/a" }

[[slides]]
image = "b.jpg"
title = "Second"
name = "second"
button = { text = "Go", link = "/b" }
"#;

    #[test]
    fn parses_slides_in_file_order() {
        let slides = parse_deck(TWO_SLIDES).expect("deck should parse");
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].title, "First");
        assert_eq!(slides[1].button.link, "/b");
        assert_eq!(slides[1].description, "");
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(parse_deck(""), Err(SlideDeckError::Empty));
        assert_eq!(parse_deck("slides = []"), Err(SlideDeckError::Empty));
    }

    #[test]
    fn blank_required_field_is_reported_with_position() {
        let content = TWO_SLIDES.replace("title = \"Second\"", "title = \"  \"");
        assert_eq!(
            parse_deck(&content),
            Err(SlideDeckError::MissingField {
                index: 1,
                field: "title"
            })
        );
    }

    #[test]
    fn btn_is_accepted_for_button() {
        let content = "[[slides]]\nimage = \"a\"\ntitle = \"t\"\nname = \"n\"\n\
                       btn = { text = \"Shop\", link = \"/shop\" }\n";
        let slides = parse_deck(content).expect("deck should parse");
        assert_eq!(slides[0].button.text, "Shop");
        assert_eq!(slides[0].button.link, "/shop");
    }

    #[test]
    fn missing_button_is_malformed() {
        let content = "[[slides]]\nimage = \"a\"\ntitle = \"t\"\nname = \"n\"\n";
        assert!(matches!(
            parse_deck(content),
            Err(SlideDeckError::Malformed(_))
        ));
    }

    #[test]
    fn load_deck_reads_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("deck.toml");
        fs::write(&path, TWO_SLIDES).expect("failed to write deck");

        let slides = load_deck(&path).expect("deck should load");
        assert_eq!(slides[0].name, "first");
    }

    #[test]
    fn load_deck_wraps_validation_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("deck.toml");
        fs::write(&path, "").expect("failed to write deck");

        assert!(matches!(
            load_deck(&path),
            Err(Error::Slides(SlideDeckError::Empty))
        ));
    }

    #[test]
    fn load_deck_missing_file_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        assert!(matches!(
            load_deck(&temp_dir.path().join("nope.toml")),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn sample_deck_passes_validation() {
        let slides = sample_deck();
        assert_eq!(slides.len(), 3);
        for (index, slide) in slides.iter().enumerate() {
            assert_eq!(validate(index, slide), Ok(()));
        }
    }
}
