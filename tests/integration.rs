// SPDX-License-Identifier: MPL-2.0
use hero_carousel::carousel::{Carousel, CarouselControls, CarouselOptions, NavigationKey};
use hero_carousel::clock::ManualClock;
use hero_carousel::config::{self, Config, ResumePolicy};
use hero_carousel::diagnostics::{CarouselEvent, NavigationOrigin};
use hero_carousel::slides::{self, HeroSlide};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

fn mounted(
    slides: Vec<HeroSlide>,
    options: CarouselOptions,
) -> (Carousel<HeroSlide, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let mut carousel = Carousel::with_clock(slides, options, clock.clone());
    carousel.mount();
    (carousel, clock)
}

fn step(carousel: &mut Carousel<HeroSlide, ManualClock>, clock: &ManualClock, millis: u64) {
    clock.advance(Duration::from_millis(millis));
    carousel.poll();
}

fn titles(carousel: &Carousel<HeroSlide, ManualClock>) -> Vec<String> {
    carousel
        .ordered_slides()
        .into_iter()
        .map(|entry| entry.slide.title.clone())
        .collect()
}

#[test]
fn deck_and_settings_drive_the_controller() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let deck_path = dir.path().join("deck.toml");
    fs::write(
        &deck_path,
        r#"
[[slides]]
image = "a.jpg"
title = "Alpha"
name = "alpha"
button = { text = "Go", link = "/a" }

[[slides]]
image = "b.jpg"
title = "Beta"
name = "beta"
button = { text = "Go", link = "/b" }

[[slides]]
image = "c.jpg"
title = "Gamma"
name = "gamma"
button = { text = "Go", link = "/c" }
"#,
    )
    .expect("Failed to write deck");

    let mut settings = Config::default();
    settings.carousel.autoplay_interval_ms = Some(2_000);
    settings.carousel.transition_duration_ms = Some(500);
    config::save_with_override(&settings, Some(dir.path().to_path_buf()))
        .expect("Failed to save settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let deck = slides::load_deck(&deck_path).expect("Failed to load deck");
    let (mut carousel, clock) = mounted(deck, CarouselOptions::from_config(&loaded));
    assert_eq!(titles(&carousel), vec!["Alpha", "Beta", "Gamma"]);

    step(&mut carousel, &clock, 2_000);
    assert_eq!(titles(&carousel), vec!["Beta", "Gamma", "Alpha"]);
    step(&mut carousel, &clock, 500);
    assert!(!carousel.is_animating());

    step(&mut carousel, &clock, 1_500);
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn keyboard_interaction_holds_autoplay_for_one_interval() {
    let (mut carousel, clock) = mounted(slides::sample_deck(), CarouselOptions::default());

    step(&mut carousel, &clock, 3_000);
    carousel.handle_key(NavigationKey::Right);
    assert!(carousel.is_paused());

    // The tick at t=5000 and t=10000 would have advanced twice without the key press.
    step(&mut carousel, &clock, 2_000);
    assert_eq!(carousel.current_index(), 1);
    step(&mut carousel, &clock, 3_000);
    assert!(!carousel.is_paused());
    step(&mut carousel, &clock, 2_000);
    assert_eq!(carousel.current_index(), 2);

    let autoplay_advances = carousel.journal().count(|e| {
        matches!(
            e,
            CarouselEvent::Advanced {
                origin: NavigationOrigin::Autoplay,
                ..
            }
        )
    });
    assert_eq!(autoplay_advances, 1);
}

#[test]
fn restart_policy_from_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[keyboard]\nresume_policy = \"restart\"\n")
        .expect("Failed to write settings");

    let loaded = config::load_from_path(&path).expect("Failed to load settings");
    let options = CarouselOptions::from_config(&loaded);
    assert_eq!(options.resume_policy, ResumePolicy::Restart);
    assert!(options.keyboard);
}

#[test]
fn controls_trait_object_sees_same_state() {
    let (mut carousel, clock) = mounted(slides::sample_deck(), CarouselOptions::default());
    step(&mut carousel, &clock, 2_500);

    {
        let controls: &mut dyn CarouselControls = &mut carousel;
        assert!((controls.autoplay_progress() - 0.5).abs() < 1e-3);
        controls.pause_autoplay();
    }
    step(&mut carousel, &clock, 10_000);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn dropping_the_controller_unmounts_it() {
    let (carousel, _clock) = mounted(slides::sample_deck(), CarouselOptions::default());
    assert!(carousel.is_mounted());
    drop(carousel);
}

#[test]
fn replacing_slides_keeps_a_valid_index() {
    let options = CarouselOptions::default().with_transition_duration_ms(0);
    let (mut carousel, _clock) = mounted(slides::sample_deck(), options);
    carousel.prev();
    assert_eq!(carousel.current_index(), 2);

    let mut fewer = slides::sample_deck();
    fewer.truncate(2);
    carousel.set_slides(fewer);
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(titles(&carousel).len(), 2);
}
