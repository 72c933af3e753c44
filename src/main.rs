// SPDX-License-Identifier: MPL-2.0
use hero_carousel::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = pico_args::Arguments::from_env();

    let config_dir = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("hero_carousel: {err}");
            eprintln!("usage: hero_carousel [--config-dir DIR] [DECK.toml]");
            std::process::exit(2);
        }
    };

    let flags = Flags {
        config_dir,
        deck_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
