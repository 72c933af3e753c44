// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - argument of the `*_with_override()` functions
//! 2. **CLI argument** (`--config-dir`) - recorded by [`init_cli_override`]
//! 3. **Environment variable** (`HERO_CAROUSEL_CONFIG_DIR`), ignored when empty
//! 4. **Platform default** - `<config dir>/HeroCarousel` via `dirs`

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "HeroCarousel";

/// Environment variable naming a settings directory.
pub const ENV_CONFIG_DIR: &str = "HERO_CAROUSEL_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument. Only the first call counts.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir override already initialized");
    }
}

/// Settings directory, or `None` when the platform has no config dir.
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

/// Settings directory, preferring `override_path` over every other source.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| CLI_CONFIG_DIR.get().cloned().flatten())
        .or_else(env_config_dir)
        .or_else(|| dirs::config_dir().map(|base| base.join(APP_DIR_NAME)))
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
