//! Configuration loading and types.
//!
//! Loads config from `./teatime.toml` or `~/.config/teatime/config.toml`.
//! Having no config file is fine: the built-in teas and default settings
//! apply.
//!
//! # Example teatime.toml
//!
//! ```toml
//! teas_file = "/home/me/.config/teatime/teas.json"
//! notify = false
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs::read_to_string, path::PathBuf};

// -----------------------------------------------------------------------------
// Types
// -----------------------------------------------------------------------------

/// Top-level config structure.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Tea definitions file to use when `--file` is not given
    #[serde(default)]
    pub teas_file: Option<PathBuf>,
    /// Whether to show a desktop notification when the tea is ready
    #[serde(default = "default_notify")]
    pub notify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            teas_file: None,
            notify: true,
        }
    }
}

fn default_notify() -> bool {
    true
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

/// Load configuration from disk.
///
/// Searches for config in order:
/// 1. `./teatime.toml` (current directory)
/// 2. `~/.config/teatime/config.toml` (user config)
///
/// Returns defaults when neither exists; a file that exists but does not
/// parse is an error.
pub fn load_config() -> Result<Config> {
    let local = PathBuf::from("./teatime.toml");
    let home_config = std::env::var_os("HOME").map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("teatime")
            .join("config.toml")
    });

    let config_path = if local.exists() {
        local
    } else if let Some(path) = home_config.filter(|path| path.exists()) {
        path
    } else {
        return Ok(Config::default());
    };

    let content = read_to_string(&config_path)
        .with_context(|| format!("Failed to read {:?}", config_path))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse {:?}", config_path))
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
