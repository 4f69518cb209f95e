//! XDG-style path utilities for the configuration directory.
//!
//! Paths follow the XDG Base Directory conventions on every platform
//! rather than OS-specific locations.

use std::path::PathBuf;

use crate::config::ConfigError;

const APP_DIR: &str = "bhasha";

/// Returns the configuration directory for bhasha.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/bhasha` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/bhasha` otherwise
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => Ok(home_dir()?.join(".config").join(APP_DIR)),
    }
}

fn home_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::HomeDir)
}
