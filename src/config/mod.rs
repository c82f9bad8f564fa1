//! Configuration module
//!
//! Handles loading of streakbot.toml configuration files.
//! Defines Config and Display types.

mod types;

pub use types::Config;

use crate::error::{Result, StreakError};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "streakbot.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        StreakError::Config(format!(
            "Cannot read config from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Resolve the effective configuration.
///
/// An explicit path must load. Without one, `streakbot.toml` in the working
/// directory is used if present, otherwise the defaults.
pub fn resolve(explicit: Option<PathBuf>) -> Result<Config> {
    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "loading explicit config");
        return load(&path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        tracing::debug!(path = %default_path.display(), "loading config from working directory");
        load(default_path)
    } else {
        tracing::debug!("no config file, using defaults");
        Ok(Config::default())
    }
}
