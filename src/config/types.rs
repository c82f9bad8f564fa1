use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Streakbot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the tracker record
    pub data_file: PathBuf,

    /// Display settings
    pub display: Display,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Display {
    /// Prefix responses with the robot persona
    pub robot: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("./streakbot-data.json"),
            display: Display::default(),
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self { robot: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("./streakbot-data.json"));
        assert!(config.display.robot);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.data_file, config.data_file);
        assert!(parsed.display.robot);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = toml::from_str("[display]\nrobot = false\n").unwrap();
        assert_eq!(parsed.data_file, PathBuf::from("./streakbot-data.json"));
        assert!(!parsed.display.robot);
    }
}
