//! Command-line interface module
//!
//! Implements all CLI commands:
//! - start: Begin a new streak
//! - status: Show the current streak
//! - reset: Record a reset and restart the streak
//! - history: List recorded resets
pub mod history;
pub mod reset;
pub mod start;
pub mod status;

use chrono::NaiveDate;
use std::path::PathBuf;

use crate::config::Config;

const ROBOT: &str = "🤖";

/// Everything a command needs to know about its invocation
#[derive(Debug, Clone)]
pub struct Context {
    /// Tracker record location
    pub data_file: PathBuf,

    /// Local calendar date the command runs on
    pub today: NaiveDate,

    /// Speak with the robot persona
    pub robot: bool,
}

impl Context {
    pub fn new(config: &Config, data_override: Option<PathBuf>, today: NaiveDate) -> Self {
        Self {
            data_file: data_override.unwrap_or_else(|| config.data_file.clone()),
            today,
            robot: config.display.robot,
        }
    }

    /// Format the first line of a response in the persona's voice
    fn say(&self, line: impl AsRef<str>) -> String {
        if self.robot {
            format!("{} {}", ROBOT, line.as_ref())
        } else {
            line.as_ref().to_string()
        }
    }
}
