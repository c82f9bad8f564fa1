use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StreakError};

/// On-disk date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Persisted shape of the tracker, as written to the data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerRecord {
    pub start_date: String,

    #[serde(default)]
    pub relapses: Vec<String>,
}

/// The tracked habit: when the current streak began and every reset so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerState {
    /// First day of the current streak
    pub start_date: NaiveDate,

    /// Reset dates in the order they were recorded
    pub relapses: Vec<NaiveDate>,
}

impl TrackerState {
    /// Start a fresh tracker with no resets
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            relapses: Vec::new(),
        }
    }

    /// Build a state from its persisted record, validating every date
    pub fn from_record(record: &TrackerRecord) -> Result<Self> {
        let start_date = parse_date(&record.start_date)?;
        let relapses = record
            .relapses
            .iter()
            .map(|d| parse_date(d))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            start_date,
            relapses,
        })
    }

    pub fn to_record(&self) -> TrackerRecord {
        TrackerRecord {
            start_date: format_date(self.start_date),
            relapses: self.relapses.iter().copied().map(format_date).collect(),
        }
    }

    /// Days in the current streak as of `reference`, counting the start day as day 1
    pub fn streak_days(&self, reference: NaiveDate) -> i64 {
        (reference - self.start_date).num_days() + 1
    }

    /// Record a reset: the streak restarts on `date`
    pub fn reset(&mut self, date: NaiveDate) {
        self.relapses.push(date);
        self.start_date = date;
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| StreakError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse an optional date argument, falling back to `today` when omitted
pub fn resolve_date(value: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match value {
        Some(value) => parse_date(value),
        None => Ok(today),
    }
}
