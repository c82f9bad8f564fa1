//! Data models module
//!
//! Defines the tracker record, its date handling, and the motivational tiers.

pub mod tier;
pub mod tracker;

pub use tier::MotivationTier;
pub use tracker::{format_date, resolve_date, TrackerRecord, TrackerState};
