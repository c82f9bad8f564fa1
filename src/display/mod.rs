//! Terminal display module
//!
//! Prints command reports with automatic TTY detection.

mod formatter;
mod terminal;

pub use formatter::print_report;
