//! Error types for timeline configuration and day arithmetic.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned when a timeline configuration is inconsistent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimelineConfigError {
    /// An hour bound lies outside `0..=24`.
    #[error("timeline hour {0} is outside 0..=24")]
    HourOutOfRange(i32),

    /// The visible window is empty or inverted.
    #[error("day start hour {start} must be before day end hour {end}")]
    EmptyWindow {
        /// Configured first visible hour.
        start: i32,
        /// Configured end hour (exclusive).
        end: i32,
    },

    /// The slot length does not evenly divide an hour.
    #[error("slot length of {0} minutes must be positive and divide 60")]
    InvalidSlotLength(i32),
}

/// Errors returned when a calendar date cannot be mapped onto instants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DayWindowError {
    /// Local midnight does not exist for this date in the configured zone.
    #[error("local midnight of {0} does not exist in the configured time zone")]
    MissingMidnight(NaiveDate),

    /// The date is the last representable calendar day.
    #[error("no day follows {0}")]
    DateOverflow(NaiveDate),
}
