//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// The text does not have the `HH:MM` shape (two digits, colon, two digits).
    #[error("Invalid time format: '{0}' (expected HH:MM)")]
    InvalidTimeFormat(String),

    /// The text is `HH:MM`-shaped but the hour exceeds 23 or the minute exceeds 59.
    #[error("Time out of range: '{0}'")]
    TimeOutOfRange(String),

    #[error("Minute offset {0} is outside 0..=1440")]
    InvalidMinuteRange(i64),

    #[error("Invalid schedule: start must precede end ({start} >= {end})")]
    InvalidSchedule { start: i64, end: i64 },

    #[error("Invalid duration: {0} (must be a positive number of minutes)")]
    InvalidDuration(i64),
}

impl SlotError {
    /// True for both failure modes of parsing `HH:MM` text.
    pub fn is_invalid_time(&self) -> bool {
        matches!(
            self,
            SlotError::InvalidTimeFormat(_) | SlotError::TimeOutOfRange(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SlotError>;
