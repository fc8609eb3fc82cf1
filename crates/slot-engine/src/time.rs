//! Time codec -- converts between `HH:MM` text and minute offsets from midnight.
//!
//! Minute offsets live in `0..=1440`. The upper bound is the end-of-day sentinel:
//! the parser never produces it (hours stop at 23), but the formatter accepts it and
//! renders `"24:00"` so a working day that runs until midnight can be formatted.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SlotError};

/// Number of minutes in a day; also the largest valid minute offset.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A point within a single day, stored as whole minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(MINUTES_PER_DAY as u16);

    /// Build a `TimeOfDay` from a minute offset.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidMinuteRange` when `minutes` is outside `0..=1440`.
    pub fn from_minutes(minutes: i64) -> Result<Self> {
        if !(0..=MINUTES_PER_DAY).contains(&minutes) {
            return Err(SlotError::InvalidMinuteRange(minutes));
        }
        Ok(TimeOfDay(minutes as u16))
    }

    /// Parse strict `HH:MM` text. See [`parse_time`].
    pub fn parse(text: &str) -> Result<Self> {
        parse_time(text).map(|minutes| TimeOfDay(minutes as u16))
    }

    pub fn minutes(self) -> i64 {
        i64::from(self.0)
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        TimeOfDay::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        TimeOfDay::parse(&text).map_err(de::Error::custom)
    }
}

/// Parse a strict `HH:MM` string into minutes since midnight.
///
/// The text must be exactly two ASCII digits, a colon, and two ASCII digits.
/// `"9:00"`, `"009:00"` and `"09:00 "` are rejected even though they name a valid time.
///
/// # Errors
/// - `SlotError::InvalidTimeFormat` if the shape does not match.
/// - `SlotError::TimeOutOfRange` if the hour is above 23 or the minute above 59.
pub fn parse_time(text: &str) -> Result<i64> {
    let (hour, minute) = match text.as_bytes() {
        [h1, h2, b':', m1, m2] if [h1, h2, m1, m2].iter().all(|b| b.is_ascii_digit()) => {
            (two_digits(*h1, *h2), two_digits(*m1, *m2))
        }
        _ => return Err(SlotError::InvalidTimeFormat(text.to_string())),
    };

    if hour > 23 || minute > 59 {
        return Err(SlotError::TimeOutOfRange(text.to_string()));
    }

    Ok(hour * 60 + minute)
}

/// Format minutes since midnight as zero-padded `HH:MM`.
///
/// `1440` is accepted and renders as `"24:00"`, which [`parse_time`] will not read back.
///
/// # Errors
/// Returns `SlotError::InvalidMinuteRange` when `minutes` is outside `0..=1440`.
pub fn format_time(minutes: i64) -> Result<String> {
    TimeOfDay::from_minutes(minutes).map(|t| t.to_string())
}

fn two_digits(tens: u8, ones: u8) -> i64 {
    i64::from(tens - b'0') * 10 + i64::from(ones - b'0')
}
