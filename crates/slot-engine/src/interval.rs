//! Half-open `[start, end)` time intervals within a single day.

use std::cmp::Ordering;

use serde::Serialize;

use crate::time::TimeOfDay;

/// A non-empty half-open interval `[start, end)`.
///
/// # Invariants
/// `start < end` always holds; [`Interval::new`] refuses anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    start: TimeOfDay,
    #[serde(rename = "stop")]
    end: TimeOfDay,
}

impl Interval {
    /// Returns `None` when `start >= end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Option<Self> {
        (start < end).then_some(Interval { start, end })
    }

    /// Build from minute offsets the caller has already bounded to `start < end`
    /// within `0..=1440`.
    pub(crate) fn from_bounds(start: i64, end: i64) -> crate::error::Result<Self> {
        debug_assert!(start < end, "interval bounds out of order: {start} >= {end}");
        Ok(Interval {
            start: TimeOfDay::from_minutes(start)?,
            end: TimeOfDay::from_minutes(end)?,
        })
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        self.end.minutes() - self.start.minutes()
    }

    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
    /// Adjacent intervals (one ends where the other starts) do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl Ord for Interval {
    /// Start ascending, ties broken by end ascending.
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
