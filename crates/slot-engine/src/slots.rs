//! Compute bookable appointment slots from a working day and a list of busy intervals.
//!
//! Busy intervals are filtered against the day, clipped, sorted by `(start, end)`, then
//! swept with a cursor to find the free gaps. Each gap is cut into back-to-back slots of
//! the requested duration; whatever is left at the end of a gap is dropped.
//!
//! Two entry points share the algorithm:
//!
//! - [`generate_slots`] works purely on minute offsets.
//! - [`generate_free_slots`] takes the day bounds as minutes but the busy intervals as
//!   `HH:MM` text, and returns `HH:MM` text.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::interval::Interval;
use crate::time::parse_time;

/// An unavailable period supplied by the caller, in `HH:MM` text.
///
/// No ordering is assumed. Entries may overlap, extend past the working day, or be
/// degenerate (`start >= stop`); such entries are clipped or ignored, not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: String,
    pub stop: String,
}

impl BusyInterval {
    pub fn new(start: impl Into<String>, stop: impl Into<String>) -> Self {
        BusyInterval {
            start: start.into(),
            stop: stop.into(),
        }
    }
}

/// A bookable slot, in `HH:MM` text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start: String,
    pub stop: String,
}

impl From<Interval> for FreeSlot {
    fn from(interval: Interval) -> Self {
        FreeSlot {
            start: interval.start().to_string(),
            stop: interval.end().to_string(),
        }
    }
}

/// Generate free slots with busy intervals given as `HH:MM` text.
///
/// # Arguments
///
/// * `start_minutes` / `end_minutes` — working day bounds, already in minutes.
/// * `duration_minutes` — length of every slot.
/// * `busy_intervals` — unavailable periods; each `start`/`stop` is parsed strictly.
///
/// # Errors
///
/// - `SlotError::InvalidSchedule` if `start_minutes >= end_minutes`.
/// - `SlotError::InvalidDuration` if `duration_minutes <= 0`.
/// - `SlotError::InvalidMinuteRange` if a day bound is outside `0..=1440`.
/// - `SlotError::InvalidTimeFormat` / `SlotError::TimeOutOfRange` for malformed busy text.
pub fn generate_free_slots(
    start_minutes: i64,
    end_minutes: i64,
    duration_minutes: i64,
    busy_intervals: &[BusyInterval],
) -> Result<Vec<FreeSlot>> {
    let day = working_day(start_minutes, end_minutes, Some(duration_minutes))?;

    let busy = busy_intervals
        .iter()
        .map(|b| Ok((parse_time(&b.start)?, parse_time(&b.stop)?)))
        .collect::<Result<Vec<_>>>()?;

    let slots = partition(&day, duration_minutes, &busy)?;
    Ok(slots.into_iter().map(FreeSlot::from).collect())
}

/// Generate free slots over minute offsets.
///
/// `busy` holds raw `(start, end)` minute pairs. Degenerate pairs and pairs that do not
/// reach into the day are ignored; the rest are clipped to the day.
///
/// Returns slots sorted by start time. An empty list means nothing fits.
///
/// # Errors
///
/// Same validation as [`generate_free_slots`], minus busy text parsing.
pub fn generate_slots(
    start_minutes: i64,
    end_minutes: i64,
    duration_minutes: i64,
    busy: &[(i64, i64)],
) -> Result<Vec<Interval>> {
    let day = working_day(start_minutes, end_minutes, Some(duration_minutes))?;
    partition(&day, duration_minutes, busy)
}

/// The maximal free gaps of the working day, before slot partitioning.
pub fn free_gaps(
    start_minutes: i64,
    end_minutes: i64,
    busy: &[(i64, i64)],
) -> Result<Vec<Interval>> {
    let day = working_day(start_minutes, end_minutes, None)?;
    gaps(&day, busy)
        .into_iter()
        .map(|(start, end)| Interval::from_bounds(start, end))
        .collect()
}

/// The earliest slot [`generate_slots`] would return, if any.
pub fn first_free_slot(
    start_minutes: i64,
    end_minutes: i64,
    duration_minutes: i64,
    busy: &[(i64, i64)],
) -> Result<Option<Interval>> {
    Ok(generate_slots(start_minutes, end_minutes, duration_minutes, busy)?
        .into_iter()
        .next())
}

/// Validate the day bounds (and the duration, when one applies) in the order callers
/// observe failures: schedule order, then duration, then minute range.
fn working_day(start: i64, end: i64, duration: Option<i64>) -> Result<Interval> {
    if start >= end {
        return Err(SlotError::InvalidSchedule { start, end });
    }
    if let Some(duration) = duration {
        if duration <= 0 {
            return Err(SlotError::InvalidDuration(duration));
        }
    }
    Interval::from_bounds(start, end)
}

/// Drop busy pairs that are degenerate or miss the day entirely, clip the rest, and sort
/// by start then end.
fn clip_busy_periods(busy: &[(i64, i64)], day_start: i64, day_end: i64) -> Vec<(i64, i64)> {
    let mut clipped: Vec<(i64, i64)> = busy
        .iter()
        .filter(|&&(start, end)| {
            // Tested against the unclipped bounds.
            let keep = start < end && start < day_end && end > day_start;
            if !keep {
                debug!("ignoring busy interval {start}..{end} outside day {day_start}..{day_end}");
            }
            keep
        })
        .map(|&(start, end)| (start.max(day_start), end.min(day_end)))
        .collect();

    clipped.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    clipped
}

/// Sweep the sorted busy periods with a cursor and collect the gaps between them.
///
/// Overlapping busy periods need no explicit merge: the cursor only ever moves forward.
fn gaps(day: &Interval, busy: &[(i64, i64)]) -> Vec<(i64, i64)> {
    let day_start = day.start().minutes();
    let day_end = day.end().minutes();

    let mut free = Vec::new();
    let mut cursor = day_start;

    for (busy_start, busy_end) in clip_busy_periods(busy, day_start, day_end) {
        if cursor < busy_start {
            free.push((cursor, busy_start));
        }
        cursor = cursor.max(busy_end);
    }

    // Trailing gap after the last busy period.
    if cursor < day_end {
        free.push((cursor, day_end));
    }

    free
}

fn partition(day: &Interval, duration: i64, busy: &[(i64, i64)]) -> Result<Vec<Interval>> {
    let free = gaps(day, busy);

    let mut slots = Vec::new();
    for &(gap_start, gap_end) in &free {
        trace!("partitioning gap {gap_start}..{gap_end} into {duration}-minute slots");
        let mut cursor = gap_start;
        while gap_end - cursor >= duration {
            slots.push(Interval::from_bounds(cursor, cursor + duration)?);
            cursor += duration;
        }
    }

    debug!(
        "{} free gap(s), {} slot(s) of {} minutes in {}..{}",
        free.len(),
        slots.len(),
        duration,
        day.start(),
        day.end()
    );
    Ok(slots)
}
