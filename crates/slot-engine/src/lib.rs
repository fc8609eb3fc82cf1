//! # slot-engine
//!
//! Deterministic free appointment slot generation for a single working day.
//!
//! Given the bounds of a professional's working day, a fixed appointment length and a
//! list of busy intervals (breaks, existing bookings), the engine returns every bookable
//! slot, in order. Everything is computed in whole minutes since midnight; `HH:MM` text
//! only appears at the edges.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{generate_free_slots, parse_time, BusyInterval};
//!
//! let start = parse_time("09:00").unwrap();
//! let end = parse_time("10:00").unwrap();
//! let busy = vec![BusyInterval::new("09:40", "10:50")];
//!
//! let slots = generate_free_slots(start, end, 30, &busy).unwrap();
//! assert_eq!(slots.len(), 1);
//! assert_eq!(slots[0].start, "09:00");
//! assert_eq!(slots[0].stop, "09:30");
//! ```
//!
//! ## Modules
//!
//! - [`time`] — `HH:MM` text ↔ minute offsets, and the `TimeOfDay` type
//! - [`interval`] — Half-open `[start, end)` intervals
//! - [`slots`] — Free gap computation and fixed-duration slot partitioning
//! - [`error`] — Error types

pub mod error;
pub mod interval;
pub mod slots;
pub mod time;

pub use error::SlotError;
pub use interval::Interval;
pub use slots::{
    first_free_slot, free_gaps, generate_free_slots, generate_slots, BusyInterval, FreeSlot,
};
pub use time::{format_time, parse_time, TimeOfDay, MINUTES_PER_DAY};
