//! Prioritization error types.
//!
//! These are the only failures the core pipeline reports. Bad difficulty
//! input and an all-negative score table are handled by defaulting instead.

use thiserror::Error;

/// Errors returned by [`Prioritizer::prioritize`](crate::prioritizer::Prioritizer::prioritize).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The "tomorrow" index does not name a day of the timetable.
    #[error("invalid day index {index}: expected 0..{days}")]
    InvalidDayIndex { index: usize, days: usize },

    /// The day count is out of range or disagrees with the timetable length.
    #[error("invalid day count {days}: expected {min}..={max} days with one entry each (timetable has {entries})")]
    InvalidDayCount {
        days: usize,
        entries: usize,
        min: usize,
        max: usize,
    },

    /// More distinct subjects were registered than the configured capacity.
    #[error("too many distinct subjects: capacity is {capacity}, cannot register '{subject}'")]
    CapacityExceeded { capacity: usize, subject: String },
}
