//! Error types for calendar validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar date/time construction.
///
/// Out-of-range components are rejected rather than clamped: clamping
/// would silently produce a different Julian Day than the literal input
/// implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12.
    InvalidMonth(u32),
    /// Day outside 1..=31.
    InvalidDay(u32),
    /// Hour outside 0..=23.
    InvalidHour(u32),
    /// Minute outside 0..=59.
    InvalidMinute(u32),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "month {m} outside 1..=12"),
            Self::InvalidDay(d) => write!(f, "day {d} outside 1..=31"),
            Self::InvalidHour(h) => write!(f, "hour {h} outside 0..=23"),
            Self::InvalidMinute(m) => write!(f, "minute {m} outside 0..=59"),
        }
    }
}

impl Error for TimeError {}
