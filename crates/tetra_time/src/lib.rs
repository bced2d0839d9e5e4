//! Calendar → Julian Day conversion for the elemental-profile engine.
//!
//! This crate provides:
//! - Validated `CalendarDate` / `ClockTime` value types
//! - Proleptic-Gregorian → Julian Day conversion
//! - The J2000 epoch and Julian-century constants
//!
//! Inputs are pre-parsed numeric components. Parsing and validating raw
//! date/time *text* is the caller's responsibility (the CLI does it here);
//! this crate only checks component ranges.

pub mod error;
pub mod julian;

pub use error::TimeError;
pub use julian::{DAYS_PER_CENTURY, J2000_JD, calendar_to_jd, centuries_since};

/// A proleptic-Gregorian calendar date.
///
/// The constructor checks component ranges (month 1..=12, day 1..=31) and
/// never clamps. Day numbers past the end of the month are accepted and
/// roll forward arithmetically, which is the conversion formula's literal
/// behavior (2023-02-30 lands on the same JD as 2023-03-02).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Create a date, rejecting out-of-range month or day.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidMonth(month));
        }
        if !(1..=31).contains(&day) {
            return Err(TimeError::InvalidDay(day));
        }
        Ok(Self { year, month, day })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }
}

/// A wall-clock time of day (hours and minutes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Noon, the default birth time when none is given.
    pub const NOON: ClockTime = ClockTime {
        hour: 12,
        minute: 0,
    };

    /// Create a clock time, rejecting out-of-range hour or minute.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(TimeError::InvalidMinute(minute));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(self) -> u32 {
        self.hour
    }

    pub fn minute(self) -> u32 {
        self.minute
    }
}

impl Default for ClockTime {
    fn default() -> Self {
        Self::NOON
    }
}
