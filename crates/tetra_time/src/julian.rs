//! Proleptic-Gregorian calendar → Julian Day conversion.
//!
//! The Julian Day is a continuous day count used as the engine's time
//! coordinate, so that date arithmetic works across calendar boundaries.
//!
//! Source: standard Gregorian-to-JD integer algorithm (Fliegel & Van
//! Flandern form). Public domain.

use crate::{CalendarDate, ClockTime};

/// Julian Day of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Minutes per day, for the time-of-day fraction.
const MINUTES_PER_DAY: f64 = 1_440.0;

/// Convert a proleptic-Gregorian date and clock time to a Julian Day.
///
/// Integer part (the JD at 12:00 of the given date):
///
/// ```text
/// a      = floor((14 - month) / 12)
/// y      = year + 4800 - a
/// m      = month + 12a - 3
/// jdNoon = day + floor((153m + 2)/5) + 365y + floor(y/4)
///          - floor(y/100) + floor(y/400) - 32045
/// ```
///
/// then `jd = jdNoon + (hour - 12)/24 + minute/1440`.
///
/// Monotone in calendar order; advancing the date by one day at a fixed
/// time-of-day advances the result by exactly 1.0. Floor divisions use
/// `div_euclid` so the formula stays correct for negative (proleptic)
/// years.
pub fn calendar_to_jd(date: CalendarDate, time: ClockTime) -> f64 {
    let year = i64::from(date.year());
    let month = i64::from(date.month());
    let day = i64::from(date.day());

    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    let jd_noon = day
        + (153 * m + 2).div_euclid(5)
        + 365 * y
        + y.div_euclid(4)
        - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045;

    let day_fraction =
        (f64::from(time.hour()) - 12.0) / 24.0 + f64::from(time.minute()) / MINUTES_PER_DAY;

    jd_noon as f64 + day_fraction
}

/// Julian centuries elapsed since a reference epoch.
pub fn centuries_since(jd: f64, epoch_jd: f64) -> f64 {
    (jd - epoch_jd) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    fn time(h: u32, min: u32) -> ClockTime {
        ClockTime::new(h, min).unwrap()
    }

    #[test]
    fn j2000_noon() {
        let jd = calendar_to_jd(date(2000, 1, 1), ClockTime::NOON);
        assert_eq!(jd, J2000_JD);
    }

    #[test]
    fn j2000_midnight() {
        let jd = calendar_to_jd(date(2000, 1, 1), time(0, 0));
        assert_eq!(jd, 2_451_544.5);
    }

    #[test]
    fn meeus_1999_jan_1() {
        // 1999-Jan-01 0h = JD 2451179.5 (Meeus, Astronomical Algorithms)
        let jd = calendar_to_jd(date(1999, 1, 1), time(0, 0));
        assert_eq!(jd, 2_451_179.5);
    }

    #[test]
    fn next_day_adds_exactly_one() {
        let jd1 = calendar_to_jd(date(2024, 2, 28), time(6, 30));
        let jd2 = calendar_to_jd(date(2024, 2, 29), time(6, 30));
        assert_eq!(jd2 - jd1, 1.0);
    }

    #[test]
    fn leap_year_rollover() {
        // 2024 is a leap year: Feb 29 exists, Mar 1 follows it.
        let feb29 = calendar_to_jd(date(2024, 2, 29), ClockTime::NOON);
        let mar1 = calendar_to_jd(date(2024, 3, 1), ClockTime::NOON);
        assert_eq!(mar1 - feb29, 1.0);
    }

    #[test]
    fn century_non_leap() {
        // 1900 is not a leap year: Feb 28 → Mar 1 is one day.
        let feb28 = calendar_to_jd(date(1900, 2, 28), ClockTime::NOON);
        let mar1 = calendar_to_jd(date(1900, 3, 1), ClockTime::NOON);
        assert_eq!(mar1 - feb28, 1.0);
    }

    #[test]
    fn minute_fraction() {
        let jd = calendar_to_jd(date(2000, 1, 1), time(12, 30));
        assert!((jd - (J2000_JD + 30.0 / 1440.0)).abs() < 1e-12);
    }

    #[test]
    fn monotone_within_day() {
        let d = date(2010, 7, 4);
        let mut prev = f64::NEG_INFINITY;
        for h in 0..24 {
            let jd = calendar_to_jd(d, time(h, 0));
            assert!(jd > prev, "jd not increasing at hour {h}");
            prev = jd;
        }
    }

    #[test]
    fn negative_year_monotone() {
        // Proleptic Gregorian: the formula must stay continuous across
        // year 0 and negative years.
        let a = calendar_to_jd(date(-1, 12, 31), ClockTime::NOON);
        let b = calendar_to_jd(date(0, 1, 1), ClockTime::NOON);
        assert_eq!(b - a, 1.0);
    }

    #[test]
    fn centuries_at_epoch_is_zero() {
        assert_eq!(centuries_since(J2000_JD, J2000_JD), 0.0);
    }

    #[test]
    fn centuries_one_century_out() {
        let t = centuries_since(J2000_JD + DAYS_PER_CENTURY, J2000_JD);
        assert!((t - 1.0).abs() < 1e-15);
    }
}
