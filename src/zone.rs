//! Calendar dates read and written in an explicit time zone.
//!
//! Typed text names a calendar date; the value is an instant. Every
//! conversion between the two goes through a `chrono::TimeZone` handed in by
//! the caller. The unsuffixed entry points of the crate pass `chrono::Local`.

use chrono::{Days, Months, NaiveDate, TimeDelta, TimeZone, Utc};

use crate::value::Instant;

/// The calendar date of `instant` as seen in `tz`
pub fn local_date<Tz: TimeZone>(instant: &Instant, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// Midnight at the start of the given calendar date in `tz`, as a UTC instant.
///
/// Out-of-range months and days roll over instead of failing: month 0 is
/// December of the previous year, day 0 is the last day of the previous
/// month, and February 31 is early March. When midnight does not exist in
/// `tz` (a DST gap) the first instant of the following hour is used.
///
/// Returns `None` only when the date falls outside what `chrono` can represent.
pub fn local_midnight<Tz: TimeZone>(tz: &Tz, year: i32, month: u32, day: u32) -> Option<Instant> {
    let midnight = roll_over(year, month, day)?.and_hms_opt(0, 0, 0)?;
    let resolved = match tz.from_local_datetime(&midnight).earliest() {
        Some(resolved) => resolved,
        None => {
            let after_gap = midnight.checked_add_signed(TimeDelta::try_hours(1)?)?;
            tz.from_local_datetime(&after_gap).earliest()?
        },
    };
    Some(resolved.with_timezone(&Utc))
}

fn roll_over(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let january = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let first = match month.checked_sub(1) {
        Some(offset) => january.checked_add_months(Months::new(offset))?,
        None => january.checked_sub_months(Months::new(1))?,
    };
    match day.checked_sub(1) {
        Some(offset) => first.checked_add_days(Days::new(u64::from(offset))),
        None => first.pred_opt(),
    }
}
