//! Calendar conversions between day numbers and civil dates.
//!
//! Day numbers are the `Date32` encoding (days since the Unix epoch). The
//! transforms work on day numbers and only materialize a [`time::Date`] when
//! they need calendar fields, so every conversion here is total: day numbers
//! outside the calendar's supported range saturate at its bounds.

use time::{Date, Month};

/// Julian day number of 1970-01-01.
pub const UNIX_EPOCH_JULIAN_DAY: i32 = 2_440_588;

/// Civil date for a day number, saturating at [`Date::MIN`] / [`Date::MAX`].
pub fn civil_date(day_number: i64) -> Date {
    let min = i64::from(Date::MIN.to_julian_day());
    let max = i64::from(Date::MAX.to_julian_day());
    let julian = day_number
        .saturating_add(i64::from(UNIX_EPOCH_JULIAN_DAY))
        .clamp(min, max);
    // The clamp keeps the julian day inside the calendar's domain.
    Date::from_julian_day(julian as i32).unwrap_or(Date::MAX)
}

/// Day number of a civil date.
pub fn day_number(date: Date) -> i32 {
    date.to_julian_day() - UNIX_EPOCH_JULIAN_DAY
}

/// Narrow a day number to the `Date32` width, saturating.
pub fn clamp_day_number(day_number: i64) -> i32 {
    day_number.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Day number of the first day of the year containing `day_number`.
pub fn start_of_year(day_number: i64) -> i64 {
    let date = civil_date(day_number);
    i64::from(self::day_number(date)) - i64::from(date.ordinal() - 1)
}

/// Day number of the first day of the quarter containing `day_number`.
pub fn start_of_quarter(day_number: i64) -> i64 {
    let date = civil_date(day_number);
    let first_month = ((date.month() as u8 - 1) / 3) * 3 + 1;
    match Date::from_calendar_date(date.year(), month_from_number(first_month), 1) {
        Ok(first) => i64::from(self::day_number(first)),
        Err(_) => start_of_month(day_number),
    }
}

/// Day number of the first day of the month containing `day_number`.
pub fn start_of_month(day_number: i64) -> i64 {
    let date = civil_date(day_number);
    i64::from(self::day_number(date)) - i64::from(date.day() - 1)
}

/// Day number of the Monday starting the ISO week containing `day_number`.
pub fn start_of_week(day_number: i64) -> i64 {
    let date = civil_date(day_number);
    i64::from(self::day_number(date)) - i64::from(date.weekday().number_days_from_monday())
}

fn month_from_number(raw: u8) -> Month {
    Month::January.nth_next(raw.saturating_sub(1))
}

/// Day number of `year-month-day`, for tests.
#[cfg(test)]
pub(crate) fn ymd(year: i32, month: u8, day: u8) -> i32 {
    let month = Month::try_from(month).unwrap();
    day_number(Date::from_calendar_date(year, month, day).unwrap())
}
