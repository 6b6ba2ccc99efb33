//! Builtin transform catalog.
//!
//! Field extractions (`toYear`, `toMonth`, `toHour`, ...) declare the
//! coarsening bucket inside which they are constant as their factor.
//! Truncations (`toStartOfMonth`, `toStartOfHour`, ...) never reorder values
//! and declare [`ZeroTransform`].
//!
//! Epoch-second input is decomposed in the supplied timezone. Day-number
//! input is a calendar date with no time of day, so time fields read as zero
//! and instant-valued results are local midnight of that date.

use arrow::datatypes::{Date32Type, Int32Type, TimestampSecondType, UInt8Type};
use tempus_types::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, TimeZoneRef};

use crate::date::{
    civil_date, clamp_day_number, start_of_month, start_of_quarter, start_of_week, start_of_year,
};
use crate::transform::{DateTransform, FactorBy, FactorTransform, NativeOf, ReturnKind, ZeroTransform};

/// Declares a transform computed from the local day number and the seconds
/// elapsed since local midnight.
macro_rules! calendar_transform {
    (
        $(#[$meta:meta])*
        $name:ident, $sql_name:literal, $kind:ident, $output:ty, $factor:ty,
        |$day:ident, $second_of_day:ident| $body:expr
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl DateTransform for $name {
            const NAME: &'static str = $sql_name;
            const RETURN_KIND: ReturnKind = ReturnKind::$kind;

            type Output = $output;
            type Factor = $factor;

            #[inline]
            #[allow(unused_variables)]
            fn execute_day(&self, day: i32, _timezone: &TimeZoneRef) -> NativeOf<Self> {
                let $day = i64::from(day);
                let $second_of_day: i64 = 0;
                $body
            }

            #[inline]
            #[allow(unused_variables)]
            fn execute_seconds(&self, seconds: i64, timezone: &TimeZoneRef) -> NativeOf<Self> {
                let local = timezone.to_local_seconds(seconds);
                let $day = local.div_euclid(SECONDS_PER_DAY);
                let $second_of_day = local.rem_euclid(SECONDS_PER_DAY);
                $body
            }
        }
    };
}

calendar_transform!(
    /// Calendar year.
    ToYear, "toYear", Int32, Int32Type, FactorBy<ToStartOfYear>,
    |day, second_of_day| civil_date(day).year()
);

calendar_transform!(
    /// Quarter of the year, 1 through 4.
    ToQuarter, "toQuarter", UInt8, UInt8Type, FactorBy<ToStartOfYear>,
    |day, second_of_day| (civil_date(day).month() as u8 - 1) / 3 + 1
);

calendar_transform!(
    /// Month of the year, 1 through 12.
    ToMonth, "toMonth", UInt8, UInt8Type, FactorBy<ToStartOfYear>,
    |day, second_of_day| civil_date(day).month() as u8
);

calendar_transform!(
    ToDayOfMonth, "toDayOfMonth", UInt8, UInt8Type, FactorBy<ToStartOfMonth>,
    |day, second_of_day| civil_date(day).day()
);

calendar_transform!(
    /// ISO day of the week, Monday = 1 through Sunday = 7.
    ToDayOfWeek, "toDayOfWeek", UInt8, UInt8Type, FactorBy<ToMonday>,
    |day, second_of_day| civil_date(day).weekday().number_from_monday()
);

calendar_transform!(
    ToHour, "toHour", UInt8, UInt8Type, LocalDateAndOffset,
    |day, second_of_day| (second_of_day / SECONDS_PER_HOUR) as u8
);

calendar_transform!(
    ToMinute, "toMinute", UInt8, UInt8Type, FactorBy<ToStartOfHour>,
    |day, second_of_day| ((second_of_day / SECONDS_PER_MINUTE) % 60) as u8
);

calendar_transform!(
    ToSecond, "toSecond", UInt8, UInt8Type, FactorBy<ToStartOfMinute>,
    |day, second_of_day| (second_of_day % SECONDS_PER_MINUTE) as u8
);

calendar_transform!(
    /// Local calendar date.
    ToDate, "toDate", Date, Date32Type, ZeroTransform,
    |day, second_of_day| clamp_day_number(day)
);

calendar_transform!(
    ToStartOfYear, "toStartOfYear", Date, Date32Type, ZeroTransform,
    |day, second_of_day| clamp_day_number(start_of_year(day))
);

calendar_transform!(
    ToStartOfQuarter, "toStartOfQuarter", Date, Date32Type, ZeroTransform,
    |day, second_of_day| clamp_day_number(start_of_quarter(day))
);

calendar_transform!(
    ToStartOfMonth, "toStartOfMonth", Date, Date32Type, ZeroTransform,
    |day, second_of_day| clamp_day_number(start_of_month(day))
);

calendar_transform!(
    /// Monday of the ISO week.
    ToMonday, "toMonday", Date, Date32Type, ZeroTransform,
    |day, second_of_day| clamp_day_number(start_of_week(day))
);

/// Local midnight, as an instant.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToStartOfDay;

impl DateTransform for ToStartOfDay {
    const NAME: &'static str = "toStartOfDay";
    const RETURN_KIND: ReturnKind = ReturnKind::DateTime;

    type Output = TimestampSecondType;
    type Factor = ZeroTransform;

    fn execute_day(&self, day: i32, timezone: &TimeZoneRef) -> i64 {
        timezone.start_of_day_number(i64::from(day))
    }

    fn execute_seconds(&self, seconds: i64, timezone: &TimeZoneRef) -> i64 {
        timezone.start_of_day_number(timezone.local_day_number(seconds))
    }
}

/// Start of the local hour, as an instant.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToStartOfHour;

impl DateTransform for ToStartOfHour {
    const NAME: &'static str = "toStartOfHour";
    const RETURN_KIND: ReturnKind = ReturnKind::DateTime;

    type Output = TimestampSecondType;
    type Factor = ZeroTransform;

    fn execute_day(&self, day: i32, timezone: &TimeZoneRef) -> i64 {
        timezone.start_of_day_number(i64::from(day))
    }

    fn execute_seconds(&self, seconds: i64, timezone: &TimeZoneRef) -> i64 {
        truncate_local(seconds, SECONDS_PER_HOUR, timezone)
    }
}

/// Start of the local minute, as an instant.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToStartOfMinute;

impl DateTransform for ToStartOfMinute {
    const NAME: &'static str = "toStartOfMinute";
    const RETURN_KIND: ReturnKind = ReturnKind::DateTime;

    type Output = TimestampSecondType;
    type Factor = ZeroTransform;

    fn execute_day(&self, day: i32, timezone: &TimeZoneRef) -> i64 {
        timezone.start_of_day_number(i64::from(day))
    }

    fn execute_seconds(&self, seconds: i64, timezone: &TimeZoneRef) -> i64 {
        truncate_local(seconds, SECONDS_PER_MINUTE, timezone)
    }
}

/// Step back from `seconds` to the last local `unit` boundary, using the
/// offset in effect at `seconds` itself.
fn truncate_local(seconds: i64, unit: i64, timezone: &TimeZoneRef) -> i64 {
    seconds.saturating_sub(timezone.to_local_seconds(seconds).rem_euclid(unit))
}

/// Factor of [`ToHour`]: the local date together with the UTC offset.
///
/// The local date alone is not enough. When clocks fall back, the hour
/// repeats inside a single date, so two boundaries on the same date but on
/// either side of the transition must not compare equal.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalDateAndOffset;

impl FactorTransform for LocalDateAndOffset {
    type Key = (i64, i64);

    fn factor_day(day: i32, _timezone: &TimeZoneRef) -> Self::Key {
        (i64::from(day), 0)
    }

    fn factor_seconds(seconds: i64, timezone: &TimeZoneRef) -> Self::Key {
        (
            timezone.local_day_number(seconds),
            timezone.offset_seconds(seconds),
        )
    }
}
