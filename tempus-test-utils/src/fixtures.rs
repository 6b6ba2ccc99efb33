//! Well-known instants used across test suites.
//!
//! Each constant is checked against an independent calendar conversion in
//! this module's tests.

/// 2020-12-31T23:59:59Z
pub const LAST_SECOND_OF_2020: i64 = 1_609_459_199;

/// 2021-01-01T00:00:00Z
pub const NEW_YEAR_2021: i64 = 1_609_459_200;

/// 2021-07-01T00:00:00Z
pub const MID_2021: i64 = 1_625_097_600;

/// 2021-08-19T13:45:30Z, a Thursday.
pub const THURSDAY_AFTERNOON: i64 = 1_629_380_730;

/// 2021-11-07T05:30:00Z, 01:30 EDT in New York just before clocks fall back.
pub const NEW_YORK_BEFORE_FALL_BACK: i64 = 1_636_263_000;

/// 2021-11-07T06:10:00Z, 01:10 EST in New York just after clocks fall back.
pub const NEW_YORK_AFTER_FALL_BACK: i64 = 1_636_265_400;

/// Day number of 2021-01-01.
pub const NEW_YEAR_2021_DAY: i32 = 18_628;

/// Milliseconds for an epoch second.
pub const fn millis(seconds: i64) -> i64 {
    seconds * 1_000
}

#[cfg(test)]
mod tests {
    use super::*;

    // Howard Hinnant's days_from_civil.
    fn days_from_civil(y: i64, m: i64, d: i64) -> i64 {
        let y = if m <= 2 { y - 1 } else { y };
        let era = y.div_euclid(400);
        let yoe = y - era * 400;
        let mp = (m + 9) % 12;
        let doy = (153 * mp + 2) / 5 + d - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe - 719_468
    }

    fn at(y: i64, m: i64, d: i64, hh: i64, mm: i64, ss: i64) -> i64 {
        days_from_civil(y, m, d) * 86_400 + hh * 3_600 + mm * 60 + ss
    }

    #[test]
    fn constants_match_the_calendar() {
        assert_eq!(LAST_SECOND_OF_2020, at(2020, 12, 31, 23, 59, 59));
        assert_eq!(NEW_YEAR_2021, at(2021, 1, 1, 0, 0, 0));
        assert_eq!(MID_2021, at(2021, 7, 1, 0, 0, 0));
        assert_eq!(THURSDAY_AFTERNOON, at(2021, 8, 19, 13, 45, 30));
        assert_eq!(NEW_YORK_BEFORE_FALL_BACK, at(2021, 11, 7, 5, 30, 0));
        assert_eq!(NEW_YORK_AFTER_FALL_BACK, at(2021, 11, 7, 6, 10, 0));
        assert_eq!(i64::from(NEW_YEAR_2021_DAY), days_from_civil(2021, 1, 1));
    }
}
