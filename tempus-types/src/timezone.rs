//! Timezone handles threaded explicitly through every transform call.
//!
//! A [`TimeZoneRef`] is resolved once per expression from a constant string
//! argument, from the timezone embedded in a column type, or from the
//! [`TemporalContext`](crate::TemporalContext) default. It is `Copy`, never
//! mutated, and safe to share across threads and batches.

use std::fmt;

use chrono::{DateTime, Offset, TimeZone};
use chrono_tz::Tz;
use tempus_result::{Error, Result};

pub const SECONDS_PER_DAY: i64 = 86_400;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_MINUTE: i64 = 60;

const MIDNIGHT_WINDOW_BEFORE: i64 = 15 * SECONDS_PER_HOUR;
const MIDNIGHT_WINDOW_AFTER: i64 = 13 * SECONDS_PER_HOUR;

/// Opaque handle onto an IANA timezone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeZoneRef(Tz);

impl TimeZoneRef {
    pub const UTC: TimeZoneRef = TimeZoneRef(Tz::UTC);

    pub fn utc() -> Self {
        Self::UTC
    }

    /// Resolve an IANA timezone name such as `Europe/Berlin`.
    pub fn resolve(name: &str) -> Result<Self> {
        let tz = name
            .parse::<Tz>()
            .map_err(|err| Error::invalid_time_zone(name, err))?;
        tracing::trace!(timezone = name, "resolved timezone");
        Ok(Self(tz))
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    pub fn is_utc(&self) -> bool {
        self.0 == Tz::UTC
    }

    /// UTC offset in seconds in effect at `epoch_seconds`.
    ///
    /// Instants outside the range the timezone database can represent are
    /// treated as UTC.
    pub fn offset_seconds(&self, epoch_seconds: i64) -> i64 {
        if self.is_utc() {
            return 0;
        }
        match DateTime::from_timestamp(epoch_seconds, 0) {
            Some(utc) => i64::from(
                self.0
                    .offset_from_utc_datetime(&utc.naive_utc())
                    .fix()
                    .local_minus_utc(),
            ),
            None => 0,
        }
    }

    /// Wall-clock seconds: `epoch_seconds` shifted by the local offset.
    pub fn to_local_seconds(&self, epoch_seconds: i64) -> i64 {
        epoch_seconds.saturating_add(self.offset_seconds(epoch_seconds))
    }

    /// Day number (days since 1970-01-01) of the local calendar date.
    pub fn local_day_number(&self, epoch_seconds: i64) -> i64 {
        self.to_local_seconds(epoch_seconds)
            .div_euclid(SECONDS_PER_DAY)
    }

    /// Seconds elapsed since local midnight.
    pub fn local_seconds_of_day(&self, epoch_seconds: i64) -> i64 {
        self.to_local_seconds(epoch_seconds)
            .rem_euclid(SECONDS_PER_DAY)
    }

    /// Epoch seconds of the first instant whose local date is `day_number`.
    ///
    /// When local midnight occurs twice this is the earlier occurrence. When
    /// a transition skips midnight it is the transition instant itself.
    /// Assumes at most one offset change within a day of local midnight.
    pub fn start_of_day_number(&self, day_number: i64) -> i64 {
        let midnight = day_number.saturating_mul(SECONDS_PER_DAY);
        if self.is_utc() {
            return midnight;
        }

        // Every local midnight lies within this window of the UTC one.
        let before = self.offset_seconds(midnight.saturating_sub(MIDNIGHT_WINDOW_BEFORE));
        let after = self.offset_seconds(midnight.saturating_add(MIDNIGHT_WINDOW_AFTER));

        let exact = |offset: i64| {
            let instant = midnight.saturating_sub(offset);
            (self.offset_seconds(instant) == offset).then_some(instant)
        };
        match (exact(before), exact(after)) {
            (Some(a), Some(b)) => a.min(b),
            (Some(instant), None) | (None, Some(instant)) => instant,
            (None, None) => {
                // Midnight falls in a gap; find the transition out of it.
                let mut lo = midnight.saturating_sub(after);
                let mut hi = midnight.saturating_sub(before);
                while hi - lo > 1 {
                    let mid = lo + (hi - lo) / 2;
                    if self.offset_seconds(mid) == after {
                        hi = mid;
                    } else {
                        lo = mid;
                    }
                }
                hi
            }
        }
    }
}

impl Default for TimeZoneRef {
    fn default() -> Self {
        Self::UTC
    }
}

impl fmt::Display for TimeZoneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
