//! Adapter from scaled `DateTime64` ticks to epoch-second transforms.
//!
//! A `DateTime64(scale)` value counts `10^scale` ticks per second. Transforms
//! are written against whole epoch seconds, so the adapter floors the tick
//! count to seconds (toward negative infinity, so pre-epoch values land in
//! the right second) and delegates to the wrapped transform. The fractional
//! part is discarded, never rounded.

use tempus_types::TimeZoneRef;

use crate::transform::{DateTransform, NativeOf, RowTransform};

/// `10^scale`, or `None` once it no longer fits in an `i64` (scale 19 and up).
#[inline]
pub fn scale_multiplier(scale: u8) -> Option<i64> {
    10_i64.checked_pow(u32::from(scale))
}

/// Whole seconds of a tick count: `floor(ticks / 10^scale)`.
///
/// Defined for every scale. Past the `i64` range of `10^scale` every tick
/// count is a fraction of one second, so the floor is `0` or `-1`.
#[inline]
pub fn whole_seconds(ticks: i64, scale: u8) -> i64 {
    floor_div(ticks, scale_multiplier(scale))
}

#[inline]
fn floor_div(ticks: i64, multiplier: Option<i64>) -> i64 {
    match multiplier {
        Some(m) => ticks.div_euclid(m),
        None if ticks < 0 => -1,
        None => 0,
    }
}

/// Wraps a transform so it accepts raw ticks at a fixed scale.
#[derive(Debug)]
pub struct ScaledTransform<'a, T> {
    scale: u8,
    multiplier: Option<i64>,
    transform: &'a T,
}

impl<'a, T: DateTransform> ScaledTransform<'a, T> {
    pub fn new(scale: u8, transform: &'a T) -> Self {
        Self {
            scale,
            multiplier: scale_multiplier(scale),
            transform,
        }
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    #[inline]
    pub fn whole_seconds(&self, ticks: i64) -> i64 {
        floor_div(ticks, self.multiplier)
    }
}

impl<T: DateTransform> RowTransform<i64> for ScaledTransform<'_, T> {
    type Out = NativeOf<T>;

    #[inline]
    fn execute(&self, ticks: i64, timezone: &TimeZoneRef) -> Self::Out {
        self.transform
            .execute_seconds(self.whole_seconds(ticks), timezone)
    }
}
