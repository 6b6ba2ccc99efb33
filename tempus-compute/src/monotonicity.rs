//! Monotonicity inference for predicate rewriting.
//!
//! The optimizer may rewrite a predicate on `f(column)` into a range predicate
//! on `column` only if `f` preserves order on the range of `column` values
//! under consideration. A transform whose factor is [`ZeroTransform`]
//! preserves order everywhere. Any other transform is constant, and therefore
//! trivially monotonic, on a range whose two boundaries share the same factor
//! value (for example `toMonth` on a range inside one calendar year).
//!
//! The answer is advisory and conservative: "not monotonic" means "rewrite
//! not applicable", never "predicate unsatisfiable".
//!
//! [`ZeroTransform`]: crate::transform::ZeroTransform

use tempus_types::{Literal, LogicalType, MAX_DATETIME64_SCALE, TimeZoneRef};

use crate::scale::whole_seconds;
use crate::transform::{DateTransform, FactorTransform};

/// Result of a monotonicity query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Monotonicity {
    /// The function is order preserving on the queried range.
    pub is_monotonic: bool,
    /// The function is order preserving on every range.
    pub is_always_monotonic: bool,
}

impl Monotonicity {
    pub const fn not_monotonic() -> Self {
        Self {
            is_monotonic: false,
            is_always_monotonic: false,
        }
    }

    pub const fn monotonic_on_range() -> Self {
        Self {
            is_monotonic: true,
            is_always_monotonic: false,
        }
    }

    pub const fn always_monotonic() -> Self {
        Self {
            is_monotonic: true,
            is_always_monotonic: true,
        }
    }
}

/// Decide whether transform `T` is monotonic on `[left, right]`.
///
/// `left` and `right` are values of `input_type` (day numbers for `Date`,
/// epoch seconds for `DateTime`, raw ticks for `DateTime64`);
/// [`Literal::Null`] marks an unbounded side. `local_timezone` is the zone
/// the single-argument form of the function evaluates in. It must not be
/// used to answer for a call that passes its own timezone argument.
pub fn monotonicity_for_range<T: DateTransform>(
    input_type: &LogicalType,
    left: &Literal,
    right: &Literal,
    local_timezone: &TimeZoneRef,
) -> Monotonicity {
    if <T::Factor as FactorTransform>::IS_ZERO {
        return Monotonicity::always_monotonic();
    }

    if left.is_null() || right.is_null() {
        return Monotonicity::not_monotonic();
    }

    let same_bucket = match input_type {
        LogicalType::Date => match (day_bound(left), day_bound(right)) {
            (Some(l), Some(r)) => {
                T::Factor::factor_day(l, local_timezone) == T::Factor::factor_day(r, local_timezone)
            }
            _ => false,
        },
        LogicalType::DateTime { .. } => match (second_bound(left), second_bound(right)) {
            (Some(l), Some(r)) => {
                T::Factor::factor_seconds(l, local_timezone)
                    == T::Factor::factor_seconds(r, local_timezone)
            }
            _ => false,
        },
        LogicalType::DateTime64 { scale, .. } if *scale <= MAX_DATETIME64_SCALE => {
            match (second_bound(left), second_bound(right)) {
                (Some(l), Some(r)) => {
                    let (l, r) = (whole_seconds(l, *scale), whole_seconds(r, *scale));
                    T::Factor::factor_seconds(l, local_timezone)
                        == T::Factor::factor_seconds(r, local_timezone)
                }
                _ => false,
            }
        }
        _ => false,
    };

    tracing::trace!(
        function = T::NAME,
        input = %input_type,
        left = %left.format_display(),
        right = %right.format_display(),
        same_bucket,
        "monotonicity on range"
    );

    if same_bucket {
        Monotonicity::monotonic_on_range()
    } else {
        Monotonicity::not_monotonic()
    }
}

/// Day-number width of a boundary; `None` when it does not fit.
fn day_bound(literal: &Literal) -> Option<i32> {
    match literal {
        Literal::Date32(days) => Some(*days),
        Literal::Int128(v) => i32::try_from(*v).ok(),
        _ => None,
    }
}

/// Epoch-second (or tick) width of a boundary; `None` when it does not fit.
fn second_bound(literal: &Literal) -> Option<i64> {
    match literal {
        Literal::Int128(v) => i64::try_from(*v).ok(),
        _ => None,
    }
}
