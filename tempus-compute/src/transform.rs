//! The transform plugin interface.
//!
//! A transform kind is a zero-sized type implementing [`DateTransform`]: a
//! pure function over day numbers and over epoch seconds, plus static
//! metadata (name, result family, Arrow output type, factor transform).
//! Everything is associated items on the type, so the dispatch engine is
//! monomorphized per transform and the factor transform is a property of the
//! kind, never of an instance.

use std::fmt;
use std::marker::PhantomData;

use arrow::datatypes::ArrowPrimitiveType;
use tempus_types::{LogicalType, TimeZoneRef};

/// Native row value produced by transform `T`.
pub type NativeOf<T> = <<T as DateTransform>::Output as ArrowPrimitiveType>::Native;

/// Family of the declared result type of a transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReturnKind {
    UInt8,
    UInt16,
    Int32,
    Date,
    DateTime,
}

impl ReturnKind {
    /// Whether the result type can carry a timezone.
    pub fn has_timezone_slot(self) -> bool {
        matches!(self, ReturnKind::DateTime)
    }

    /// Concrete result type; `timezone` is ignored for families without a slot.
    pub fn logical_type(self, timezone: Option<&str>) -> LogicalType {
        match self {
            ReturnKind::UInt8 => LogicalType::UInt8,
            ReturnKind::UInt16 => LogicalType::UInt16,
            ReturnKind::Int32 => LogicalType::Int32,
            ReturnKind::Date => LogicalType::Date,
            ReturnKind::DateTime => LogicalType::datetime(timezone),
        }
    }
}

/// A named, stateless, pure temporal transform.
///
/// `execute_day` receives a calendar day number (no time of day; the date is
/// the same in every timezone) and `execute_seconds` receives seconds since
/// the epoch. `timezone` is the zone used for calendar decomposition; for
/// day-number input it only matters when the result is an instant.
pub trait DateTransform: Copy + Default + Send + Sync + 'static {
    const NAME: &'static str;
    const RETURN_KIND: ReturnKind;

    /// Arrow type of the result column.
    type Output: ArrowPrimitiveType;

    /// Coarsening transform deciding monotonicity on a range, or
    /// [`ZeroTransform`] when the transform preserves order everywhere.
    type Factor: FactorTransform;

    fn execute_day(&self, day: i32, timezone: &TimeZoneRef) -> NativeOf<Self>;

    fn execute_seconds(&self, seconds: i64, timezone: &TimeZoneRef) -> NativeOf<Self>;
}

/// Static coarsening function used by the monotonicity oracle.
///
/// A transform is constant (hence monotonic) on a range whenever its factor
/// maps both range boundaries to the same key.
pub trait FactorTransform {
    /// True only for [`ZeroTransform`].
    const IS_ZERO: bool = false;

    type Key: PartialEq + fmt::Debug;

    fn factor_day(day: i32, timezone: &TimeZoneRef) -> Self::Key;

    fn factor_seconds(seconds: i64, timezone: &TimeZoneRef) -> Self::Key;
}

/// Marker factor of transforms that preserve order on every range.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroTransform;

impl FactorTransform for ZeroTransform {
    const IS_ZERO: bool = true;

    type Key = ();

    fn factor_day(_day: i32, _timezone: &TimeZoneRef) -> Self::Key {}

    fn factor_seconds(_seconds: i64, _timezone: &TimeZoneRef) -> Self::Key {}
}

/// Uses transform `T` as the factor of another transform.
#[derive(Clone, Copy, Debug, Default)]
pub struct FactorBy<T>(PhantomData<T>);

impl<T: DateTransform> FactorTransform for FactorBy<T> {
    type Key = NativeOf<T>;

    fn factor_day(day: i32, timezone: &TimeZoneRef) -> Self::Key {
        T::default().execute_day(day, timezone)
    }

    fn factor_seconds(seconds: i64, timezone: &TimeZoneRef) -> Self::Key {
        T::default().execute_seconds(seconds, timezone)
    }
}

/// Row-level transform over one physical input width.
///
/// This is the seam the dispatch engine applies per row. A transform is
/// adapted to it through [`DayNumbers`] and [`EpochSeconds`]; the
/// [`ScaledTransform`](crate::scale::ScaledTransform) adapter implements it
/// for raw `DateTime64` ticks.
pub trait RowTransform<In>: Send + Sync {
    type Out;

    fn execute(&self, value: In, timezone: &TimeZoneRef) -> Self::Out;
}

/// Day-number path of a transform.
#[derive(Clone, Copy, Debug)]
pub struct DayNumbers<'a, T>(pub &'a T);

impl<T: DateTransform> RowTransform<i32> for DayNumbers<'_, T> {
    type Out = NativeOf<T>;

    #[inline]
    fn execute(&self, value: i32, timezone: &TimeZoneRef) -> Self::Out {
        self.0.execute_day(value, timezone)
    }
}

/// Epoch-second path of a transform.
#[derive(Clone, Copy, Debug)]
pub struct EpochSeconds<'a, T>(pub &'a T);

impl<T: DateTransform> RowTransform<i64> for EpochSeconds<'_, T> {
    type Out = NativeOf<T>;

    #[inline]
    fn execute(&self, value: i64, timezone: &TimeZoneRef) -> Self::Out {
        self.0.execute_seconds(value, timezone)
    }
}
