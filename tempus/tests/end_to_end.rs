//! End-to-end checks through the public facade.

use std::sync::Arc;

use arrow::array::{Array, AsArray, TimestampSecondArray};
use arrow::datatypes::{Int32Type, UInt16Type};

use tempus::transforms::{DateTransform, FactorBy, NativeOf, ReturnKind, ToStartOfYear};
use tempus::{
    Argument, ArgumentType, Error, Literal, LogicalType, Monotonicity, TemporalContext,
    TemporalFunction, TemporalScalarFunction, TimeZoneRef, builtin_function,
};
use tempus_test_utils::datetime64_millis_column;
use tempus_test_utils::fixtures::{THURSDAY_AFTERNOON, millis};

#[test]
fn millisecond_years_and_their_monotonicity() {
    let to_year = builtin_function("toYear").unwrap();
    let ctx = TemporalContext::default();
    let ty = LogicalType::datetime64(3, Some("UTC")).unwrap();

    let same_year = datetime64_millis_column(&[1_609_459_200_000, 1_625_097_600_000], Some("UTC"));
    let out = to_year
        .execute(&[Argument::array(ty.clone(), same_year)], 2, &ctx)
        .unwrap()
        .into_array(2)
        .unwrap();
    assert_eq!(out.as_primitive::<Int32Type>().values().to_vec(), vec![2021, 2021]);

    let straddle = datetime64_millis_column(&[1_609_459_199_000, 1_609_459_200_000], Some("UTC"));
    let out = to_year
        .execute(&[Argument::array(ty.clone(), straddle)], 2, &ctx)
        .unwrap()
        .into_array(2)
        .unwrap();
    assert_eq!(out.as_primitive::<Int32Type>().values().to_vec(), vec![2020, 2021]);

    let m = to_year.monotonicity_for_range(
        &ty,
        &Literal::Int128(1_609_459_199_000),
        &Literal::Int128(1_609_459_200_000),
        &ctx,
    );
    assert_eq!(m, Monotonicity::not_monotonic());
}

/// Day of the year, 1 through 366.
#[derive(Clone, Copy, Debug, Default)]
struct ToDayOfYear;

impl DateTransform for ToDayOfYear {
    const NAME: &'static str = "toDayOfYear";
    const RETURN_KIND: ReturnKind = ReturnKind::UInt16;

    type Output = UInt16Type;
    type Factor = FactorBy<ToStartOfYear>;

    fn execute_day(&self, day: i32, timezone: &TimeZoneRef) -> NativeOf<Self> {
        let start = ToStartOfYear.execute_day(day, timezone);
        (day - start + 1) as u16
    }

    fn execute_seconds(&self, seconds: i64, timezone: &TimeZoneRef) -> NativeOf<Self> {
        let day = timezone.local_day_number(seconds) as i32;
        self.execute_day(day, timezone)
    }
}

#[test]
fn custom_transform_gets_the_whole_shell() {
    let f = TemporalFunction::<ToDayOfYear>::new();
    let ctx = TemporalContext::default();

    assert_eq!(
        f.return_type(&[ArgumentType::column(LogicalType::datetime(None))])
            .unwrap(),
        LogicalType::UInt16
    );

    // 2021-08-19 is day 231.
    let seconds: Arc<dyn Array> = Arc::new(TimestampSecondArray::from(vec![THURSDAY_AFTERNOON]));
    let out = f
        .execute(&[Argument::array(LogicalType::datetime(None), seconds)], 1, &ctx)
        .unwrap()
        .into_array(1)
        .unwrap();
    assert_eq!(out.as_primitive::<UInt16Type>().value(0), 231);

    let ty = LogicalType::datetime64(3, None).unwrap();
    let inside = f.monotonicity_for_range(
        &ty,
        &Literal::Int128(millis(THURSDAY_AFTERNOON).into()),
        &Literal::Int128(millis(THURSDAY_AFTERNOON + 86_400).into()),
        &ctx,
    );
    assert!(inside.is_monotonic);
    assert!(!inside.is_always_monotonic);
}

#[test]
fn errors_surface_through_the_facade() {
    let to_hour = builtin_function("toHour").unwrap();
    let err = to_hour
        .return_type(&[ArgumentType::column(LogicalType::Utf8)])
        .unwrap_err();
    assert!(matches!(err, Error::IllegalArgumentType(_)));
    assert_eq!(
        err.to_string(),
        "Illegal type String of argument of function toHour. Should be a date or a date with time"
    );
}
