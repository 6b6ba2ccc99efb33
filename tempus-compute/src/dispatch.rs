//! Batch dispatch of a transform over one physical temporal encoding.
//!
//! The logical type is inspected once per batch and the matching
//! monomorphized row loop runs over the Arrow values. `DateTime64` batches
//! route through [`ScaledTransform`]. Rows are independent and nulls pass
//! through untouched.

use arrow::array::{Array, AsArray, PrimitiveArray};
use arrow::datatypes::{
    ArrowPrimitiveType, DataType, Date32Type, Int64Type, TimeUnit, TimestampMicrosecondType,
    TimestampMillisecondType, TimestampNanosecondType, TimestampSecondType,
};
use tempus_result::{Error, Result};
use tempus_types::{LogicalType, MAX_DATETIME64_SCALE, TimeZoneRef, scale_for_timestamp_unit};

use crate::scale::ScaledTransform;
use crate::transform::{DateTransform, DayNumbers, EpochSeconds, RowTransform};

/// Apply `transform` to every row of `values`, whose encoding `input_type`
/// describes.
///
/// Fails with [`Error::IllegalArgumentType`] when `input_type` is not one of
/// the three temporal encodings or when the Arrow array does not physically
/// hold that encoding.
pub fn execute_batch<T: DateTransform>(
    transform: &T,
    input_type: &LogicalType,
    values: &dyn Array,
    timezone: &TimeZoneRef,
) -> Result<PrimitiveArray<T::Output>> {
    tracing::debug!(
        function = T::NAME,
        encoding = %input_type,
        rows = values.len(),
        timezone = %timezone,
        "dispatching temporal transform"
    );

    match input_type {
        LogicalType::Date => {
            let days = values
                .as_primitive_opt::<Date32Type>()
                .ok_or_else(|| encoding_mismatch(T::NAME, input_type, values))?;
            Ok(apply_rows(days, timezone, &DayNumbers(transform)))
        }
        LogicalType::DateTime { .. } => {
            let seconds = epoch_values(values, 0)
                .ok_or_else(|| encoding_mismatch(T::NAME, input_type, values))?;
            Ok(apply_rows(&seconds, timezone, &EpochSeconds(transform)))
        }
        LogicalType::DateTime64 { scale, .. } => {
            if *scale > MAX_DATETIME64_SCALE {
                return Err(Error::illegal_argument_type(input_type, T::NAME));
            }
            let ticks = epoch_values(values, *scale)
                .ok_or_else(|| encoding_mismatch(T::NAME, input_type, values))?;
            let adapter = ScaledTransform::new(*scale, transform);
            Ok(apply_rows(&ticks, timezone, &adapter))
        }
        other => Err(Error::illegal_argument_type(other, T::NAME)),
    }
}

/// Row loop shared by every specialization.
#[inline]
pub fn apply_rows<I, O, R>(
    input: &PrimitiveArray<I>,
    timezone: &TimeZoneRef,
    row: &R,
) -> PrimitiveArray<O>
where
    I: ArrowPrimitiveType,
    O: ArrowPrimitiveType,
    R: RowTransform<I::Native, Out = O::Native> + ?Sized,
{
    input.unary(|value| row.execute(value, timezone))
}

/// View an epoch-based column as raw `i64` values.
///
/// Accepts plain `Int64` storage, or an Arrow timestamp whose unit matches
/// `scale`.
fn epoch_values(values: &dyn Array, scale: u8) -> Option<PrimitiveArray<Int64Type>> {
    match values.data_type() {
        DataType::Int64 => values.as_primitive_opt::<Int64Type>().cloned(),
        DataType::Timestamp(unit, _) if scale_for_timestamp_unit(unit) == scale => {
            let reinterpreted = match unit {
                TimeUnit::Second => values
                    .as_primitive::<TimestampSecondType>()
                    .reinterpret_cast::<Int64Type>(),
                TimeUnit::Millisecond => values
                    .as_primitive::<TimestampMillisecondType>()
                    .reinterpret_cast::<Int64Type>(),
                TimeUnit::Microsecond => values
                    .as_primitive::<TimestampMicrosecondType>()
                    .reinterpret_cast::<Int64Type>(),
                TimeUnit::Nanosecond => values
                    .as_primitive::<TimestampNanosecondType>()
                    .reinterpret_cast::<Int64Type>(),
            };
            Some(reinterpreted)
        }
        _ => None,
    }
}

fn encoding_mismatch(function: &str, input_type: &LogicalType, values: &dyn Array) -> Error {
    Error::IllegalArgumentType(format!(
        "Illegal type {input_type} of argument of function {function}: column is stored as {}",
        values.data_type()
    ))
}

#[cfg(test)]
mod tests {
    use arrow::array::{Date32Array, Int64Array, StringArray, TimestampMillisecondArray};

    use super::*;
    use crate::transforms::{ToSecond, ToStartOfMonth, ToYear};

    #[test]
    fn date_batches_use_day_numbers() {
        // 2020-12-31, 2021-01-01, NULL
        let days = Date32Array::from(vec![Some(18_627), Some(18_628), None]);
        let out = execute_batch(&ToYear, &LogicalType::Date, &days, &TimeZoneRef::UTC).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out.value(0), 2020);
        assert_eq!(out.value(1), 2021);
        assert!(out.is_null(2));
    }

    #[test]
    fn datetime_batches_accept_int64_and_second_timestamps() {
        let ty = LogicalType::datetime(None);
        let ints = Int64Array::from(vec![-1, 59, 61]);
        let out = execute_batch(&ToSecond, &ty, &ints, &TimeZoneRef::UTC).unwrap();
        assert_eq!(out.values().to_vec(), vec![59, 59, 1]);

        let stamps = arrow::array::TimestampSecondArray::from(vec![61]);
        let out = execute_batch(&ToSecond, &ty, &stamps, &TimeZoneRef::UTC).unwrap();
        assert_eq!(out.value(0), 1);
    }

    #[test]
    fn datetime64_batches_go_through_the_scale_adapter() {
        let ty = LogicalType::datetime64(3, Some("UTC")).unwrap();
        let ticks = TimestampMillisecondArray::from(vec![-500, 1_500, 59_999]);
        let out = execute_batch(&ToSecond, &ty, &ticks, &TimeZoneRef::UTC).unwrap();
        assert_eq!(out.values().to_vec(), vec![59, 1, 59]);
    }

    #[test]
    fn datetime64_with_unusual_scale_reads_int64_storage() {
        let ty = LogicalType::datetime64(2, None).unwrap();
        // 1.05 seconds and -0.01 seconds in centiseconds.
        let ticks = Int64Array::from(vec![105, -1]);
        let out = execute_batch(&ToSecond, &ty, &ticks, &TimeZoneRef::UTC).unwrap();
        assert_eq!(out.values().to_vec(), vec![1, 59]);
    }

    #[test]
    fn empty_batches() {
        let days = Date32Array::from(Vec::<i32>::new());
        let out =
            execute_batch(&ToStartOfMonth, &LogicalType::Date, &days, &TimeZoneRef::UTC).unwrap();
        assert_eq!(out.len(), 0);
    }

    #[test]
    fn non_temporal_type_is_rejected() {
        let strings = StringArray::from(vec!["2021-01-01"]);
        let err = execute_batch(&ToYear, &LogicalType::Utf8, &strings, &TimeZoneRef::UTC)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Illegal type String of argument of function toYear"
        );
    }

    #[test]
    fn physical_mismatch_is_rejected() {
        // Declared milliseconds, stored as microseconds.
        let ty = LogicalType::datetime64(3, None).unwrap();
        let micros = arrow::array::TimestampMicrosecondArray::from(vec![1]);
        let err = execute_batch(&ToYear, &ty, &micros, &TimeZoneRef::UTC).unwrap_err();
        assert!(matches!(err, Error::IllegalArgumentType(_)));

        let days = Int64Array::from(vec![1]);
        let err =
            execute_batch(&ToYear, &LogicalType::Date, &days, &TimeZoneRef::UTC).unwrap_err();
        assert!(matches!(err, Error::IllegalArgumentType(_)));
    }
}
