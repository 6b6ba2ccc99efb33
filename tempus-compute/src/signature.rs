//! Signature resolution for temporal functions.
//!
//! A temporal function takes a date or date-with-time first argument and an
//! optional constant timezone string. Resolution runs once per expression at
//! plan-compile time; any error aborts compilation.

use tempus_result::{Error, Result};
use tempus_types::{ArgumentType, LogicalType, TimeZoneRef};

use crate::transform::{DateTransform, ReturnKind};

/// Validate `args` for transform `T` and compute the declared result type.
pub fn resolve_return_type<T: DateTransform>(
    args: &[ArgumentType],
) -> Result<LogicalType> {
    resolve_for(T::NAME, T::RETURN_KIND, args)
}

/// Non-generic body of [`resolve_return_type`].
pub fn resolve_for(
    function: &'static str,
    return_kind: ReturnKind,
    args: &[ArgumentType],
) -> Result<LogicalType> {
    if !(1..=2).contains(&args.len()) {
        return Err(Error::argument_count_mismatch(function, args.len()));
    }

    let first = &args[0];
    if !first.data_type.is_date_or_datetime() {
        return Err(Error::IllegalArgumentType(format!(
            "Illegal type {} of argument of function {function}. Should be a date or a date with time",
            first.data_type
        )));
    }

    let timezone_arg = match args.get(1) {
        Some(second) => {
            let Some(name) = second.constant_str().filter(|_| second.data_type.is_string())
            else {
                return Err(Error::IllegalArgumentType(format!(
                    "Function {function} supports 1 or 2 arguments. The 1st argument must be of type Date or DateTime. \
                     The 2nd argument (optional) must be a constant string with timezone name"
                )));
            };
            if first.data_type.is_date() && !return_kind.has_timezone_slot() {
                return Err(Error::IllegalArgumentType(format!(
                    "The timezone argument of function {function} is allowed only when the 1st argument has the type DateTime"
                )));
            }
            TimeZoneRef::resolve(name)?;
            Some(name)
        }
        None => None,
    };

    if !return_kind.has_timezone_slot() {
        return Ok(return_kind.logical_type(None));
    }

    let timezone = timezone_arg.or_else(|| first.data_type.timezone());
    Ok(return_kind.logical_type(timezone))
}

#[cfg(test)]
mod tests {
    use tempus_types::Literal;

    use super::*;
    use crate::transforms::{ToMonth, ToStartOfDay, ToStartOfMonth, ToYear};

    fn datetime(tz: Option<&str>) -> ArgumentType {
        ArgumentType::column(LogicalType::datetime(tz))
    }

    #[test]
    fn arity_outside_one_or_two_fails() {
        let err = resolve_return_type::<ToYear>(&[]).unwrap_err();
        assert!(matches!(
            err,
            Error::ArgumentCountMismatch {
                function: "toYear",
                passed: 0,
                ..
            }
        ));

        let three = vec![
            datetime(None),
            ArgumentType::constant_string("UTC"),
            ArgumentType::constant_string("UTC"),
        ];
        let err = resolve_return_type::<ToYear>(&three).unwrap_err();
        assert!(err.to_string().contains("passed 3, should be 1 or 2"));
    }

    #[test]
    fn one_and_two_arguments_succeed() {
        assert_eq!(
            resolve_return_type::<ToYear>(&[datetime(None)]).unwrap(),
            LogicalType::Int32
        );
        assert_eq!(
            resolve_return_type::<ToMonth>(&[datetime(None), ArgumentType::constant_string("UTC")])
                .unwrap(),
            LogicalType::UInt8
        );
    }

    #[test]
    fn first_argument_must_be_temporal() {
        for bad in [LogicalType::Utf8, LogicalType::Int64, LogicalType::Float64] {
            let err = resolve_return_type::<ToYear>(&[ArgumentType::column(bad)]).unwrap_err();
            assert!(matches!(err, Error::IllegalArgumentType(msg) if msg.contains("Should be a date")));
        }
    }

    #[test]
    fn second_argument_must_be_constant_string() {
        let column_string = ArgumentType::column(LogicalType::Utf8);
        let err = resolve_return_type::<ToYear>(&[datetime(None), column_string]).unwrap_err();
        assert!(matches!(err, Error::IllegalArgumentType(_)));

        let constant_int = ArgumentType::constant(LogicalType::Int64, 3i64);
        let err = resolve_return_type::<ToYear>(&[datetime(None), constant_int]).unwrap_err();
        assert!(matches!(err, Error::IllegalArgumentType(_)));

        let null_string = ArgumentType {
            data_type: LogicalType::Utf8,
            constant: Some(Literal::Null),
        };
        assert!(resolve_return_type::<ToYear>(&[datetime(None), null_string]).is_err());
    }

    #[test]
    fn timezone_on_day_only_input_is_rejected_for_timezone_less_results() {
        let args = [
            ArgumentType::column(LogicalType::Date),
            ArgumentType::constant_string("UTC"),
        ];
        let err = resolve_return_type::<ToStartOfMonth>(&args).unwrap_err();
        assert!(matches!(err, Error::IllegalArgumentType(msg) if msg.contains("allowed only")));
        assert!(resolve_return_type::<ToYear>(&args).is_err());

        // An instant result has somewhere to put the timezone.
        assert_eq!(
            resolve_return_type::<ToStartOfDay>(&args).unwrap(),
            LogicalType::datetime(Some("UTC"))
        );
    }

    #[test]
    fn unknown_timezone_argument_fails_resolution() {
        let args = [datetime(None), ArgumentType::constant_string("Atlantis/Capital")];
        let err = resolve_return_type::<ToYear>(&args).unwrap_err();
        assert!(matches!(err, Error::InvalidTimeZone(_)));
    }

    #[test]
    fn result_timezone_resolution_order() {
        let explicit = [
            datetime(Some("Asia/Tokyo")),
            ArgumentType::constant_string("Europe/Berlin"),
        ];
        assert_eq!(
            resolve_return_type::<ToStartOfDay>(&explicit).unwrap(),
            LogicalType::datetime(Some("Europe/Berlin"))
        );

        let inherited = [ArgumentType::column(
            LogicalType::datetime64(3, Some("Asia/Tokyo")).unwrap(),
        )];
        assert_eq!(
            resolve_return_type::<ToStartOfDay>(&inherited).unwrap(),
            LogicalType::datetime(Some("Asia/Tokyo"))
        );

        assert_eq!(
            resolve_return_type::<ToStartOfDay>(&[datetime(None)]).unwrap(),
            LogicalType::datetime(None)
        );
        assert_eq!(
            resolve_return_type::<ToStartOfDay>(&[ArgumentType::column(LogicalType::Date)])
                .unwrap(),
            LogicalType::datetime(None)
        );
    }
}
