//! Logical type tags describing arguments and results of temporal functions.
//!
//! Arrow's physical types do not carry everything a temporal function needs
//! to know: a sub-second timestamp may use a decimal scale Arrow has no unit
//! for, and the calendar-day / epoch-second / scaled-tick distinction is what
//! the dispatch engine routes on. [`LogicalType`] is that tag. It maps onto
//! Arrow with [`LogicalType::to_arrow`] and back with
//! [`LogicalType::try_from_arrow`].

use std::fmt;
use std::sync::Arc;

use arrow::datatypes::{DataType, TimeUnit};
use tempus_result::{Error, Result};

/// Largest decimal scale a `DateTime64` column may use (nanoseconds).
pub const MAX_DATETIME64_SCALE: u8 = 9;

/// Logical type of a function argument or result.
///
/// The three temporal variants are the physical encodings the dispatch engine
/// understands. Everything else is carried so signatures can describe (and
/// reject) non temporal arguments and so results have a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogicalType {
    /// Calendar date stored as days since 1970-01-01. Never carries a timezone.
    Date,
    /// Seconds since the Unix epoch, optionally bound to a timezone.
    DateTime { timezone: Option<Arc<str>> },
    /// Ticks since the Unix epoch at `10^scale` ticks per second, optionally
    /// bound to a timezone. The scale is fixed for the whole column.
    DateTime64 {
        scale: u8,
        timezone: Option<Arc<str>>,
    },
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Int32,
    Int64,
    Float64,
    Boolean,
    Utf8,
}

impl LogicalType {
    /// `DateTime` with an optional timezone. An empty name means "no timezone".
    pub fn datetime(timezone: Option<&str>) -> Self {
        LogicalType::DateTime {
            timezone: normalize_timezone(timezone),
        }
    }

    /// `DateTime64` with the given scale and optional timezone.
    ///
    /// Fails when `scale` exceeds [`MAX_DATETIME64_SCALE`].
    pub fn datetime64(scale: u8, timezone: Option<&str>) -> Result<Self> {
        if scale > MAX_DATETIME64_SCALE {
            return Err(Error::InvalidArgumentError(format!(
                "DateTime64 scale {scale} is out of range, maximum is {MAX_DATETIME64_SCALE}"
            )));
        }
        Ok(LogicalType::DateTime64 {
            scale,
            timezone: normalize_timezone(timezone),
        })
    }

    /// True for the day-only calendar encoding.
    pub fn is_date(&self) -> bool {
        matches!(self, LogicalType::Date)
    }

    /// True for the encodings that carry a time of day.
    pub fn is_datetime_with_time(&self) -> bool {
        matches!(
            self,
            LogicalType::DateTime { .. } | LogicalType::DateTime64 { .. }
        )
    }

    /// True for any of the three temporal encodings.
    pub fn is_date_or_datetime(&self) -> bool {
        self.is_date() || self.is_datetime_with_time()
    }

    pub fn is_string(&self) -> bool {
        matches!(self, LogicalType::Utf8)
    }

    /// Timezone embedded in the type, if any.
    pub fn timezone(&self) -> Option<&str> {
        match self {
            LogicalType::DateTime { timezone } | LogicalType::DateTime64 { timezone, .. } => {
                timezone.as_deref()
            }
            _ => None,
        }
    }

    /// Decimal scale of a `DateTime64`; `None` for every other type.
    pub fn scale(&self) -> Option<u8> {
        match self {
            LogicalType::DateTime64 { scale, .. } => Some(*scale),
            _ => None,
        }
    }

    /// Arrow data type used to store values of this logical type.
    ///
    /// `DateTime64` maps onto the Arrow timestamp unit matching its scale;
    /// scales without an Arrow unit are stored as raw `Int64` ticks.
    pub fn to_arrow(&self) -> DataType {
        match self {
            LogicalType::Date => DataType::Date32,
            LogicalType::DateTime { timezone } => {
                DataType::Timestamp(TimeUnit::Second, timezone.clone())
            }
            LogicalType::DateTime64 { scale, timezone } => match timestamp_unit_for_scale(*scale) {
                Some(unit) => DataType::Timestamp(unit, timezone.clone()),
                None => DataType::Int64,
            },
            LogicalType::UInt8 => DataType::UInt8,
            LogicalType::UInt16 => DataType::UInt16,
            LogicalType::UInt32 => DataType::UInt32,
            LogicalType::UInt64 => DataType::UInt64,
            LogicalType::Int32 => DataType::Int32,
            LogicalType::Int64 => DataType::Int64,
            LogicalType::Float64 => DataType::Float64,
            LogicalType::Boolean => DataType::Boolean,
            LogicalType::Utf8 => DataType::Utf8,
        }
    }

    /// Infer the logical type of an Arrow column.
    ///
    /// `Timestamp(Second)` is read as `DateTime`; the sub-second units become
    /// `DateTime64` with scale 3, 6 or 9. Arrow types with no logical
    /// counterpart are rejected.
    pub fn try_from_arrow(data_type: &DataType) -> Result<Self> {
        let logical = match data_type {
            DataType::Date32 => LogicalType::Date,
            DataType::Timestamp(TimeUnit::Second, tz) => LogicalType::DateTime {
                timezone: tz.clone(),
            },
            DataType::Timestamp(unit, tz) => LogicalType::DateTime64 {
                scale: scale_for_timestamp_unit(unit),
                timezone: tz.clone(),
            },
            DataType::UInt8 => LogicalType::UInt8,
            DataType::UInt16 => LogicalType::UInt16,
            DataType::UInt32 => LogicalType::UInt32,
            DataType::UInt64 => LogicalType::UInt64,
            DataType::Int32 => LogicalType::Int32,
            DataType::Int64 => LogicalType::Int64,
            DataType::Float64 => LogicalType::Float64,
            DataType::Boolean => LogicalType::Boolean,
            DataType::Utf8 | DataType::LargeUtf8 => LogicalType::Utf8,
            other => {
                return Err(Error::InvalidArgumentError(format!(
                    "Arrow type {other} has no logical type"
                )));
            }
        };
        Ok(logical)
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalType::Date => f.write_str("Date"),
            LogicalType::DateTime { timezone: None } => f.write_str("DateTime"),
            LogicalType::DateTime { timezone: Some(tz) } => write!(f, "DateTime('{tz}')"),
            LogicalType::DateTime64 {
                scale,
                timezone: None,
            } => write!(f, "DateTime64({scale})"),
            LogicalType::DateTime64 {
                scale,
                timezone: Some(tz),
            } => write!(f, "DateTime64({scale}, '{tz}')"),
            LogicalType::UInt8 => f.write_str("UInt8"),
            LogicalType::UInt16 => f.write_str("UInt16"),
            LogicalType::UInt32 => f.write_str("UInt32"),
            LogicalType::UInt64 => f.write_str("UInt64"),
            LogicalType::Int32 => f.write_str("Int32"),
            LogicalType::Int64 => f.write_str("Int64"),
            LogicalType::Float64 => f.write_str("Float64"),
            LogicalType::Boolean => f.write_str("Bool"),
            LogicalType::Utf8 => f.write_str("String"),
        }
    }
}

/// Arrow timestamp unit whose resolution equals `10^-scale` seconds.
pub fn timestamp_unit_for_scale(scale: u8) -> Option<TimeUnit> {
    match scale {
        0 => Some(TimeUnit::Second),
        3 => Some(TimeUnit::Millisecond),
        6 => Some(TimeUnit::Microsecond),
        9 => Some(TimeUnit::Nanosecond),
        _ => None,
    }
}

pub fn scale_for_timestamp_unit(unit: &TimeUnit) -> u8 {
    match unit {
        TimeUnit::Second => 0,
        TimeUnit::Millisecond => 3,
        TimeUnit::Microsecond => 6,
        TimeUnit::Nanosecond => 9,
    }
}

fn normalize_timezone(timezone: Option<&str>) -> Option<Arc<str>> {
    timezone.filter(|tz| !tz.is_empty()).map(Arc::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temporal_predicates() {
        assert!(LogicalType::Date.is_date());
        assert!(!LogicalType::Date.is_datetime_with_time());
        assert!(LogicalType::datetime(None).is_datetime_with_time());
        assert!(
            LogicalType::datetime64(3, Some("UTC"))
                .unwrap()
                .is_date_or_datetime()
        );
        assert!(!LogicalType::Utf8.is_date_or_datetime());
        assert!(LogicalType::Utf8.is_string());
    }

    #[test]
    fn empty_timezone_is_dropped() {
        assert_eq!(LogicalType::datetime(Some("")).timezone(), None);
        assert_eq!(
            LogicalType::datetime(Some("Asia/Tokyo")).timezone(),
            Some("Asia/Tokyo")
        );
    }

    #[test]
    fn datetime64_scale_is_bounded() {
        assert!(LogicalType::datetime64(9, None).is_ok());
        let err = LogicalType::datetime64(10, None).unwrap_err();
        assert!(matches!(err, Error::InvalidArgumentError(_)));
    }

    #[test]
    fn display_names() {
        assert_eq!(LogicalType::Date.to_string(), "Date");
        assert_eq!(
            LogicalType::datetime(Some("UTC")).to_string(),
            "DateTime('UTC')"
        );
        assert_eq!(
            LogicalType::datetime64(3, Some("Europe/Moscow"))
                .unwrap()
                .to_string(),
            "DateTime64(3, 'Europe/Moscow')"
        );
        assert_eq!(LogicalType::Utf8.to_string(), "String");
    }

    #[test]
    fn arrow_mapping() {
        let millis = LogicalType::datetime64(3, Some("UTC")).unwrap();
        assert_eq!(
            millis.to_arrow(),
            DataType::Timestamp(TimeUnit::Millisecond, Some("UTC".into()))
        );
        assert_eq!(LogicalType::try_from_arrow(&millis.to_arrow()).unwrap(), millis);

        // No Arrow unit for centiseconds.
        let centis = LogicalType::datetime64(2, None).unwrap();
        assert_eq!(centis.to_arrow(), DataType::Int64);

        assert_eq!(
            LogicalType::try_from_arrow(&DataType::Timestamp(TimeUnit::Second, None)).unwrap(),
            LogicalType::datetime(None)
        );
        assert!(LogicalType::try_from_arrow(&DataType::Binary).is_err());
    }
}
