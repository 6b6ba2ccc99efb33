//! Untyped literal values for constant arguments and range boundaries.
//!
//! Literals describe the value of a constant function argument at signature
//! resolution time (for example the timezone string in `toHour(ts, 'UTC')`)
//! and the boundaries of a value range handed to the monotonicity oracle,
//! where [`Literal::Null`] stands for an unbounded side.

use arrow::array::{Array, AsArray};
use arrow::datatypes::{
    DataType, Date32Type, Float32Type, Float64Type, Int8Type, Int16Type, Int32Type, Int64Type,
    TimeUnit, TimestampMicrosecondType, TimestampMillisecondType, TimestampNanosecondType,
    TimestampSecondType, UInt8Type, UInt16Type, UInt32Type, UInt64Type,
};
use tempus_result::{Error, Result};

/// A literal value that has not been coerced into a specific native type.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Int128(i128),
    Float64(f64),
    String(String),
    Boolean(bool),
    /// Date literal stored as days since the Unix epoch (1970-01-01).
    Date32(i32),
}

macro_rules! impl_from_for_literal {
    ($variant:ident, $($t:ty),*) => {
        $(
            impl From<$t> for Literal {
                fn from(v: $t) -> Self {
                    Literal::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for_literal!(Int128, i8, i16, i32, i64, i128, u8, u16, u32, u64);
impl_from_for_literal!(Float64, f32, f64);
impl_from_for_literal!(String, String);
impl_from_for_literal!(Boolean, bool);

impl From<&str> for Literal {
    fn from(v: &str) -> Self {
        Literal::String(v.to_string())
    }
}

macro_rules! primitive_literal {
    ($array:expr, $row:expr, $arrow_ty:ty, $variant:ident) => {
        Literal::$variant($array.as_primitive::<$arrow_ty>().value($row).into())
    };
}

impl Literal {
    pub fn is_null(&self) -> bool {
        matches!(self, Literal::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Integer view of the literal when it fits in `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Literal::Int128(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Human-friendly rendering used in plan/debug output.
    pub fn format_display(&self) -> String {
        match self {
            Literal::Null => "NULL".to_string(),
            Literal::Int128(v) => v.to_string(),
            Literal::Float64(v) => v.to_string(),
            Literal::String(s) => format!("'{s}'"),
            Literal::Boolean(b) => b.to_string(),
            Literal::Date32(days) => format!("DATE({days})"),
        }
    }

    /// Read the value at `row` of an Arrow array as a literal.
    ///
    /// Timestamp values become their raw integer ticks; the caller knows the
    /// scale from the logical type.
    pub fn from_array(array: &dyn Array, row: usize) -> Result<Self> {
        if row >= array.len() {
            return Err(Error::Internal(format!(
                "literal row {row} out of bounds for array of length {}",
                array.len()
            )));
        }
        if array.is_null(row) {
            return Ok(Literal::Null);
        }
        let literal = match array.data_type() {
            DataType::Utf8 => Literal::String(array.as_string::<i32>().value(row).to_string()),
            DataType::LargeUtf8 => {
                Literal::String(array.as_string::<i64>().value(row).to_string())
            }
            DataType::Boolean => Literal::Boolean(array.as_boolean().value(row)),
            DataType::Int8 => primitive_literal!(array, row, Int8Type, Int128),
            DataType::Int16 => primitive_literal!(array, row, Int16Type, Int128),
            DataType::Int32 => primitive_literal!(array, row, Int32Type, Int128),
            DataType::Int64 => primitive_literal!(array, row, Int64Type, Int128),
            DataType::UInt8 => primitive_literal!(array, row, UInt8Type, Int128),
            DataType::UInt16 => primitive_literal!(array, row, UInt16Type, Int128),
            DataType::UInt32 => primitive_literal!(array, row, UInt32Type, Int128),
            DataType::UInt64 => primitive_literal!(array, row, UInt64Type, Int128),
            DataType::Float32 => primitive_literal!(array, row, Float32Type, Float64),
            DataType::Float64 => primitive_literal!(array, row, Float64Type, Float64),
            DataType::Date32 => Literal::Date32(array.as_primitive::<Date32Type>().value(row)),
            DataType::Timestamp(TimeUnit::Second, _) => {
                primitive_literal!(array, row, TimestampSecondType, Int128)
            }
            DataType::Timestamp(TimeUnit::Millisecond, _) => {
                primitive_literal!(array, row, TimestampMillisecondType, Int128)
            }
            DataType::Timestamp(TimeUnit::Microsecond, _) => {
                primitive_literal!(array, row, TimestampMicrosecondType, Int128)
            }
            DataType::Timestamp(TimeUnit::Nanosecond, _) => {
                primitive_literal!(array, row, TimestampNanosecondType, Int128)
            }
            other => {
                return Err(Error::InvalidArgumentError(format!(
                    "cannot read a literal from an array of type {other}"
                )));
            }
        };
        Ok(literal)
    }
}
