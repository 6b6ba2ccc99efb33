//! Function arguments as seen at signature resolution and at execution.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, StringArray, UInt32Array};
use arrow::compute::take;
use tempus_result::{Error, Result};

use crate::literal::Literal;
use crate::logical::LogicalType;

/// Declared type of an argument at signature resolution time.
///
/// `constant` is `Some` exactly when the argument is a constant expression;
/// it then holds the constant's value.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentType {
    pub data_type: LogicalType,
    pub constant: Option<Literal>,
}

impl ArgumentType {
    /// A non-constant column argument.
    pub fn column(data_type: LogicalType) -> Self {
        Self {
            data_type,
            constant: None,
        }
    }

    pub fn constant(data_type: LogicalType, value: impl Into<Literal>) -> Self {
        Self {
            data_type,
            constant: Some(value.into()),
        }
    }

    /// A constant string argument, the shape of a timezone argument.
    pub fn constant_string(value: &str) -> Self {
        Self::constant(LogicalType::Utf8, value)
    }

    pub fn is_constant(&self) -> bool {
        self.constant.is_some()
    }

    /// The constant's string value, if this is a constant string.
    pub fn constant_str(&self) -> Option<&str> {
        self.constant.as_ref().and_then(Literal::as_str)
    }
}

/// Values of one argument for one batch.
#[derive(Debug, Clone)]
pub enum ColumnarValue {
    /// One value per row.
    Array(ArrayRef),
    /// A single-row array standing for the same value on every row.
    Scalar(ArrayRef),
}

impl ColumnarValue {
    pub fn is_scalar(&self) -> bool {
        matches!(self, ColumnarValue::Scalar(_))
    }

    /// Materialize the values as an array of `num_rows` rows, broadcasting a
    /// scalar.
    pub fn into_array(self, num_rows: usize) -> Result<ArrayRef> {
        match self {
            ColumnarValue::Array(array) => Ok(array),
            ColumnarValue::Scalar(value) => {
                if value.len() != 1 {
                    return Err(Error::Internal(format!(
                        "scalar value must hold exactly one row, found {}",
                        value.len()
                    )));
                }
                let indices = UInt32Array::from(vec![0u32; num_rows]);
                Ok(take(value.as_ref(), &indices, None)?)
            }
        }
    }
}

/// An argument handed to a function at execution time.
#[derive(Debug, Clone)]
pub struct Argument {
    pub data_type: LogicalType,
    pub value: ColumnarValue,
}

impl Argument {
    pub fn array(data_type: LogicalType, array: ArrayRef) -> Self {
        Self {
            data_type,
            value: ColumnarValue::Array(array),
        }
    }

    pub fn scalar(data_type: LogicalType, value: ArrayRef) -> Self {
        Self {
            data_type,
            value: ColumnarValue::Scalar(value),
        }
    }

    /// A constant string argument backed by a one-row Utf8 array.
    pub fn constant_string(value: &str) -> Self {
        Self::scalar(
            LogicalType::Utf8,
            Arc::new(StringArray::from(vec![value])),
        )
    }

    /// The resolution-time view of this argument.
    pub fn argument_type(&self) -> Result<ArgumentType> {
        let constant = match &self.value {
            ColumnarValue::Array(_) => None,
            ColumnarValue::Scalar(value) => Some(Literal::from_array(value.as_ref(), 0)?),
        };
        Ok(ArgumentType {
            data_type: self.data_type.clone(),
            constant,
        })
    }
}
