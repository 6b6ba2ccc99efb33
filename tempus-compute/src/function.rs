//! Function shell exposing a transform to a query engine.
//!
//! [`TemporalFunction`] binds one [`DateTransform`] kind to the engine facing
//! surface: signature resolution, batch execution with timezone extraction and
//! constant folding, and monotonicity queries. [`TemporalScalarFunction`] is
//! its object-safe face, used by the registry.

use std::fmt;
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, PrimitiveArray};
use tempus_result::{Error, Result};
use tempus_types::{
    Argument, ArgumentType, ColumnarValue, Literal, LogicalType, TemporalContext, TimeZoneRef,
};

use crate::dispatch::execute_batch;
use crate::monotonicity::{Monotonicity, monotonicity_for_range};
use crate::signature::resolve_return_type;
use crate::transform::{DateTransform, FactorTransform};

/// Engine facing interface of a temporal scalar function.
pub trait TemporalScalarFunction: Send + Sync + fmt::Debug {
    /// SQL-visible name, e.g. `toYear`.
    fn name(&self) -> &'static str;

    /// Accepts one or two arguments.
    fn is_variadic(&self) -> bool {
        true
    }

    /// Positions that must be constant expressions.
    fn arguments_always_constant(&self) -> &'static [usize] {
        &[1]
    }

    /// The caller may fold an all-constant call into a single evaluation.
    fn use_default_implementation_for_constants(&self) -> bool {
        true
    }

    fn return_type(&self, args: &[ArgumentType]) -> Result<LogicalType>;

    /// Evaluate the function over one batch of `row_count` rows.
    fn execute(
        &self,
        args: &[Argument],
        row_count: usize,
        ctx: &TemporalContext,
    ) -> Result<ColumnarValue>;

    fn has_information_about_monotonicity(&self) -> bool {
        true
    }

    /// Monotonicity of the single-argument form on `[left, right]`, evaluated
    /// in the context's default timezone.
    fn monotonicity_for_range(
        &self,
        input_type: &LogicalType,
        left: &Literal,
        right: &Literal,
        ctx: &TemporalContext,
    ) -> Monotonicity;

    /// Monotonicity of a concrete call on `[left, right]`.
    ///
    /// A call carrying its own timezone argument is reported monotonic only
    /// when the transform preserves order everywhere.
    fn monotonicity_for_call(
        &self,
        args: &[ArgumentType],
        left: &Literal,
        right: &Literal,
        ctx: &TemporalContext,
    ) -> Monotonicity;
}

/// A transform kind bound to the function shell.
pub struct TemporalFunction<T: DateTransform> {
    transform: T,
}

impl<T: DateTransform> TemporalFunction<T> {
    pub fn new() -> Self {
        Self {
            transform: T::default(),
        }
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    fn evaluate(
        &self,
        input_type: &LogicalType,
        values: &dyn Array,
        timezone: &TimeZoneRef,
        result_type: &LogicalType,
    ) -> Result<ArrayRef> {
        let out = execute_batch(&self.transform, input_type, values, timezone)?;
        let data_type = result_type.to_arrow();
        if !PrimitiveArray::<T::Output>::is_compatible(&data_type) {
            return Err(Error::Internal(format!(
                "{} produced {} values but declared {result_type}",
                T::NAME,
                out.data_type()
            )));
        }
        Ok(Arc::new(out.with_data_type(data_type)))
    }
}

impl<T: DateTransform> Default for TemporalFunction<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DateTransform> fmt::Debug for TemporalFunction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemporalFunction")
            .field("name", &T::NAME)
            .field("return_kind", &T::RETURN_KIND)
            .finish()
    }
}

impl<T: DateTransform> TemporalScalarFunction for TemporalFunction<T> {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn return_type(&self, args: &[ArgumentType]) -> Result<LogicalType> {
        resolve_return_type::<T>(args)
    }

    fn execute(
        &self,
        args: &[Argument],
        row_count: usize,
        ctx: &TemporalContext,
    ) -> Result<ColumnarValue> {
        let arg_types = args
            .iter()
            .map(Argument::argument_type)
            .collect::<Result<Vec<_>>>()?;
        let result_type = resolve_return_type::<T>(&arg_types)?;
        let timezone = extract_timezone(&arg_types, ctx)?;

        let first = &args[0];
        match &first.value {
            ColumnarValue::Scalar(value) => {
                if value.len() != 1 {
                    return Err(Error::Internal(format!(
                        "constant argument of {} must hold one row, found {}",
                        T::NAME,
                        value.len()
                    )));
                }
                tracing::trace!(function = T::NAME, rows = row_count, "folding constant argument");
                let out = self.evaluate(&first.data_type, value.as_ref(), &timezone, &result_type)?;
                Ok(ColumnarValue::Scalar(out))
            }
            ColumnarValue::Array(values) => {
                if values.len() != row_count {
                    return Err(Error::Internal(format!(
                        "argument of {} holds {} rows, batch has {row_count}",
                        T::NAME,
                        values.len()
                    )));
                }
                let out = self.evaluate(&first.data_type, values.as_ref(), &timezone, &result_type)?;
                Ok(ColumnarValue::Array(out))
            }
        }
    }

    fn monotonicity_for_range(
        &self,
        input_type: &LogicalType,
        left: &Literal,
        right: &Literal,
        ctx: &TemporalContext,
    ) -> Monotonicity {
        monotonicity_for_range::<T>(input_type, left, right, &ctx.default_timezone())
    }

    fn monotonicity_for_call(
        &self,
        args: &[ArgumentType],
        left: &Literal,
        right: &Literal,
        ctx: &TemporalContext,
    ) -> Monotonicity {
        match args {
            [input] => {
                let timezone = match input.data_type.timezone() {
                    Some(name) => match TimeZoneRef::resolve(name) {
                        Ok(tz) => tz,
                        Err(_) => return Monotonicity::not_monotonic(),
                    },
                    None => ctx.default_timezone(),
                };
                monotonicity_for_range::<T>(&input.data_type, left, right, &timezone)
            }
            [_, _] if <T::Factor as FactorTransform>::IS_ZERO => Monotonicity::always_monotonic(),
            _ => Monotonicity::not_monotonic(),
        }
    }
}

/// Timezone a call evaluates in.
///
/// The constant second argument wins, then the timezone carried by the first
/// argument's type, then the context default.
pub fn extract_timezone(args: &[ArgumentType], ctx: &TemporalContext) -> Result<TimeZoneRef> {
    if let Some(second) = args.get(1) {
        let name = second.constant_str().ok_or_else(|| {
            Error::IllegalArgumentType(format!(
                "The timezone argument must be a constant string, found {}",
                second.data_type
            ))
        })?;
        return TimeZoneRef::resolve(name);
    }
    match args.first().and_then(|first| first.data_type.timezone()) {
        Some(name) => TimeZoneRef::resolve(name),
        None => Ok(ctx.default_timezone()),
    }
}
