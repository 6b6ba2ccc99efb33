//! Temporal transforms over Arrow arrays.
//!
//! A transform (see [`transform::DateTransform`]) is a pure function over a
//! calendar day number or over epoch seconds. This crate runs transforms
//! over the three temporal encodings, adapts scaled `DateTime64` ticks,
//! validates call signatures, and answers monotonicity queries for
//! predicate rewriting. [`function::TemporalFunction`] packages all of that
//! behind the engine facing [`function::TemporalScalarFunction`] trait.

pub mod date;
pub mod dispatch;
pub mod function;
pub mod monotonicity;
pub mod registry;
pub mod scale;
pub mod signature;
pub mod transform;
pub mod transforms;

pub use dispatch::{apply_rows, execute_batch};
pub use function::{TemporalFunction, TemporalScalarFunction, extract_timezone};
pub use monotonicity::{Monotonicity, monotonicity_for_range};
pub use registry::{builtin_function, builtin_function_names};
pub use scale::{ScaledTransform, scale_multiplier, whole_seconds};
pub use signature::{resolve_for, resolve_return_type};
pub use transform::{
    DateTransform, DayNumbers, EpochSeconds, FactorBy, FactorTransform, NativeOf, ReturnKind,
    RowTransform, ZeroTransform,
};
pub use transforms::*;
