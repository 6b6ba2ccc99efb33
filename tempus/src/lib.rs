//! Tempus: Arrow-native temporal functions
//!
//! This crate is the entrypoint for the Tempus toolkit. It re-exports the
//! function registry, the type vocabulary, and the error types from the
//! underlying `tempus-*` crates.
//!
//! # Quick Start
//!
//! Look up a function, resolve its signature, and run it over a column of
//! millisecond timestamps:
//!
//! ```rust
//! use std::sync::Arc;
//! use arrow::array::{AsArray, TimestampMillisecondArray};
//! use arrow::datatypes::Int32Type;
//! use tempus::{Argument, ArgumentType, LogicalType, TemporalContext, builtin_function};
//!
//! let to_year = builtin_function("toYear").unwrap();
//! let ty = LogicalType::datetime64(3, Some("UTC")).unwrap();
//! assert_eq!(
//!     to_year.return_type(&[ArgumentType::column(ty.clone())]).unwrap(),
//!     LogicalType::Int32
//! );
//!
//! let ticks = Arc::new(
//!     TimestampMillisecondArray::from(vec![1_609_459_199_000, 1_609_459_200_000])
//!         .with_timezone("UTC"),
//! );
//! let years = to_year
//!     .execute(&[Argument::array(ty, ticks)], 2, &TemporalContext::default())
//!     .unwrap()
//!     .into_array(2)
//!     .unwrap();
//! assert_eq!(years.as_primitive::<Int32Type>().values().to_vec(), vec![2020, 2021]);
//! ```
//!
//! # Architecture
//!
//! - **Errors** (`tempus-result`): the single [`Error`] enum and its stable
//!   [`ErrorKind`] codes.
//! - **Types** (`tempus-types`): logical types, literals, timezone handles,
//!   arguments, and the per-query [`TemporalContext`].
//! - **Compute** (`tempus-compute`): transforms, the batch dispatch engine,
//!   the `DateTime64` scale adapter, signature validation, and the
//!   monotonicity oracle.

pub use tempus_compute::{
    Monotonicity, TemporalFunction, TemporalScalarFunction, builtin_function,
    builtin_function_names,
};
pub use tempus_result::{Error, ErrorKind, Result};
pub use tempus_types::{
    Argument, ArgumentType, ColumnarValue, Literal, LogicalType, TemporalContext, TimeZoneRef,
};

pub mod transforms {
    //! Transform kinds and the traits a new transform implements.
    //!
    //! A custom transform implements [`DateTransform`] and is wrapped in
    //! [`TemporalFunction`](crate::TemporalFunction) to get signature
    //! validation, dispatch, and monotonicity for free.

    pub use tempus_compute::transform::{
        DateTransform, FactorBy, FactorTransform, NativeOf, ReturnKind, ZeroTransform,
    };
    pub use tempus_compute::transforms::*;
}
