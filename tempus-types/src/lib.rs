//! Shared type vocabulary for the Tempus temporal function crates.
//!
//! - [`LogicalType`]: the type tag arguments and results carry, including the
//!   three temporal encodings (`Date`, `DateTime`, `DateTime64`)
//! - [`TimeZoneRef`]: an immutable timezone handle passed explicitly to every
//!   transform
//! - [`Literal`], [`ArgumentType`], [`Argument`], [`ColumnarValue`]: how
//!   arguments look at signature resolution and at execution
//! - [`TemporalContext`]: per-query configuration (the default timezone)

pub mod argument;
pub mod context;
pub mod literal;
pub mod logical;
pub mod timezone;

pub use argument::{Argument, ArgumentType, ColumnarValue};
pub use context::TemporalContext;
pub use literal::Literal;
pub use logical::{
    LogicalType, MAX_DATETIME64_SCALE, scale_for_timestamp_unit, timestamp_unit_for_scale,
};
pub use timezone::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, TimeZoneRef};
