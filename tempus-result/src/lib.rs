//! Error types and result definitions for the Tempus temporal function crates.
//!
//! All crates in the workspace share a single error enum ([`Error`]) and the
//! [`Result<T>`] alias, so failures propagate across crate boundaries with the
//! `?` operator without conversion layers.
//!
//! # Error Categories
//!
//! - **Arity errors** ([`Error::ArgumentCountMismatch`]): a function was called
//!   with a number of arguments outside what it accepts
//! - **Type errors** ([`Error::IllegalArgumentType`]): an argument's type or
//!   physical encoding is not accepted
//! - **Timezone errors** ([`Error::InvalidTimeZone`]): unknown timezone names
//! - **Input errors** ([`Error::InvalidArgumentError`]): malformed literals
//! - **Data format errors** ([`Error::Arrow`]): Arrow kernel failures
//! - **Internal errors** ([`Error::Internal`]): bugs or unexpected states
//!
//! [`Error::kind`] maps every variant onto a stable [`ErrorKind`].

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
