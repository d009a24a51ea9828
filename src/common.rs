//! Defines some common items used in this library.

/// Defines the error type of this library.
pub mod error;

/// Defines some checker functions.
pub(crate) mod checker;

/// Defines some useful functions such as inner product calculation.
pub(crate) mod utils;

pub use error::BoostError;
