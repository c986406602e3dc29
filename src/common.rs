//! Defines some common functions used in this library.

/// Defines the logarithm bases and the entropy function.
pub mod entropy;

/// Defines the errors of dataset queries.
pub mod error;

/// Defines some checker functions.
pub(crate) mod checker;

pub use entropy::{entropy_of, LogBase, DEFAULT_LOG_BASE};
pub use error::DatasetError;
