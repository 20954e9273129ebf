//! Run configuration
//!
//! The archiver is configured entirely from the command line; this module
//! holds the resolved configuration types and their validation.

pub mod types;
pub mod validation;

pub use types::{RetryPolicy, RunConfig};
pub use validation::validate;
