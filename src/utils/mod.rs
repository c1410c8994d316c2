//! Shared utilities.
//!
//! - [`errors`]: Application error type and its HTTP mapping

pub mod errors;
