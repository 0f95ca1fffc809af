//! Logging setup shared by the binaries.

pub use crate::tracing::{LogFormat, init};

/// Tracing configuration (filters, formats).
pub mod tracing;
