//! Error handling.
//!
//! Errors are split by phase:
//! - **Initialization**: logger setup
//! - **Load**: malformed rows, duplicate ids, unreadable datasets (fatal to startup)
//! - **Query**: unknown ids (returned per call, never fatal)

mod types;

// Re-export public API
pub use types::{InitializationError, LoadError, QueryError};
