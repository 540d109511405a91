//! Error type definitions.
//!
//! This module defines the errors raised while starting up, loading the
//! dataset, and answering queries.

use std::collections::TryReserveError;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors raised while building the place store.
///
/// Any of these aborts the load; the store is never published half-built.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A numeric column could not be parsed.
    #[error("Malformed row at line {line}: invalid {field} {value:?}")]
    MalformedRow {
        /// 1-based source line
        line: u64,
        /// Column that failed to parse
        field: &'static str,
        /// Offending text
        value: String,
    },

    /// A row does not reach the country code column.
    #[error("Malformed row at line {line}: found {found} columns, expected at least {expected}")]
    ShortRow {
        /// 1-based source line
        line: u64,
        /// Columns present
        found: usize,
        /// Columns required
        expected: usize,
    },

    /// Two rows share an identifier.
    #[error("Duplicate place id {id} at line {line}")]
    DuplicateId {
        /// The repeated identifier
        id: i64,
        /// 1-based line of the second occurrence
        line: u64,
    },

    /// Backing storage could not be allocated.
    #[error("Failed to allocate place storage: {0}")]
    Storage(#[from] TryReserveError),

    /// Dataset file could not be read.
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Tab-separated reader failed (I/O or invalid UTF-8).
    #[error("Failed to parse dataset: {0}")]
    Tsv(#[from] csv::Error),

    /// Zip archive could not be opened or does not contain the member.
    #[error("Failed to open dataset archive: {0}")]
    Archive(#[from] zip::result::ZipError),
}

/// Errors returned by place and neighbor queries.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// `get_place` was called with an unknown id.
    #[error("Place {0} not found")]
    NotFound(i64),

    /// `get_neighbors` was called with an unknown reference id.
    #[error("Unknown reference place {0}")]
    UnknownPlace(i64),
}

impl QueryError {
    /// The id the caller asked for.
    pub fn id(&self) -> i64 {
        match self {
            QueryError::NotFound(id) | QueryError::UnknownPlace(id) => *id,
        }
    }
}
