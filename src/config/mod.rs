//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (dataset defaults, GeoNames column layout, etc.)
//! - Library configuration and validation
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Cli, Command, DatasetArgs, NeighborsArgs, PlaceArgs, ServeArgs};
pub use constants::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel, MetricKind};
