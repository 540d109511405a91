//! Main application modules.
//!
//! Command implementations and shutdown handling used by the binary.

mod commands;
mod shutdown;

// Re-export public API
pub use commands::{load_directory, run_server, write_neighbors, write_place};
pub use shutdown::shutdown_signal;
