//! Logger initialization.

use std::io::Write;

use colored::*;
use env_logger::fmt::Formatter;
use log::{LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first and the `level` argument overrides it for this
/// crate, so `RUST_LOG=axum=debug` still works next to `--log-level info`.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug city_neighbors serve ./cities1000.zip
/// city_neighbors --log-format json serve ./cities1000.zip
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("tower", LevelFilter::Info);
    builder.filter_module("city_neighbors", level);

    match format {
        LogFormat::Json => builder.format(format_json),
        LogFormat::Plain => {
            colored::control::set_override(true);
            builder.format(format_plain)
        }
    };

    builder.try_init()?;
    Ok(())
}

fn format_json(buf: &mut Formatter, record: &Record<'_>) -> std::io::Result<()> {
    writeln!(
        buf,
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        chrono::Utc::now().timestamp_millis(),
        record.level(),
        record.target(),
        serde_json::to_string(&record.args().to_string()).unwrap_or_else(|_| "\"\"".into())
    )
}

fn format_plain(buf: &mut Formatter, record: &Record<'_>) -> std::io::Result<()> {
    let level = record.level();
    let colored_level = match level {
        log::Level::Error => level.to_string().red(),
        log::Level::Warn => level.to_string().yellow(),
        log::Level::Info => level.to_string().green(),
        log::Level::Debug => level.to_string().blue(),
        log::Level::Trace => level.to_string().purple(),
    };

    writeln!(
        buf,
        "{} {} [{}] {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        record.target().cyan(),
        colored_level,
        record.args()
    )
}
