//! Configuration types.
//!
//! This module defines the enums and structs shared by the library and the
//! command-line front end.

use std::path::PathBuf;

use clap::ValueEnum;
use thiserror::Error;

use crate::config::constants::{
    DEFAULT_ARCHIVE_MEMBER, DEFAULT_DATASET_PATH, DEFAULT_HOST, DEFAULT_PORT,
};
use crate::distance::Metric;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Distance model used to rank neighbors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MetricKind {
    /// Spherical law of cosines (default)
    #[default]
    Cosine,
    /// Haversine formula
    Haversine,
}

impl From<MetricKind> for Metric {
    fn from(kind: MetricKind) -> Self {
        match kind {
            MetricKind::Cosine => Metric::SphericalCosine,
            MetricKind::Haversine => Metric::Haversine,
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use city_neighbors::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     dataset: PathBuf::from("cities1000.zip"),
///     port: 9000,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Dataset path: a `.zip` archive or a plain tab-separated file
    pub dataset: PathBuf,

    /// Member of the zip archive to read (ignored for plain files)
    pub member: String,

    /// Address the HTTP API binds to
    pub host: String,

    /// Port the HTTP API listens on
    pub port: u16,

    /// Distance model for neighbor ranking
    pub metric: MetricKind,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET_PATH),
            member: DEFAULT_ARCHIVE_MEMBER.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            metric: MetricKind::default(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// A configuration field that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is expected
    pub message: String,
}

impl Config {
    /// Checks the configuration before any resources are created.
    ///
    /// # Errors
    ///
    /// Returns the first field that is out of range.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.dataset.as_os_str().is_empty() {
            return Err(ConfigValidationError {
                field: "dataset",
                message: "must point to a GeoNames extract (.zip or .txt)".to_string(),
            });
        }
        if self.member.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "member",
                message: "must name the TSV file inside the archive".to_string(),
            });
        }
        if self.host.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "host",
                message: "must be a hostname or IP address".to_string(),
            });
        }
        if self.port == 0 {
            return Err(ConfigValidationError {
                field: "port",
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns `true` when the dataset should be read through the zip reader.
    pub fn is_archive(&self) -> bool {
        self.dataset
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_metric_kind_conversion() {
        assert_eq!(Metric::from(MetricKind::Cosine), Metric::SphericalCosine);
        assert_eq!(Metric::from(MetricKind::Haversine), Metric::Haversine);
        assert_eq!(MetricKind::default(), MetricKind::Cosine);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.dataset, PathBuf::from("./cities1000.zip"));
        assert_eq!(config.member, "cities1000.txt");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.metric, MetricKind::Cosine);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_rejects_zero_port() {
        let config = Config {
            port: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "port");
        assert!(err.message.contains("greater than 0"));
    }

    #[test]
    fn test_config_validate_rejects_blank_member() {
        let config = Config {
            member: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "member");
    }

    #[test]
    fn test_config_validate_rejects_empty_dataset() {
        let config = Config {
            dataset: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "dataset");
    }

    #[test]
    fn test_is_archive_by_extension() {
        let mut config = Config::default();
        assert!(config.is_archive());

        config.dataset = PathBuf::from("data/CITIES1000.ZIP");
        assert!(config.is_archive());

        config.dataset = PathBuf::from("data/cities1000.txt");
        assert!(!config.is_archive());

        config.dataset = PathBuf::from("data/cities1000");
        assert!(!config.is_archive());
    }
}
