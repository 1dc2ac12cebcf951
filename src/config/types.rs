//! Configuration types and CLI options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_DB_PATH;

/// Logging level for the application.
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
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration, parsed from the command line.
///
/// Can also be constructed programmatically for library use:
///
/// ```no_run
/// use url_risk::Config;
///
/// let config = Config {
///     url: Some("https://example.com".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "url_risk",
    about = "Scores URLs for phishing risk and records scan history in SQLite"
)]
pub struct Config {
    /// URL to assess
    pub url: Option<String>,

    /// File containing URLs to assess, one per line
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// SQLite database path for scan history
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Path to a serialized linear classifier model (JSON weights file)
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Print the N most recent scan history rows and exit
    #[arg(long, value_name = "N")]
    pub recent: Option<i64>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: None,
            file: None,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            model: None,
            recent: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
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
    fn test_cli_parsing_single_url() {
        let config = Config::parse_from(["url_risk", "https://example.com"]);
        assert_eq!(config.url.as_deref(), Some("https://example.com"));
        assert!(config.file.is_none());
    }

    #[test]
    fn test_cli_parsing_file_and_model() {
        let config = Config::parse_from([
            "url_risk",
            "--file",
            "urls.txt",
            "--model",
            "model.json",
            "--db-path",
            "/tmp/history.db",
        ]);
        assert_eq!(config.file, Some(PathBuf::from("urls.txt")));
        assert_eq!(config.model, Some(PathBuf::from("model.json")));
        assert_eq!(config.db_path, PathBuf::from("/tmp/history.db"));
    }
}
