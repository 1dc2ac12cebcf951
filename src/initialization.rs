//! Logger initialization.

use std::io::Write;

use log::LevelFilter;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the global logger with the given level and format.
///
/// `RUST_LOG` still takes precedence over `level` when set, so ad-hoc
/// filtering (e.g. `RUST_LOG=url_risk=trace`) keeps working.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if matches!(format, LogFormat::Json) {
        builder.format(|buf, record| {
            let line = serde_json::json!({
                "ts": chrono::Utc::now().to_rfc3339(),
                "level": record.level().to_string(),
                "target": record.target(),
                "message": record.args().to_string(),
            });
            writeln!(buf, "{line}")
        });
    }

    builder.try_init()?;
    Ok(())
}
