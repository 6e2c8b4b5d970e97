//! Logging bootstrap for the command-line binary
//!
//! The library only emits through the `log` facade. The binary installs a
//! `flexi_logger` backend writing to stderr so that command output on
//! stdout stays clean.

use flexi_logger::{Logger, LoggerHandle};

use crate::error::LedgerError;

const SUPPORTED_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Normalize a level name, rejecting anything `log` does not know
pub fn normalize_level(level: &str) -> Result<&'static str, LedgerError> {
    let wanted = level.trim().to_lowercase();
    SUPPORTED_LEVELS
        .iter()
        .copied()
        .find(|l| *l == wanted)
        .ok_or_else(|| {
            LedgerError::Config(format!(
                "Unsupported log level '{}'. Valid levels: {}",
                level,
                SUPPORTED_LEVELS.join(", ")
            ))
        })
}

/// Start logging to stderr
///
/// `RUST_LOG` takes precedence over `default_level`. The returned handle
/// must be kept alive for the lifetime of the process.
pub fn init_logging(default_level: &str) -> Result<LoggerHandle, LedgerError> {
    let level = normalize_level(default_level)?;

    Logger::try_with_env_or_str(level)
        .map_err(|e| LedgerError::Config(format!("Invalid log specification: {}", e)))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|e| LedgerError::Config(format!("Failed to start logger: {}", e)))
}
