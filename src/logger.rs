//! File logging setup
//!
//! Logging is off by default and never writes to the terminal (the alternate
//! screen owns it). When enabled in the config, log records go to a file in
//! the user data directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::LoggingConfig;

/// Initialize the global logger according to the config.
///
/// A no-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
        .apply()
        .context("Failed to install logger")?;

    log::info!("logging to {}", path.display());
    Ok(())
}

/// Path of the log file under the user data directory.
pub fn log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("termidex").join("termidex.log"))
}
