mod config;
mod log;

pub use config::{ChartConfig, Config, LogConfig, ReportConfig};
pub use log::{LogStore, DEFAULT_FILE_NAME};

use std::io;
use std::path::PathBuf;

/// Returns `~/.config/healthlog[-dev]/` based on HEALTHLOG_ENV.
///
/// Set HEALTHLOG_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HEALTHLOG_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("healthlog-dev")
    } else {
        base_dir.join("healthlog")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
