//! Shared helpers for CLI commands.

use std::path::PathBuf;

use healthlog_core::{Config, LogStore};

/// Open the record store, resolving its location in priority order:
/// the `--file` flag, then `log.data_file` from config, then the default
/// location under the data directory. The file is created with its header
/// if it does not exist yet.
pub fn open_store(file: &Option<PathBuf>) -> Result<LogStore, Box<dyn std::error::Error>> {
    if let Some(path) = file {
        let store = LogStore::new(path);
        store.ensure_initialized()?;
        return Ok(store);
    }

    let config = Config::load_or_default();
    if let Some(path) = config.log.data_file {
        let store = LogStore::new(path);
        store.ensure_initialized()?;
        return Ok(store);
    }

    Ok(LogStore::open_default()?)
}
