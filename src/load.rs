use std::fs;
use std::path::Path;

use crate::shared::{ConfigError, DEFAULT_MAX_ROUTINES, SyncConfig};

/// Loads the sync configuration from a single JSON file.
///
/// The pipeline is read, decode, default, validate, in that order. Failures
/// return a [`ConfigError`] instead of terminating the process; if this
/// function returns `Ok`, every required parameter is populated and
/// `max_routines` is strictly positive.
pub fn load_config(path: impl AsRef<Path>) -> Result<SyncConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;

    let mut config: SyncConfig = serde_json::from_str(&contents)?;

    // `max_routines` is the only defaulted field, absent and explicit zero
    // are treated the same.
    if config.max_routines == 0 {
        config.max_routines = DEFAULT_MAX_ROUTINES;
    }

    config.validate()?;

    Ok(config)
}
