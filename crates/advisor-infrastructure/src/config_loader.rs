//! Loads `config.toml`.

use std::path::Path;

use advisor_core::config::AdvisorConfig;
use advisor_core::error::{AdvisorError, Result};
use tracing::{debug, info};

use crate::storage::AtomicTomlFile;

/// Reads the configuration file. A missing or empty file yields the defaults;
/// a file that does not parse is a configuration error.
pub fn load_config(path: &Path) -> Result<AdvisorConfig> {
    let file = AtomicTomlFile::<AdvisorConfig>::new(path.to_path_buf());
    match file.load() {
        Ok(Some(config)) => {
            info!(path = %path.display(), "Loaded configuration");
            Ok(config)
        }
        Ok(None) => {
            debug!(path = %path.display(), "No configuration file, using defaults");
            Ok(AdvisorConfig::default())
        }
        Err(e) => Err(AdvisorError::config(format!(
            "Invalid configuration file {}: {}",
            path.display(),
            e
        ))),
    }
}
