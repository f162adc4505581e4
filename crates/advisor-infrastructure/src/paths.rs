//! Filesystem locations of the advisor's files.
//!
//! ```text
//! ~/.config/beauty-advisor/        # Config directory
//! └── config.toml                  # Optional user configuration
//!
//! ~/.local/share/beauty-advisor/   # Data directory
//! ├── storage.toml                 # Persisted selection and language
//! └── logs/
//!     └── advisor.log.YYYY-MM-DD
//! ```
//!
//! A base directory override places everything under one root, which tests
//! use with a temporary directory.

use std::path::PathBuf;

use advisor_core::error::{AdvisorError, Result};

const APP_DIR: &str = "beauty-advisor";

#[derive(Debug, Clone, Default)]
pub struct AdvisorPaths {
    base: Option<PathBuf>,
    data_override: Option<PathBuf>,
}

impl AdvisorPaths {
    /// Creates a path resolver. With `base`, every directory lives under it
    /// instead of the platform directories.
    pub fn new(base: Option<PathBuf>) -> Self {
        Self {
            base,
            data_override: None,
        }
    }

    /// Overrides the data directory only (the `data_dir` config field).
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        self.data_override = data_dir;
        self
    }

    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base {
            return Ok(base.join("config"));
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| AdvisorError::config("Cannot determine the config directory"))
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_override {
            return Ok(dir.clone());
        }
        if let Some(base) = &self.base {
            return Ok(base.join("data"));
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| AdvisorError::config("Cannot determine the data directory"))
    }

    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Key-value storage file.
    pub fn storage_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("storage.toml"))
    }

    pub fn logs_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("logs"))
    }
}
