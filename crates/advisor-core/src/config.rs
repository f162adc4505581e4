//! User configuration (`config.toml`).

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root of the configuration file. Every field is optional.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Catalog document to load instead of the bundled one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// Directory holding `storage.toml`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub pacing: PacingConfig,
}

/// Reply delays in milliseconds.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingConfig {
    #[serde(default = "default_chat_reply_ms")]
    pub chat_reply_ms: u64,
    #[serde(default = "default_language_notice_ms")]
    pub language_notice_ms: u64,
    #[serde(default = "default_routine_ms")]
    pub routine_ms: u64,
    #[serde(default = "default_follow_up_ms")]
    pub follow_up_ms: u64,
}

fn default_chat_reply_ms() -> u64 {
    500
}

fn default_language_notice_ms() -> u64 {
    300
}

fn default_routine_ms() -> u64 {
    1500
}

fn default_follow_up_ms() -> u64 {
    1000
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            chat_reply_ms: default_chat_reply_ms(),
            language_notice_ms: default_language_notice_ms(),
            routine_ms: default_routine_ms(),
            follow_up_ms: default_follow_up_ms(),
        }
    }
}

impl PacingConfig {
    /// All delays zero: every reply is delivered as soon as it is scheduled.
    pub fn immediate() -> Self {
        Self {
            chat_reply_ms: 0,
            language_notice_ms: 0,
            routine_ms: 0,
            follow_up_ms: 0,
        }
    }

    pub fn chat_reply(&self) -> Duration {
        Duration::from_millis(self.chat_reply_ms)
    }

    pub fn language_notice(&self) -> Duration {
        Duration::from_millis(self.language_notice_ms)
    }

    pub fn routine(&self) -> Duration {
        Duration::from_millis(self.routine_ms)
    }

    pub fn follow_up(&self) -> Duration {
        Duration::from_millis(self.follow_up_ms)
    }
}
