//! Advisor error type.

use thiserror::Error;

/// Failures surfaced by the advisor crates.
///
/// Library errors stay typed; the binary wraps them with `anyhow` context.
#[derive(Error, Debug, Clone)]
pub enum AdvisorError {
    /// No product (or other record) with this id
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    #[error("IO error: {message}")]
    Io { message: String },

    /// A stored document or catalog did not parse. `format` is "TOML" or "JSON".
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    /// The catalog document is missing or inconsistent
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Routine generation with nothing selected
    #[error("Cannot compose a routine from an empty selection")]
    EmptySelection,

    /// Poisoned lock or similar broken invariant
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdvisorError {
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for unparsable TOML or JSON. Storage writes use this to tell a
    /// corrupt document apart from an unreadable file.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    fn serialization(format: &str, err: impl std::fmt::Display) -> Self {
        Self::Serialization {
            format: format.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AdvisorError {
    fn from(err: std::io::Error) -> Self {
        Self::io(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for AdvisorError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization("JSON", err)
    }
}

impl From<toml::de::Error> for AdvisorError {
    fn from(err: toml::de::Error) -> Self {
        Self::serialization("TOML", err)
    }
}

impl From<toml::ser::Error> for AdvisorError {
    fn from(err: toml::ser::Error) -> Self {
        Self::serialization("TOML", err)
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
