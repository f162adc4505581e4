//! Domain logic of the beauty advisor: catalog models, the product selection,
//! the chat response resolver and routine generation.
//!
//! Everything here is synchronous and free of I/O. Storage and the catalog
//! source are reached through the [`state::KeyValueStore`] and
//! [`product::CatalogRepository`] traits.

pub mod config;
pub mod conversation;
pub mod error;
pub mod language;
pub mod locale;
pub mod product;
pub mod resolver;
pub mod routine;
pub mod selection;
pub mod state;

// Re-export common error type
pub use error::{AdvisorError, Result};
pub use language::Language;
