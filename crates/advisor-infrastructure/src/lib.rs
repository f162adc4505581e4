//! Filesystem-backed implementations of the advisor's storage and catalog
//! traits.

pub mod catalog_repository;
pub mod config_loader;
pub mod paths;
pub mod storage;

pub use crate::catalog_repository::{CatalogSource, FileCatalogRepository};
pub use crate::config_loader::load_config;
pub use crate::paths::AdvisorPaths;
pub use crate::storage::TomlKeyValueStore;
