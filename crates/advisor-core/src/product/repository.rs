//! Catalog repository trait.

use std::sync::Arc;

use super::model::Catalog;
use crate::error::Result;

/// Read-only access to the product catalog document.
///
/// Implementations load the document once and serve the cached copy for the
/// lifetime of the process.
pub trait CatalogRepository: Send + Sync {
    /// Returns the catalog, loading it on first access.
    fn load(&self) -> Result<Arc<Catalog>>;
}
