//! Catalog document loader.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use advisor_core::error::{AdvisorError, Result};
use advisor_core::product::{Catalog, CatalogRepository};
use tracing::info;

/// Catalog shipped with the binary.
const BUNDLED_CATALOG: &str = include_str!("../data/products.json");

/// Where the catalog document comes from.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    Bundled,
    File(PathBuf),
}

impl CatalogSource {
    /// A configured path, or the bundled document.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map(CatalogSource::File).unwrap_or(CatalogSource::Bundled)
    }
}

/// Loads the JSON catalog document once and caches it for the process
/// lifetime.
#[derive(Debug)]
pub struct FileCatalogRepository {
    source: CatalogSource,
    cache: RwLock<Option<Arc<Catalog>>>,
}

impl FileCatalogRepository {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            cache: RwLock::new(None),
        }
    }

    pub fn bundled() -> Self {
        Self::new(CatalogSource::Bundled)
    }

    fn read_document(&self) -> Result<Catalog> {
        let (origin, content) = match &self.source {
            CatalogSource::Bundled => ("bundled".to_string(), BUNDLED_CATALOG.to_string()),
            CatalogSource::File(path) => {
                let content = fs::read_to_string(path).map_err(|e| {
                    AdvisorError::catalog(format!("Failed to read {}: {}", path.display(), e))
                })?;
                (path.display().to_string(), content)
            }
        };

        let catalog: Catalog = serde_json::from_str(&content).map_err(|e| {
            AdvisorError::catalog(format!("Invalid catalog document {}: {}", origin, e))
        })?;
        validate(&catalog)?;

        info!(source = %origin, products = catalog.len(), "Loaded product catalog");
        Ok(catalog)
    }
}

fn validate(catalog: &Catalog) -> Result<()> {
    let mut seen = HashSet::new();
    for product in &catalog.products {
        if !seen.insert(product.id) {
            return Err(AdvisorError::catalog(format!(
                "Duplicate product id {}",
                product.id
            )));
        }
    }
    Ok(())
}

impl CatalogRepository for FileCatalogRepository {
    fn load(&self) -> Result<Arc<Catalog>> {
        {
            let cached = self
                .cache
                .read()
                .map_err(|_| AdvisorError::internal("catalog cache lock poisoned"))?;
            if let Some(catalog) = cached.as_ref() {
                return Ok(Arc::clone(catalog));
            }
        }

        let catalog = Arc::new(self.read_document()?);
        let mut cached = self
            .cache
            .write()
            .map_err(|_| AdvisorError::internal("catalog cache lock poisoned"))?;
        *cached = Some(Arc::clone(&catalog));
        Ok(catalog)
    }
}
