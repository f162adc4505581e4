//! Product catalog domain models and repository trait.

mod model;
mod repository;

pub use model::{Catalog, Category, Product};
pub use repository::CatalogRepository;
