//! The user's product selection.

use serde::{Deserialize, Serialize};

use crate::product::{Category, Product};

/// Result of toggling a product in or out of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// An ordered set of products, unique by identifier.
///
/// Insertion order is preserved for display. Serialized as a plain JSON array
/// of full product objects; deserializing drops duplicate ids like
/// [`Selection::from_products`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Product>", into = "Vec<Product>")]
pub struct Selection {
    items: Vec<Product>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from a stored list, dropping duplicate identifiers
    /// (the first occurrence wins).
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut selection = Self::new();
        for product in products {
            selection.add(product);
        }
        selection
    }

    /// Adds a product unless one with the same id is already selected.
    ///
    /// Returns `true` if the product was added.
    pub fn add(&mut self, product: Product) -> bool {
        if self.contains(product.id) {
            return false;
        }
        self.items.push(product);
        true
    }

    /// Removes the product with the given id, keeping the order of the rest.
    pub fn remove(&mut self, id: u32) -> Option<Product> {
        let index = self.items.iter().position(|p| p.id == id)?;
        Some(self.items.remove(index))
    }

    /// Adds the product if absent, removes it if present.
    pub fn toggle(&mut self, product: &Product) -> Toggle {
        if self.remove(product.id).is_some() {
            Toggle::Removed
        } else {
            self.items.push(product.clone());
            Toggle::Added
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, id: u32) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Product>> for Selection {
    fn from(products: Vec<Product>) -> Self {
        Self::from_products(products)
    }
}

impl From<Selection> for Vec<Product> {
    fn from(selection: Selection) -> Self {
        selection.items
    }
}

/// Distinct categories of a product list in first-seen order.
pub fn categories_of(products: &[Product]) -> Vec<Category> {
    let mut seen = Vec::new();
    for product in products {
        if !seen.contains(&product.category) {
            seen.push(product.category);
        }
    }
    seen
}

/// Distinct brands of a product list in first-seen order.
pub fn distinct_brands(products: &[Product]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for product in products {
        if !seen.contains(&product.brand.as_str()) {
            seen.push(&product.brand);
        }
    }
    seen
}
