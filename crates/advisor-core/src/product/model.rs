//! Product and catalog domain models.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Product category as it appears in the catalog document.
///
/// Serialized with the catalog's exact spelling (`"men's grooming"`,
/// `"hair styling"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Category {
    #[serde(rename = "cleanser")]
    Cleanser,
    #[serde(rename = "moisturizer")]
    Moisturizer,
    #[serde(rename = "skincare")]
    Skincare,
    #[serde(rename = "haircare")]
    Haircare,
    #[serde(rename = "hair styling")]
    HairStyling,
    #[serde(rename = "hair color")]
    HairColor,
    #[serde(rename = "makeup")]
    Makeup,
    #[serde(rename = "suncare")]
    Suncare,
    #[serde(rename = "men's grooming")]
    MensGrooming,
    #[serde(rename = "fragrance")]
    Fragrance,
}

impl Category {
    /// Returns the catalog spelling of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Cleanser => "cleanser",
            Category::Moisturizer => "moisturizer",
            Category::Skincare => "skincare",
            Category::Haircare => "haircare",
            Category::HairStyling => "hair styling",
            Category::HairColor => "hair color",
            Category::Makeup => "makeup",
            Category::Suncare => "suncare",
            Category::MensGrooming => "men's grooming",
            Category::Fragrance => "fragrance",
        }
    }

    /// Parses user-typed category names.
    ///
    /// Accepts the catalog spelling in any case, and a relaxed form where
    /// spaces may be written as `-` or `_` and the apostrophe may be dropped
    /// (`mens-grooming`, `hair_color`).
    pub fn parse(input: &str) -> Option<Self> {
        let wanted = normalize(input);
        Category::iter().find(|category| normalize(category.as_str()) == wanted)
    }

    /// Returns all categories in filter-control order.
    pub fn all() -> Vec<Self> {
        Category::iter().collect()
    }

    /// Whether this category belongs to the hair family.
    pub fn is_hair(self) -> bool {
        matches!(
            self,
            Category::Haircare | Category::HairStyling | Category::HairColor
        )
    }
}

fn normalize(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != '\'')
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect()
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog product. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within the catalog
    pub id: u32,
    /// Display name
    pub name: String,
    pub brand: String,
    pub category: Category,
    /// Image reference (URL or relative path)
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Case-sensitive substring test on the product name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.contains(needle)
    }

    pub fn is(&self, category: Category) -> bool {
        self.category == category
    }
}

/// The catalog document: an ordered list of products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Looks a product up by identifier.
    pub fn find(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Returns the products of one category, in catalog order.
    pub fn in_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
