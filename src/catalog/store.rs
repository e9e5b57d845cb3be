//! Read-only catalog lookups.

use crate::catalog::content::{Advantage, ComparisonEntry, FeatureDescriptor, ADVANTAGES, COMPARISON, FEATURES};
use crate::catalog::product::{Product, PRODUCTS};

/// Immutable view over a product table.
///
/// Copying the store copies a slice reference; every clone reads the same
/// records.
#[derive(Debug, Clone, Copy)]
pub struct CatalogStore {
    products: &'static [Product],
}

impl CatalogStore {
    /// Create a store over an arbitrary static table.
    pub fn new(products: &'static [Product]) -> Self {
        Self { products }
    }

    /// The built-in six-product catalog.
    pub fn builtin() -> Self {
        Self::new(&PRODUCTS)
    }

    /// All products in table order.
    pub fn list_all(&self) -> &'static [Product] {
        self.products
    }

    /// Featured products, preserving table order.
    ///
    /// Each call returns a fresh iterator over the same data.
    pub fn list_featured(&self) -> impl Iterator<Item = &'static Product> + Clone {
        self.products.iter().filter(|p| p.featured)
    }

    /// Look up a product by id.
    ///
    /// Linear scan; the table is not indexed.
    pub fn find_by_id(&self, id: u32) -> Option<&'static Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn features(&self) -> &'static [FeatureDescriptor] {
        &FEATURES
    }

    pub fn advantages(&self) -> &'static [Advantage] {
        &ADVANTAGES
    }

    pub fn comparison(&self) -> &'static [ComparisonEntry] {
        &COMPARISON
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::builtin()
    }
}
