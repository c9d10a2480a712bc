//! The product collection a table is evaluated against.

use std::collections::HashSet;

use stockboard_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::Product;

/// An immutable, ordered product collection.
///
/// Ids and SKUs are unique within a catalog. Changes arrive as a whole new
/// catalog; nothing mutates a catalog in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate ids or SKUs.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> DomainResult<Self> {
        let products: Vec<Product> = products.into_iter().collect();

        let mut ids: HashSet<&ProductId> = HashSet::with_capacity(products.len());
        let mut skus: HashSet<&str> = HashSet::with_capacity(products.len());
        for product in &products {
            if !ids.insert(product.id()) {
                return Err(DomainError::conflict(format!(
                    "duplicate product id: {}",
                    product.id()
                )));
            }
            if !skus.insert(product.sku()) {
                return Err(DomainError::conflict(format!(
                    "duplicate SKU: {}",
                    product.sku()
                )));
            }
        }

        Ok(Self { products })
    }

    /// A new catalog with `product` appended (what "add product" hands back).
    pub fn with_product(&self, product: Product) -> DomainResult<Self> {
        let mut products = self.products.clone();
        products.push(product);
        Self::from_products(products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Whether the catalog holds a snapshot of the same product.
    pub fn contains(&self, product: &Product) -> bool {
        self.products.iter().any(|p| p.same_entity(product))
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}
