//! Product fixtures shared by the unit tests.

use stockboard_core::{CategoryId, ProductId, SupplierId};
use stockboard_products::{NewProduct, PricingMetadata, Product, ProductStatus};

pub(crate) fn product(id: &str, category: &str, status: &str, supplier: &str) -> Product {
    build(id, &format!("Product {id}"), &format!("SKU-{id}"), category, status, supplier)
}

pub(crate) fn product_named(id: &str, name: &str, sku: &str) -> Product {
    build(id, name, sku, "General", "active", "Acme")
}

/// `count` products with ids "a", "b", ... in order.
pub(crate) fn lettered(count: u8) -> Vec<Product> {
    (0..count)
        .map(|i| char::from(b'a' + i).to_string())
        .map(|id| product(&id, "General", "active", "Acme"))
        .collect()
}

fn build(id: &str, name: &str, sku: &str, category: &str, status: &str, supplier: &str) -> Product {
    Product::create(NewProduct {
        id: ProductId::new(id).unwrap(),
        sku: sku.to_string(),
        name: name.to_string(),
        category: CategoryId::new(category).unwrap(),
        supplier: SupplierId::new(supplier).unwrap(),
        status: status.parse::<ProductStatus>().unwrap(),
        quantity: 10,
        pricing: PricingMetadata::default(),
        created_by: None,
        created_at: None,
    })
    .unwrap()
}
