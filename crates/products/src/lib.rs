//! Product inventory domain types.
//!
//! This crate describes what the dashboard lists (products and the reference
//! data they point at) as plain values. Fetching, creating and persisting
//! them is the job of external collaborators; the collection arrives here
//! already loaded.

pub mod catalog;
pub mod product;
pub mod reference;

pub use catalog::ProductCatalog;
pub use product::{NewProduct, PricingMetadata, Product, ProductStatus};
pub use reference::{Category, ReferenceData, Supplier};
