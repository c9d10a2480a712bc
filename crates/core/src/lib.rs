//! `stockboard-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no I/O, no UI concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, ProductId, SessionId, SupplierId, UserId};
pub use value_object::ValueObject;
