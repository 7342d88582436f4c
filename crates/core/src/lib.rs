//! `gearbag-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no console, no storage).

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{InventoryId, ItemId};
pub use value_object::ValueObject;
