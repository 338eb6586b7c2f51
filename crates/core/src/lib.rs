//! `charforge-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives: the error model, the fixed
//! validation bounds, identifiers, and the entity/value-object traits.

pub mod entity;
pub mod error;
pub mod id;
pub mod limits;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, NameViolation};
pub use id::CharacterId;
pub use value_object::ValueObject;
