//! `shop-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the entity validation pattern, value objects, identifiers, the domain error
//! model and the repository contract.

pub mod entity;
pub mod error;
pub mod id;
pub mod notification;
pub mod repository;
pub mod value_object;

pub use entity::{Entity, mutate_validated};
pub use error::{DomainError, DomainResult};
pub use notification::{Notification, NotificationError};
pub use repository::Repository;
pub use value_object::ValueObject;
