//! Products domain module.
//!
//! This crate contains business rules for the product catalog, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod events;
pub mod factory;
pub mod handlers;
pub mod product;
pub mod repository;

pub use events::{ProductCreated, ProductEvent, ProductEventKind};
pub use factory::ProductFactory;
pub use handlers::SendEmailWhenProductIsCreated;
pub use product::{Product, ProductId};
pub use repository::ProductRepository;
