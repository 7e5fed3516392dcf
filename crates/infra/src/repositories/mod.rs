//! In-memory repositories, one per entity, backed by [`Table`](crate::table::Table).

pub mod customer;
pub mod order;
pub mod product;

pub use customer::InMemoryCustomerRepository;
pub use order::InMemoryOrderRepository;
pub use product::InMemoryProductRepository;
