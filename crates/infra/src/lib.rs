//! Infrastructure adapters for the shop domain.
//!
//! - in-memory tables and repositories (one per entity), mirroring the
//!   relational schema through serde row models
//! - the application-wide [`ShopEvent`] family and its default dispatcher wiring

pub mod error;
pub mod events;
pub mod models;
pub mod repositories;
pub mod table;

pub use error::RepositoryError;
pub use events::{ShopEvent, ShopEventKind, default_dispatcher};
pub use models::{CustomerModel, OrderItemModel, OrderModel, ProductModel};
pub use repositories::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
};
pub use table::{Row, Table};
