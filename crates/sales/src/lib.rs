//! Sales domain module: orders and their items.
//!
//! This crate contains business rules for orders, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod order;
pub mod order_item;
pub mod repository;
pub mod service;

pub use order::{Order, OrderId};
pub use order_item::{OrderItem, OrderItemId};
pub use repository::OrderRepository;
pub use service::OrderService;
