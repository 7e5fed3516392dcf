use shop_core::Repository;

use crate::order::Order;

/// Persistence contract for orders (items are persisted with their order).
///
/// `find` must report a missing order as `"Order not found."`.
pub trait OrderRepository: Repository<Order> {}

impl<R> OrderRepository for R where R: Repository<Order> {}
