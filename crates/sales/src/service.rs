use shop_core::{DomainError, DomainResult, Entity};
use shop_customers::Customer;

use crate::order::{Order, OrderId};
use crate::order_item::OrderItem;

/// Domain service for operations spanning several orders or an order and its customer.
pub struct OrderService;

impl OrderService {
    /// Combined total of `orders`.
    pub fn total(orders: &[Order]) -> f64 {
        orders.iter().map(Order::total).sum()
    }

    /// Place a new order for `customer` and credit reward points.
    ///
    /// The customer earns half of the order total, rounded down. Nothing is
    /// credited if the order is rejected.
    pub fn place_order(customer: &mut Customer, items: Vec<OrderItem>) -> DomainResult<Order> {
        if items.is_empty() {
            return Err(DomainError::validation("Order must have at least one item."));
        }

        let order = Order::new(OrderId::generate(), customer.id().clone(), items)?;
        let points = (order.total() / 2.0).floor() as u64;
        customer.add_reward_points(points);

        tracing::info!(
            order_id = %order.id(),
            customer_id = %customer.id(),
            total = order.total(),
            reward_points = points,
            "order placed"
        );
        Ok(order)
    }
}
