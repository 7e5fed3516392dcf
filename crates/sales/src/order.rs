use serde::Serialize;

use shop_core::{DomainError, DomainResult, Entity, mutate_validated, string_id};
use shop_customers::CustomerId;

use crate::order_item::OrderItem;

string_id!(
    /// Order identifier.
    OrderId
);

/// Aggregate root: Order.
///
/// Owns its items and validates them together with its own fields.
/// Validation policy: fail-fast, in the order id, customer id, non-empty items,
/// per-item quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new(
        id: impl Into<OrderId>,
        customer_id: impl Into<CustomerId>,
        items: Vec<OrderItem>,
    ) -> DomainResult<Self> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Sum of every line's `price * quantity`. Always derived, never stored.
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::total).sum()
    }

    pub fn add_item(&mut self, item: OrderItem) -> DomainResult<()> {
        mutate_validated(self, |o| o.items.push(item))
    }
}

impl Entity for Order {
    type Id = OrderId;
    const NAME: &'static str = "Order";

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn validate(&self) -> DomainResult<()> {
        if self.id.is_empty() {
            return Err(DomainError::validation("Id is required."));
        }
        if self.customer_id.is_empty() {
            return Err(DomainError::validation("CustomerId is required."));
        }
        if self.items.is_empty() {
            return Err(DomainError::validation("Items are required."));
        }
        if self.items.iter().any(|item| item.quantity() == 0) {
            return Err(DomainError::validation(
                "Item quantity must be greater than 0.",
            ));
        }
        Ok(())
    }
}
