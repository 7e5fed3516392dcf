use serde::Serialize;

use shop_core::string_id;
use shop_products::ProductId;

string_id!(
    /// Order line identifier.
    OrderItemId
);

/// Child entity of [`Order`](crate::Order): one product line.
///
/// Items do not validate themselves; the owning order checks them as part of
/// its own invariants, so a quantity of zero surfaces as an order failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    id: OrderItemId,
    name: String,
    price: f64,
    product_id: ProductId,
    quantity: u32,
}

impl OrderItem {
    pub fn new(
        id: impl Into<OrderItemId>,
        name: impl Into<String>,
        price: f64,
        product_id: impl Into<ProductId>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        }
    }

    pub fn id(&self) -> &OrderItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Line total: unit price times quantity.
    pub fn total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
