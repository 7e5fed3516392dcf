use serde::Serialize;

use shop_core::{DomainResult, Entity, Notification, mutate_validated, string_id};

string_id!(
    /// Product identifier.
    ProductId
);

/// Entity: Product.
///
/// Validation policy: notification. Every rule is evaluated and all failures
/// are reported together, each tagged with the `product` context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
    ) -> DomainResult<Self> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        mutate_validated(self, |p| p.name = name)
    }

    pub fn change_price(&mut self, price: f64) -> DomainResult<()> {
        mutate_validated(self, |p| p.price = price)
    }
}

impl Entity for Product {
    type Id = ProductId;
    const NAME: &'static str = "Product";

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn validate(&self) -> DomainResult<()> {
        let mut notification = Notification::new();

        if self.id.is_empty() {
            notification.add_error("product", "Id is required.");
        }
        if self.name.is_empty() {
            notification.add_error("product", "Name is required.");
        }
        // Also rejects NaN.
        if !(self.price > 0.0) {
            notification.add_error("product", "Price must be greater than zero.");
        }

        notification.into_result()
    }
}
