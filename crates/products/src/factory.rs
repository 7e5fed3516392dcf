use shop_core::DomainResult;

use crate::product::{Product, ProductId};

/// Builds products with freshly generated identifiers.
pub struct ProductFactory;

impl ProductFactory {
    pub fn create(name: impl Into<String>, price: f64) -> DomainResult<Product> {
        Product::new(ProductId::generate(), name, price)
    }
}
