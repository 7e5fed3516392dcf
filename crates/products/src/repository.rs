use shop_core::Repository;

use crate::product::Product;

/// Persistence contract for products.
///
/// `find` must report a missing product as `"Product not found."`.
pub trait ProductRepository: Repository<Product> {}

impl<R> ProductRepository for R where R: Repository<Product> {}
