use shop_core::{Entity, Repository};
use shop_products::{Product, ProductId};

use crate::error::RepositoryError;
use crate::models::ProductModel;
use crate::table::Table;

/// In-memory `products` table.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    table: Table<ProductModel>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_model(&self, id: &ProductId) -> Result<ProductModel, RepositoryError> {
        self.table.get(&id.to_string())
    }
}

impl Repository<Product> for InMemoryProductRepository {
    type Error = RepositoryError;

    fn create(&self, product: &Product) -> Result<(), RepositoryError> {
        self.table.insert(ProductModel::from_entity(product))?;
        tracing::info!(product_id = %product.id(), "product stored");
        Ok(())
    }

    fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        self.table.replace(ProductModel::from_entity(product))?;
        tracing::info!(product_id = %product.id(), "product updated");
        Ok(())
    }

    fn find(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        Ok(self.find_model(id)?.into_entity()?)
    }

    fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        self.table
            .all()?
            .into_iter()
            .map(|row| row.into_entity().map_err(RepositoryError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_stores_the_row() {
        let repo = InMemoryProductRepository::new();
        let product = Product::new("1", "Product 1", 100.0).unwrap();

        repo.create(&product).unwrap();

        assert_eq!(
            serde_json::to_value(repo.find_model(product.id()).unwrap()).unwrap(),
            json!({"id": "1", "name": "Product 1", "price": 100.0})
        );
    }

    #[test]
    fn update_overwrites_name_and_price() {
        let repo = InMemoryProductRepository::new();
        let mut product = Product::new("1", "Product 1", 100.0).unwrap();
        repo.create(&product).unwrap();

        product.change_name("Product 2").unwrap();
        product.change_price(200.0).unwrap();
        repo.update(&product).unwrap();

        assert_eq!(repo.find(product.id()).unwrap(), product);
    }

    #[test]
    fn find_missing_product_is_not_found() {
        let repo = InMemoryProductRepository::new();

        let err = repo.find(&ProductId::from("p-404")).unwrap_err();

        assert_eq!(err.to_string(), "Product not found.");
    }

    #[test]
    fn find_all_returns_every_product() {
        let repo = InMemoryProductRepository::new();
        let product1 = Product::new("1", "Product 1", 100.0).unwrap();
        let product2 = Product::new("2", "Product 2", 200.0).unwrap();
        repo.create(&product1).unwrap();
        repo.create(&product2).unwrap();

        assert_eq!(repo.find_all().unwrap(), vec![product1, product2]);
    }
}
