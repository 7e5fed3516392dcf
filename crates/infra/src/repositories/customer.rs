use shop_core::{Entity, Repository};
use shop_customers::{Customer, CustomerId};

use crate::error::RepositoryError;
use crate::models::CustomerModel;
use crate::table::Table;

/// In-memory `customers` table.
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    table: Table<CustomerModel>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored row, as it would be read back from the database.
    pub fn find_model(&self, id: &CustomerId) -> Result<CustomerModel, RepositoryError> {
        self.table.get(&id.to_string())
    }
}

impl Repository<Customer> for InMemoryCustomerRepository {
    type Error = RepositoryError;

    fn create(&self, customer: &Customer) -> Result<(), RepositoryError> {
        self.table.insert(CustomerModel::from_entity(customer))?;
        tracing::info!(customer_id = %customer.id(), "customer stored");
        Ok(())
    }

    fn update(&self, customer: &Customer) -> Result<(), RepositoryError> {
        self.table.replace(CustomerModel::from_entity(customer))?;
        tracing::info!(customer_id = %customer.id(), "customer updated");
        Ok(())
    }

    fn find(&self, id: &CustomerId) -> Result<Customer, RepositoryError> {
        Ok(self.find_model(id)?.into_entity()?)
    }

    fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
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
    use shop_customers::Address;

    use super::*;

    fn address() -> Address {
        Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap()
    }

    #[test]
    fn create_stores_every_column() {
        let repo = InMemoryCustomerRepository::new();
        let mut customer = Customer::new("123", "Customer 1").unwrap();
        customer.change_address(address());

        repo.create(&customer).unwrap();

        let model = repo.find_model(customer.id()).unwrap();
        assert_eq!(
            serde_json::to_value(&model).unwrap(),
            json!({
                "id": "123",
                "name": "Customer 1",
                "active": false,
                "reward_points": 0,
                "street": "Street 1",
                "number": 1,
                "zipcode": "Zipcode 1",
                "city": "City 1",
            })
        );
    }

    #[test]
    fn update_overwrites_the_row() {
        let repo = InMemoryCustomerRepository::new();
        let mut customer = Customer::new("123", "Customer 1").unwrap();
        customer.change_address(address());
        repo.create(&customer).unwrap();

        customer.change_name("Customer 2").unwrap();
        customer.activate().unwrap();
        customer.add_reward_points(10);
        repo.update(&customer).unwrap();

        let model = repo.find_model(customer.id()).unwrap();
        assert_eq!(model.name, "Customer 2");
        assert!(model.active);
        assert_eq!(model.reward_points, 10);
    }

    #[test]
    fn find_rehydrates_an_equal_customer() {
        let repo = InMemoryCustomerRepository::new();
        let mut customer = Customer::new("123", "Customer 1").unwrap();
        customer.change_address(address());
        customer.activate().unwrap();
        repo.create(&customer).unwrap();

        assert_eq!(repo.find(customer.id()).unwrap(), customer);
    }

    #[test]
    fn find_missing_customer_is_not_found() {
        let repo = InMemoryCustomerRepository::new();

        let err = repo.find(&CustomerId::from("456ABC")).unwrap_err();

        assert_eq!(err.to_string(), "Customer not found.");
    }

    #[test]
    fn update_missing_customer_is_not_found() {
        let repo = InMemoryCustomerRepository::new();
        let customer = Customer::new("123", "Customer 1").unwrap();

        assert!(repo.update(&customer).unwrap_err().is_not_found());
    }

    #[test]
    fn duplicate_create_is_rejected() {
        let repo = InMemoryCustomerRepository::new();
        let customer = Customer::new("123", "Customer 1").unwrap();
        repo.create(&customer).unwrap();

        let err = repo.create(&customer).unwrap_err();

        assert!(matches!(err, RepositoryError::DuplicateKey { table: "customers", .. }));
    }

    #[test]
    fn find_all_returns_customers_in_insertion_order() {
        let repo = InMemoryCustomerRepository::new();
        let mut customer1 = Customer::new("123", "Customer 1").unwrap();
        customer1.change_address(address());
        customer1.add_reward_points(10);
        customer1.activate().unwrap();
        let mut customer2 = Customer::new("456", "Customer 2").unwrap();
        customer2.change_address(Address::new("Street 2", 2, "Zipcode 2", "City 2").unwrap());
        customer2.add_reward_points(20);

        repo.create(&customer1).unwrap();
        repo.create(&customer2).unwrap();

        assert_eq!(repo.find_all().unwrap(), vec![customer1, customer2]);
    }
}
