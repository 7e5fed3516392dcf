use shop_core::DomainResult;

use crate::address::Address;
use crate::customer::{Customer, CustomerId};

/// Builds customers with freshly generated identifiers.
pub struct CustomerFactory;

impl CustomerFactory {
    pub fn create(name: impl Into<String>) -> DomainResult<Customer> {
        Customer::new(CustomerId::generate(), name)
    }

    pub fn create_with_address(name: impl Into<String>, address: Address) -> DomainResult<Customer> {
        let mut customer = Self::create(name)?;
        customer.change_address(address);
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_core::{DomainError, Entity};

    #[test]
    fn create_generates_an_id() {
        let customer = CustomerFactory::create("John").unwrap();

        assert!(!customer.id().is_empty());
        assert_eq!(customer.name(), "John");
        assert!(customer.address().is_none());
    }

    #[test]
    fn create_with_address_sets_the_address() {
        let address = Address::new("Street", 1, "13330-250", "São Paulo").unwrap();
        let customer = CustomerFactory::create_with_address("John", address.clone()).unwrap();

        assert_eq!(customer.address(), Some(&address));
    }

    #[test]
    fn create_still_validates_the_name() {
        let err = CustomerFactory::create("").unwrap_err();
        assert_eq!(err, DomainError::validation("Name is required."));
    }
}
