//! Customer use cases: persist, then announce.

use anyhow::Context;

use shop_core::{Entity, Repository};
use shop_events::{Event, EventDispatcher};

use crate::address::Address;
use crate::customer::{Customer, CustomerId};
use crate::events::CustomerEvent;

/// Application service for customers.
///
/// The dispatcher is injected per call so the same service can publish to a
/// module-local dispatcher or an application-wide one.
pub struct CustomerService<R> {
    repository: R,
}

impl<R> CustomerService<R>
where
    R: Repository<Customer>,
    R::Error: std::error::Error,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Create and persist a customer, then publish [`CustomerEvent::Created`].
    pub fn create<E>(
        &self,
        dispatcher: &EventDispatcher<E>,
        id: impl Into<CustomerId>,
        name: impl Into<String>,
    ) -> anyhow::Result<Customer>
    where
        E: Event + From<CustomerEvent>,
    {
        let customer = Customer::new(id, name)?;
        self.repository.create(&customer)?;

        tracing::info!(customer_id = %customer.id(), "customer created");
        dispatcher.notify(&E::from(CustomerEvent::created(&customer)))?;
        Ok(customer)
    }

    /// Move a persisted customer to `address`, then publish
    /// [`CustomerEvent::AddressChanged`].
    pub fn change_address<E>(
        &self,
        dispatcher: &EventDispatcher<E>,
        id: &CustomerId,
        address: Address,
    ) -> anyhow::Result<Customer>
    where
        E: Event + From<CustomerEvent>,
    {
        let mut customer = self.repository.find(id)?;
        customer.change_address(address);
        self.repository.update(&customer)?;

        let event = CustomerEvent::address_changed(&customer)
            .context("address missing right after it was set")?;
        tracing::info!(customer_id = %id, "customer address changed");
        dispatcher.notify(&E::from(event))?;
        Ok(customer)
    }
}
