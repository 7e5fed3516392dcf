use chrono::{DateTime, Utc};
use serde::Serialize;

use shop_events::{DomainEvent, Event, EventKind};

use crate::address::Address;
use crate::customer::{Customer, CustomerId};

/// Snapshot carried by [`CustomerEvent::AddressChanged`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerAddressChanged {
    pub id: CustomerId,
    pub name: String,
    pub address: Address,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CustomerEventKind {
    Created,
    AddressChanged,
}

impl EventKind for CustomerEventKind {
    fn name(&self) -> &'static str {
        match self {
            CustomerEventKind::Created => "customers.customer.created",
            CustomerEventKind::AddressChanged => "customers.customer.address_changed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CustomerEvent {
    /// A customer was created; carries the full customer snapshot.
    Created(DomainEvent<Customer>),
    AddressChanged(DomainEvent<CustomerAddressChanged>),
}

impl CustomerEvent {
    pub fn created(customer: &Customer) -> Self {
        CustomerEvent::Created(DomainEvent::new(customer.clone()))
    }

    /// `None` when the customer has no address to announce.
    pub fn address_changed(customer: &Customer) -> Option<Self> {
        use shop_core::Entity;

        let address = customer.address()?.clone();
        Some(CustomerEvent::AddressChanged(DomainEvent::new(
            CustomerAddressChanged {
                id: customer.id().clone(),
                name: customer.name().to_owned(),
                address,
            },
        )))
    }
}

impl Event for CustomerEvent {
    type Kind = CustomerEventKind;

    fn kind(&self) -> CustomerEventKind {
        match self {
            CustomerEvent::Created(_) => CustomerEventKind::Created,
            CustomerEvent::AddressChanged(_) => CustomerEventKind::AddressChanged,
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CustomerEvent::Created(e) => e.occurred_at(),
            CustomerEvent::AddressChanged(e) => e.occurred_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_event_snapshots_the_customer() {
        let customer = Customer::new("c1", "Customer 1").unwrap();
        let event = CustomerEvent::created(&customer);

        assert_eq!(event.kind(), CustomerEventKind::Created);
        match &event {
            CustomerEvent::Created(e) => assert_eq!(e.event_data(), &customer),
            other => panic!("expected Created, got {other:?}"),
        }
        assert!(event.occurred_at() <= Utc::now());
    }

    #[test]
    fn snapshot_is_unaffected_by_later_mutation() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        let event = CustomerEvent::created(&customer);

        customer.change_name("Renamed").unwrap();

        let CustomerEvent::Created(e) = event else {
            panic!("expected Created");
        };
        assert_eq!(e.event_data().name(), "Customer 1");
    }

    #[test]
    fn address_changed_requires_an_address() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        assert!(CustomerEvent::address_changed(&customer).is_none());

        let address = Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap();
        customer.change_address(address.clone());
        let event = CustomerEvent::address_changed(&customer).unwrap();

        assert_eq!(event.kind(), CustomerEventKind::AddressChanged);
        let CustomerEvent::AddressChanged(e) = event else {
            panic!("expected AddressChanged");
        };
        assert_eq!(e.event_data().id.as_str(), "c1");
        assert_eq!(e.event_data().name, "Customer 1");
        assert_eq!(e.event_data().address, address);
    }

    #[test]
    fn kinds_have_stable_names() {
        assert_eq!(CustomerEventKind::Created.name(), "customers.customer.created");
        assert_eq!(
            CustomerEventKind::AddressChanged.name(),
            "customers.customer.address_changed"
        );
    }
}
