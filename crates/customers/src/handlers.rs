//! Reactions to customer events.
//!
//! These handlers only log. Each exposes the line it writes so callers (and
//! tests) can check the output without capturing the subscriber.

use shop_core::Entity;
use shop_events::{Event, EventHandler, HandlerError, Narrow};

use crate::events::{CustomerAddressChanged, CustomerEvent};

/// First reaction to [`CustomerEvent::Created`].
#[derive(Debug, Default)]
pub struct LogWhenCustomerIsCreated1;

impl LogWhenCustomerIsCreated1 {
    pub fn render(&self) -> String {
        "This is the first console.log of event: CustomerCreated".to_string()
    }
}

impl<E> EventHandler<E> for LogWhenCustomerIsCreated1
where
    E: Event + Narrow<CustomerEvent>,
{
    fn handle(&self, event: &E) -> anyhow::Result<()> {
        let Some(CustomerEvent::Created(created)) = <E as Narrow<CustomerEvent>>::narrow(event)
        else {
            return Err(HandlerError::unexpected("LogWhenCustomerIsCreated1", event).into());
        };

        let customer = created.event_data();
        tracing::info!(customer_id = %customer.id(), "{}", self.render());
        Ok(())
    }
}

/// Second reaction to [`CustomerEvent::Created`].
#[derive(Debug, Default)]
pub struct LogWhenCustomerIsCreated2;

impl LogWhenCustomerIsCreated2 {
    pub fn render(&self) -> String {
        "This is the second console.log of event: CustomerCreated".to_string()
    }
}

impl<E> EventHandler<E> for LogWhenCustomerIsCreated2
where
    E: Event + Narrow<CustomerEvent>,
{
    fn handle(&self, event: &E) -> anyhow::Result<()> {
        let Some(CustomerEvent::Created(created)) = <E as Narrow<CustomerEvent>>::narrow(event)
        else {
            return Err(HandlerError::unexpected("LogWhenCustomerIsCreated2", event).into());
        };

        let customer = created.event_data();
        tracing::info!(customer_id = %customer.id(), "{}", self.render());
        Ok(())
    }
}

/// Logs the new address of a customer.
#[derive(Debug, Default)]
pub struct LogWhenCustomerAddressIsChanged;

impl LogWhenCustomerAddressIsChanged {
    pub fn render(&self, changed: &CustomerAddressChanged) -> String {
        let address = &changed.address;
        format!(
            "Customer address: {}, {} changed to: {}, {}, {}, {}",
            changed.id,
            changed.name,
            address.street(),
            address.number(),
            address.zipcode(),
            address.city()
        )
    }
}

impl<E> EventHandler<E> for LogWhenCustomerAddressIsChanged
where
    E: Event + Narrow<CustomerEvent>,
{
    fn handle(&self, event: &E) -> anyhow::Result<()> {
        let Some(CustomerEvent::AddressChanged(changed)) =
            <E as Narrow<CustomerEvent>>::narrow(event)
        else {
            return Err(HandlerError::unexpected("LogWhenCustomerAddressIsChanged", event).into());
        };

        tracing::info!(
            customer_id = %changed.event_data().id,
            "{}",
            self.render(changed.event_data())
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Address, Customer};

    fn customer_with_address() -> Customer {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        customer.change_address(Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap());
        customer
    }

    #[test]
    fn created_handlers_render_their_lines() {
        assert_eq!(
            LogWhenCustomerIsCreated1.render(),
            "This is the first console.log of event: CustomerCreated"
        );
        assert_eq!(
            LogWhenCustomerIsCreated2.render(),
            "This is the second console.log of event: CustomerCreated"
        );
    }

    #[test]
    fn created_handlers_accept_created_events() {
        let customer = Customer::new("c1", "Customer 1").unwrap();
        let event = CustomerEvent::created(&customer);

        EventHandler::<CustomerEvent>::handle(&LogWhenCustomerIsCreated1, &event).unwrap();
        EventHandler::<CustomerEvent>::handle(&LogWhenCustomerIsCreated2, &event).unwrap();
    }

    #[test]
    fn address_handler_renders_the_new_address() {
        let customer = customer_with_address();
        let event = CustomerEvent::address_changed(&customer).unwrap();
        let CustomerEvent::AddressChanged(changed) = &event else {
            panic!("expected AddressChanged");
        };

        assert_eq!(
            LogWhenCustomerAddressIsChanged.render(changed.event_data()),
            "Customer address: c1, Customer 1 changed to: Street 1, 1, Zipcode 1, City 1"
        );
        EventHandler::<CustomerEvent>::handle(&LogWhenCustomerAddressIsChanged, &event).unwrap();
    }

    #[test]
    fn handlers_reject_other_kinds() {
        let customer = customer_with_address();
        let created = CustomerEvent::created(&customer);

        let err =
            EventHandler::<CustomerEvent>::handle(&LogWhenCustomerAddressIsChanged, &created)
                .unwrap_err();

        assert_eq!(
            err.downcast_ref::<HandlerError>(),
            Some(&HandlerError::UnexpectedEvent {
                handler: "LogWhenCustomerAddressIsChanged",
                kind: "customers.customer.created",
            })
        );
    }
}
