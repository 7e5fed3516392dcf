//! Application-wide event family and its default handler wiring.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use shop_customers::{
    CustomerEvent, CustomerEventKind, LogWhenCustomerAddressIsChanged,
    LogWhenCustomerIsCreated1, LogWhenCustomerIsCreated2,
};
use shop_events::{Event, EventDispatcher, EventKind, Narrow};
use shop_products::{ProductEvent, ProductEventKind, SendEmailWhenProductIsCreated};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ShopEventKind {
    Customer(CustomerEventKind),
    Product(ProductEventKind),
}

impl EventKind for ShopEventKind {
    fn name(&self) -> &'static str {
        match self {
            ShopEventKind::Customer(kind) => kind.name(),
            ShopEventKind::Product(kind) => kind.name(),
        }
    }
}

impl From<CustomerEventKind> for ShopEventKind {
    fn from(kind: CustomerEventKind) -> Self {
        ShopEventKind::Customer(kind)
    }
}

impl From<ProductEventKind> for ShopEventKind {
    fn from(kind: ProductEventKind) -> Self {
        ShopEventKind::Product(kind)
    }
}

/// Every event published inside the shop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ShopEvent {
    Customer(CustomerEvent),
    Product(ProductEvent),
}

impl Event for ShopEvent {
    type Kind = ShopEventKind;

    fn kind(&self) -> ShopEventKind {
        match self {
            ShopEvent::Customer(e) => ShopEventKind::Customer(e.kind()),
            ShopEvent::Product(e) => ShopEventKind::Product(e.kind()),
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ShopEvent::Customer(e) => e.occurred_at(),
            ShopEvent::Product(e) => e.occurred_at(),
        }
    }
}

impl From<CustomerEvent> for ShopEvent {
    fn from(event: CustomerEvent) -> Self {
        ShopEvent::Customer(event)
    }
}

impl From<ProductEvent> for ShopEvent {
    fn from(event: ProductEvent) -> Self {
        ShopEvent::Product(event)
    }
}

impl Narrow<CustomerEvent> for ShopEvent {
    fn narrow(&self) -> Option<&CustomerEvent> {
        match self {
            ShopEvent::Customer(e) => Some(e),
            _ => None,
        }
    }
}

impl Narrow<ProductEvent> for ShopEvent {
    fn narrow(&self) -> Option<&ProductEvent> {
        match self {
            ShopEvent::Product(e) => Some(e),
            _ => None,
        }
    }
}

/// Dispatcher with every shipped handler registered, in this order:
///
/// - customer created: `LogWhenCustomerIsCreated1`, then `LogWhenCustomerIsCreated2`
/// - customer address changed: `LogWhenCustomerAddressIsChanged`
/// - product created: `SendEmailWhenProductIsCreated`
pub fn default_dispatcher() -> EventDispatcher<ShopEvent> {
    let mut dispatcher = EventDispatcher::<ShopEvent>::new();

    dispatcher.register(
        CustomerEventKind::Created.into(),
        Arc::new(LogWhenCustomerIsCreated1),
    );
    dispatcher.register(
        CustomerEventKind::Created.into(),
        Arc::new(LogWhenCustomerIsCreated2),
    );
    dispatcher.register(
        CustomerEventKind::AddressChanged.into(),
        Arc::new(LogWhenCustomerAddressIsChanged),
    );
    dispatcher.register(
        ProductEventKind::Created.into(),
        Arc::new(SendEmailWhenProductIsCreated),
    );

    tracing::debug!(?dispatcher, "default dispatcher wired");
    dispatcher
}

#[cfg(test)]
mod tests {
    use shop_customers::Customer;
    use shop_products::{Product, ProductCreated};

    use super::*;

    #[test]
    fn kind_names_pass_through() {
        let kind: ShopEventKind = CustomerEventKind::AddressChanged.into();
        assert_eq!(kind.name(), "customers.customer.address_changed");

        let kind: ShopEventKind = ProductEventKind::Created.into();
        assert_eq!(kind.name(), "products.product.created");
    }

    #[test]
    fn narrowing_only_yields_the_wrapped_family() {
        let customer = Customer::new("c1", "Customer 1").unwrap();
        let event = ShopEvent::from(CustomerEvent::created(&customer));

        assert!(Narrow::<CustomerEvent>::narrow(&event).is_some());
        assert!(Narrow::<ProductEvent>::narrow(&event).is_none());
        assert_eq!(event.kind(), ShopEventKind::Customer(CustomerEventKind::Created));
    }

    #[test]
    fn default_dispatcher_registers_every_handler() {
        let dispatcher = default_dispatcher();

        let count = |kind: ShopEventKind| dispatcher.handlers(kind).map_or(0, <[_]>::len);
        assert_eq!(count(CustomerEventKind::Created.into()), 2);
        assert_eq!(count(CustomerEventKind::AddressChanged.into()), 1);
        assert_eq!(count(ProductEventKind::Created.into()), 1);
        assert_eq!(dispatcher.event_handlers().len(), 3);
    }

    #[test]
    fn default_dispatcher_accepts_both_families() {
        let dispatcher = default_dispatcher();
        let customer = Customer::new("c1", "Customer 1").unwrap();
        let product = Product::new("p1", "Product 1", 10.0).unwrap();

        dispatcher
            .notify(&CustomerEvent::created(&customer).into())
            .unwrap();
        dispatcher
            .notify(&ProductEvent::created(ProductCreated::from_product(&product, "desc")).into())
            .unwrap();
    }
}
