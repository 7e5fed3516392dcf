use chrono::{DateTime, Utc};
use serde::Serialize;

use shop_events::{DomainEvent, Event, EventKind};

use crate::product::Product;

/// Payload of [`ProductEvent::Created`]: a plain record, not the entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCreated {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl ProductCreated {
    pub fn from_product(product: &Product, description: impl Into<String>) -> Self {
        Self {
            name: product.name().to_owned(),
            description: description.into(),
            price: product.price(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ProductEventKind {
    Created,
}

impl EventKind for ProductEventKind {
    fn name(&self) -> &'static str {
        match self {
            ProductEventKind::Created => "products.product.created",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ProductEvent {
    Created(DomainEvent<ProductCreated>),
}

impl ProductEvent {
    pub fn created(payload: ProductCreated) -> Self {
        ProductEvent::Created(DomainEvent::new(payload))
    }
}

impl Event for ProductEvent {
    type Kind = ProductEventKind;

    fn kind(&self) -> ProductEventKind {
        match self {
            ProductEvent::Created(_) => ProductEventKind::Created,
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ProductEvent::Created(e) => e.occurred_at(),
        }
    }
}
