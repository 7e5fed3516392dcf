//! Row models mirroring the relational schema.
//!
//! Rows are plain serde records; converting a row back into an entity runs the
//! entity's validation, so corrupted rows surface as
//! [`RepositoryError::Rehydration`](crate::RepositoryError::Rehydration).

use serde::{Deserialize, Serialize};

use shop_core::{DomainResult, Entity};
use shop_customers::{Address, Customer};
use shop_products::Product;
use shop_sales::{Order, OrderItem};

use crate::table::Row;

/// `customers` row. Address columns are null when the customer has no address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerModel {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub reward_points: u64,
    pub street: Option<String>,
    pub number: Option<u32>,
    pub zipcode: Option<String>,
    pub city: Option<String>,
}

impl CustomerModel {
    pub fn from_entity(customer: &Customer) -> Self {
        let address = customer.address();
        Self {
            id: customer.id().to_string(),
            name: customer.name().to_owned(),
            active: customer.is_active(),
            reward_points: customer.reward_points(),
            street: address.map(|a| a.street().to_owned()),
            number: address.map(Address::number),
            zipcode: address.map(|a| a.zipcode().to_owned()),
            city: address.map(|a| a.city().to_owned()),
        }
    }

    pub fn into_entity(self) -> DomainResult<Customer> {
        let address = match (self.street, self.number, self.zipcode, self.city) {
            (Some(street), Some(number), Some(zipcode), Some(city)) => {
                Some(Address::new(street, number, zipcode, city)?)
            }
            _ => None,
        };
        Customer::restore(
            self.id,
            self.name,
            address,
            self.active,
            self.reward_points,
        )
    }
}

impl Row for CustomerModel {
    type Key = String;
    const TABLE: &'static str = "customers";
    const ENTITY: &'static str = Customer::NAME;

    fn key(&self) -> &String {
        &self.id
    }
}

/// `products` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductModel {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl ProductModel {
    pub fn from_entity(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_owned(),
            price: product.price(),
        }
    }

    pub fn into_entity(self) -> DomainResult<Product> {
        Product::new(self.id, self.name, self.price)
    }
}

impl Row for ProductModel {
    type Key = String;
    const TABLE: &'static str = "products";
    const ENTITY: &'static str = Product::NAME;

    fn key(&self) -> &String {
        &self.id
    }
}

/// `order_items` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemModel {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub product_id: String,
    pub quantity: u32,
    pub order_id: String,
}

impl OrderItemModel {
    pub fn from_entity(item: &OrderItem, order_id: &str) -> Self {
        Self {
            id: item.id().to_string(),
            name: item.name().to_owned(),
            price: item.price(),
            product_id: item.product_id().to_string(),
            quantity: item.quantity(),
            order_id: order_id.to_owned(),
        }
    }

    pub fn into_entity(self) -> OrderItem {
        OrderItem::new(self.id, self.name, self.price, self.product_id, self.quantity)
    }
}

/// `orders` row together with its `order_items`.
///
/// `total` is denormalized at write time; the entity always recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderModel {
    pub id: String,
    pub customer_id: String,
    pub total: f64,
    pub items: Vec<OrderItemModel>,
}

impl OrderModel {
    pub fn from_entity(order: &Order) -> Self {
        let id = order.id().to_string();
        let items = order
            .items()
            .iter()
            .map(|item| OrderItemModel::from_entity(item, &id))
            .collect();
        Self {
            customer_id: order.customer_id().to_string(),
            total: order.total(),
            items,
            id,
        }
    }

    pub fn into_entity(self) -> DomainResult<Order> {
        let items = self
            .items
            .into_iter()
            .map(OrderItemModel::into_entity)
            .collect();
        Order::new(self.id, self.customer_id, items)
    }
}

impl Row for OrderModel {
    type Key = String;
    const TABLE: &'static str = "orders";
    const ENTITY: &'static str = Order::NAME;

    fn key(&self) -> &String {
        &self.id
    }
}
