//! Walks through the shop flow against the in-memory adapters, with logging on.
//!
//! `SHOP_LOG_FORMAT=pretty cargo run -p shop-infra --bin shop-demo`

use anyhow::Context;

use shop_core::{Entity, Repository};
use shop_customers::{Address, CustomerService};
use shop_infra::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
    default_dispatcher,
};
use shop_products::{ProductCreated, ProductEvent, ProductFactory};
use shop_sales::{OrderItem, OrderService};

fn main() -> anyhow::Result<()> {
    shop_observability::init();

    let dispatcher = default_dispatcher();
    let customers = CustomerService::new(InMemoryCustomerRepository::new());
    let products = InMemoryProductRepository::new();
    let orders = InMemoryOrderRepository::new();

    let customer = customers.create(&dispatcher, "c1", "Customer 1")?;
    let address = Address::new("Street 1", 123, "13330-250", "São Paulo")?;
    let mut customer = customers.change_address(&dispatcher, customer.id(), address)?;
    customer.activate()?;
    customers.repository().update(&customer)?;

    let keyboard = ProductFactory::create("Keyboard", 49.9)?;
    products.create(&keyboard)?;
    dispatcher.notify(
        &ProductEvent::created(ProductCreated::from_product(&keyboard, "Mechanical keyboard"))
            .into(),
    )?;

    let items = vec![OrderItem::new(
        "i1",
        keyboard.name(),
        keyboard.price(),
        keyboard.id().clone(),
        2,
    )];
    let order = OrderService::place_order(&mut customer, items)?;
    orders.create(&order)?;
    customers.repository().update(&customer)?;

    let stored = customers
        .repository()
        .find_model(customer.id())
        .context("customer vanished after update")?;
    println!("{}", serde_json::to_string_pretty(&stored)?);
    println!("{}", serde_json::to_string_pretty(&orders.find_model(order.id())?)?);
    tracing::info!(
        orders = orders.find_all()?.len(),
        revenue = OrderService::total(&orders.find_all()?),
        "demo finished"
    );
    Ok(())
}
