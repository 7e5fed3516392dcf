use shop_core::{Entity, Repository};
use shop_sales::{Order, OrderId};

use crate::error::RepositoryError;
use crate::models::OrderModel;
use crate::table::Table;

/// In-memory `orders` table; each row carries its `order_items`.
///
/// `update` rewrites the item set: items still on the order are upserted by id,
/// items no longer on it are dropped.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    table: Table<OrderModel>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_model(&self, id: &OrderId) -> Result<OrderModel, RepositoryError> {
        self.table.get(&id.to_string())
    }
}

impl Repository<Order> for InMemoryOrderRepository {
    type Error = RepositoryError;

    fn create(&self, order: &Order) -> Result<(), RepositoryError> {
        self.table.insert(OrderModel::from_entity(order))?;
        tracing::info!(order_id = %order.id(), items = order.items().len(), "order stored");
        Ok(())
    }

    fn update(&self, order: &Order) -> Result<(), RepositoryError> {
        self.table.replace(OrderModel::from_entity(order))?;
        tracing::info!(order_id = %order.id(), items = order.items().len(), "order updated");
        Ok(())
    }

    fn find(&self, id: &OrderId) -> Result<Order, RepositoryError> {
        Ok(self.find_model(id)?.into_entity()?)
    }

    fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
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
    use shop_sales::OrderItem;

    use super::*;

    fn order_with(items: Vec<OrderItem>) -> Order {
        Order::new("123", "123", items).unwrap()
    }

    #[test]
    fn create_stores_order_and_items() {
        let repo = InMemoryOrderRepository::new();
        let item = OrderItem::new("1", "Product 1", 10.0, "123", 2);
        let order = order_with(vec![item]);

        repo.create(&order).unwrap();

        assert_eq!(
            serde_json::to_value(repo.find_model(order.id()).unwrap()).unwrap(),
            json!({
                "id": "123",
                "customer_id": "123",
                "total": 20.0,
                "items": [{
                    "id": "1",
                    "name": "Product 1",
                    "price": 10.0,
                    "quantity": 2,
                    "order_id": "123",
                    "product_id": "123",
                }],
            })
        );
    }

    #[test]
    fn update_upserts_items_and_drops_stale_ones() {
        let repo = InMemoryOrderRepository::new();
        let item1 = OrderItem::new("1", "Product 1", 10.0, "p1", 2);
        let item2 = OrderItem::new("2", "Product 2", 20.0, "p2", 1);
        let mut order = order_with(vec![item1, item2]);
        repo.create(&order).unwrap();

        let item1_more = OrderItem::new("1", "Product 1", 10.0, "p1", 5);
        let item3 = OrderItem::new("3", "Product 3", 1.5, "p3", 4);
        order = Order::new("123", "123", vec![item1_more, item3]).unwrap();
        repo.update(&order).unwrap();

        let found = repo.find(order.id()).unwrap();
        assert_eq!(found, order);
        let ids: Vec<_> = found.items().iter().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(repo.find_model(order.id()).unwrap().total, 56.0);
    }

    #[test]
    fn added_item_is_persisted_on_update() {
        let repo = InMemoryOrderRepository::new();
        let mut order = order_with(vec![OrderItem::new("1", "Product 1", 10.0, "p1", 1)]);
        repo.create(&order).unwrap();

        order
            .add_item(OrderItem::new("2", "Product 2", 5.0, "p2", 2))
            .unwrap();
        repo.update(&order).unwrap();

        assert_eq!(repo.find(order.id()).unwrap().total(), 20.0);
    }

    #[test]
    fn find_missing_order_is_not_found() {
        let repo = InMemoryOrderRepository::new();

        let err = repo.find(&OrderId::from("nope")).unwrap_err();

        assert_eq!(err.to_string(), "Order not found.");
    }

    #[test]
    fn find_all_returns_every_order() {
        let repo = InMemoryOrderRepository::new();
        let order1 = Order::new("o1", "c1", vec![OrderItem::new("1", "A", 1.0, "p1", 1)]).unwrap();
        let order2 = Order::new("o2", "c1", vec![OrderItem::new("2", "B", 2.0, "p2", 1)]).unwrap();
        repo.create(&order1).unwrap();
        repo.create(&order2).unwrap();

        assert_eq!(repo.find_all().unwrap(), vec![order1, order2]);
    }
}
