//! Bus subscription for `order_created` events.

use std::sync::Arc;

use async_trait::async_trait;
use bus::{EventHandler, HandlerError};
use domain::OrderCreated;

use crate::coordinator::InventoryCoordinator;
use crate::store::ProductStore;

/// Adapts the inventory coordinator to the bus handler interface.
pub struct OrderCreatedSubscriber<S: ProductStore> {
    coordinator: Arc<InventoryCoordinator<S>>,
}

impl<S: ProductStore> OrderCreatedSubscriber<S> {
    /// Wraps a coordinator for subscription.
    pub fn new(coordinator: Arc<InventoryCoordinator<S>>) -> Self {
        Self { coordinator }
    }
}

#[async_trait]
impl<S: ProductStore + 'static> EventHandler for OrderCreatedSubscriber<S> {
    async fn handle(&self, payload: serde_json::Value) -> Result<(), HandlerError> {
        let event: OrderCreated = serde_json::from_value(payload)?;
        self.coordinator
            .adjust_stock_for_order(event)
            .await
            .map_err(HandlerError::from_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryProductStore;
    use bus::EventBus;
    use common::OrderId;
    use domain::{ORDER_CREATED_TOPIC, Product, ProductId};

    #[tokio::test]
    async fn subscriber_adjusts_stock_from_the_bus() {
        let store = InMemoryProductStore::new();
        let bus = EventBus::new();
        let coordinator = Arc::new(InventoryCoordinator::new(store.clone(), bus.clone()));
        bus.subscribe(
            ORDER_CREATED_TOPIC,
            Arc::new(OrderCreatedSubscriber::new(coordinator)),
        );
        store
            .save(Product {
                product_id: ProductId::new("1"),
                stock: 10,
            })
            .await
            .unwrap();

        bus.publish(
            ORDER_CREATED_TOPIC,
            &OrderCreated {
                order_id: OrderId::new(),
                product_id: ProductId::new("1"),
                quantity: 4,
            },
        )
        .await
        .unwrap();

        assert_eq!(store.stock_of(&ProductId::new("1")).await, Some(6));
    }

    #[tokio::test]
    async fn malformed_payload_is_a_handler_error() {
        let store = InMemoryProductStore::new();
        let bus = EventBus::new();
        let coordinator = Arc::new(InventoryCoordinator::new(store, bus));
        let subscriber = OrderCreatedSubscriber::new(coordinator);

        let result = subscriber.handle(serde_json::json!({"bogus": 1})).await;

        assert!(result.is_err());
    }
}
