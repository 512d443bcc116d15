//! Bus subscription for `order_processed` events.

use std::sync::Arc;

use async_trait::async_trait;
use bus::{EventHandler, HandlerError};
use domain::OrderProcessed;

use crate::coordinator::OrderCoordinator;
use crate::store::OrderStore;

/// Adapts the order coordinator to the bus handler interface.
///
/// Deserializes the payload and applies the decision; any failure is
/// reported to the bus layer, which logs it without failing the
/// producing operation.
pub struct OrderProcessedSubscriber<S: OrderStore> {
    coordinator: Arc<OrderCoordinator<S>>,
}

impl<S: OrderStore> OrderProcessedSubscriber<S> {
    /// Wraps a coordinator for subscription.
    pub fn new(coordinator: Arc<OrderCoordinator<S>>) -> Self {
        Self { coordinator }
    }
}

#[async_trait]
impl<S: OrderStore + 'static> EventHandler for OrderProcessedSubscriber<S> {
    async fn handle(&self, payload: serde_json::Value) -> Result<(), HandlerError> {
        let event: OrderProcessed = serde_json::from_value(payload)?;
        self.coordinator
            .handle_order_processed(event)
            .await
            .map_err(HandlerError::from_err)?;
        Ok(())
    }
}
