//! Order-side saga coordinator.

use bus::EventBus;
use domain::{ORDER_CREATED_TOPIC, Order, OrderCreated, OrderProcessed, OrderStatus, ValidatedOrder};

use crate::error::OrderError;
use crate::store::OrderStore;

/// Accepts order-creation requests and finalizes order status from the
/// inventory decision.
///
/// `create` persists first and publishes second; the two are not atomic.
/// If the publish fails after a successful write, the order stays in
/// `created` indefinitely: there is no retry and no reconciliation
/// sweep, only an error log and the `orders_stalled_total` counter.
pub struct OrderCoordinator<S: OrderStore> {
    store: S,
    bus: EventBus,
}

impl<S: OrderStore> OrderCoordinator<S> {
    /// Creates a new coordinator over the given store and bus.
    pub fn new(store: S, bus: EventBus) -> Self {
        Self { store, bus }
    }

    /// Persists a new order and announces it on `order_created`.
    ///
    /// Inputs are pre-validated. Returns the persisted order; with the
    /// bus dispatching synchronously, the saga has settled by the time
    /// this returns.
    #[tracing::instrument(skip(self, order), fields(product_id = %order.product_id, quantity = order.quantity))]
    pub async fn create(&self, order: ValidatedOrder) -> Result<Order, OrderError> {
        let order = self.store.create(order.product_id, order.quantity).await?;

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(order_id = %order.id, "order created");

        let event = OrderCreated {
            order_id: order.id,
            product_id: order.product_id.clone(),
            quantity: order.quantity,
        };
        if let Err(err) = self.bus.publish(ORDER_CREATED_TOPIC, &event).await {
            metrics::counter!("orders_stalled_total").increment(1);
            tracing::error!(
                order_id = %order.id,
                error = %err,
                "order_created publish failed; order stalled in created"
            );
        }

        // Re-read so the caller observes any status written while the
        // event was dispatched.
        let settled = self.store.find_by_id(order.id).await?.unwrap_or(order);
        Ok(settled)
    }

    /// Returns every order.
    #[tracing::instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self.store.find_all().await?)
    }

    /// Applies the inventory decision carried by an `order_processed`
    /// event.
    ///
    /// The referenced order must exist. Re-applying an identical payload
    /// rewrites the same terminal value; a conflicting terminal status is
    /// rejected.
    #[tracing::instrument(skip(self), fields(order_id = %event.order_id, status = %event.status))]
    pub async fn handle_order_processed(&self, event: OrderProcessed) -> Result<Order, OrderError> {
        let order = self
            .store
            .find_by_id(event.order_id)
            .await?
            .ok_or(OrderError::NotFound(event.order_id))?;

        let next = OrderStatus::from(event.status);
        if !order.status.can_transition_to(next) {
            return Err(OrderError::InvalidTransition {
                id: order.id,
                from: order.status,
                to: next,
            });
        }

        let updated = self
            .store
            .update_status(order.id, next)
            .await?
            .ok_or(OrderError::NotFound(event.order_id))?;

        match next {
            OrderStatus::Confirmed => metrics::counter!("orders_confirmed_total").increment(1),
            OrderStatus::Cancelled => metrics::counter!("orders_cancelled_total").increment(1),
            OrderStatus::Created => {}
        }
        tracing::info!(order_id = %updated.id, status = %updated.status, "order settled");

        Ok(updated)
    }
}
