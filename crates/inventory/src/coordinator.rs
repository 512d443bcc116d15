//! Inventory-side saga coordinator.

use bus::EventBus;
use domain::{
    ORDER_PROCESSED_TOPIC, OrderCreated, OrderProcessed, ProcessingOutcome, Product, ProductId,
};

use crate::error::InventoryError;
use crate::locks::ProductLocks;
use crate::store::ProductStore;

/// Applies the stock decision for each created order and answers with
/// `order_processed`.
pub struct InventoryCoordinator<S: ProductStore> {
    store: S,
    bus: EventBus,
    locks: ProductLocks,
}

impl<S: ProductStore> InventoryCoordinator<S> {
    /// Creates a new coordinator over the given store and bus.
    pub fn new(store: S, bus: EventBus) -> Self {
        Self {
            store,
            bus,
            locks: ProductLocks::new(),
        }
    }

    /// Returns every product.
    #[tracing::instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Product>, InventoryError> {
        Ok(self.store.find_all().await?)
    }

    /// Decides confirm/cancel for one created order.
    ///
    /// The read-decide-write runs under the per-product lock, so
    /// concurrent orders against one product are strictly ordered and
    /// stock can never be oversold. Whatever the decision, exactly one
    /// `order_processed` is published for the consumed event.
    #[tracing::instrument(skip(self, event), fields(order_id = %event.order_id, product_id = %event.product_id))]
    pub async fn adjust_stock_for_order(
        &self,
        event: OrderCreated,
    ) -> Result<ProcessingOutcome, InventoryError> {
        let guard = self.locks.acquire(&event.product_id).await;

        let outcome = match self.store.find_by_id(&event.product_id).await? {
            Some(mut product) if product.stock >= event.quantity => {
                product.stock -= event.quantity;
                let remaining = product.stock;
                self.store.save(product).await?;
                tracing::info!(remaining, deducted = event.quantity, "stock deducted");
                ProcessingOutcome::Confirmed
            }
            Some(product) => {
                tracing::info!(
                    stock = product.stock,
                    requested = event.quantity,
                    "insufficient stock"
                );
                ProcessingOutcome::Cancelled
            }
            None => {
                tracing::info!("product not in catalog");
                ProcessingOutcome::Cancelled
            }
        };

        // Stock is committed; the answer need not hold the key.
        drop(guard);

        let processed = OrderProcessed {
            order_id: event.order_id,
            status: outcome,
        };
        self.bus
            .publish(ORDER_PROCESSED_TOPIC, &processed)
            .await
            .map_err(|source| InventoryError::Publish {
                order_id: event.order_id,
                source,
            })?;

        match outcome {
            ProcessingOutcome::Confirmed => {
                metrics::counter!("stock_adjustments_confirmed_total").increment(1);
            }
            ProcessingOutcome::Cancelled => {
                metrics::counter!("stock_adjustments_cancelled_total").increment(1);
            }
        }

        Ok(outcome)
    }

    /// Ensures the initial catalog exists without overwriting entries.
    #[tracing::instrument(skip(self, entries))]
    pub async fn seed_catalog(
        &self,
        entries: &[(ProductId, u32)],
    ) -> Result<(), InventoryError> {
        for (product_id, stock) in entries {
            if self.store.find_by_id(product_id).await?.is_none() {
                self.store
                    .save(Product {
                        product_id: product_id.clone(),
                        stock: *stock,
                    })
                    .await?;
                tracing::info!(%product_id, stock, "seeded catalog entry");
            }
        }
        Ok(())
    }
}

/// The fixed initial catalog.
pub fn default_catalog() -> Vec<(ProductId, u32)> {
    vec![(ProductId::new("1"), 10), (ProductId::new("2"), 5)]
}
