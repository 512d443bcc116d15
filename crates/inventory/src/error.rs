//! Inventory coordinator error types.

use bus::BusError;
use common::OrderId;
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during inventory operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The product store failed.
    #[error("inventory persistence failed: {0}")]
    Store(#[from] StoreError),

    /// The `order_processed` answer could not be published; the order's
    /// saga stalls until operational intervention.
    #[error("failed to publish order_processed for order {order_id}: {source}")]
    Publish {
        order_id: OrderId,
        #[source]
        source: BusError,
    },
}
