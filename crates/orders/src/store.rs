//! Order store contract.

use async_trait::async_trait;
use common::OrderId;
use domain::{Order, OrderStatus, ProductId};
use thiserror::Error;

/// Errors raised by an order store implementation.
///
/// Callers treat these as opaque persistence failures; the underlying
/// cause is retained for diagnostics only and never leaked to clients.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A read against the store failed.
    #[error("order store read failed: {0}")]
    ReadFailed(String),

    /// A write against the store failed.
    #[error("order store write failed: {0}")]
    WriteFailed(String),
}

/// Persistence interface for the order aggregate.
///
/// The coordinator owns the store; no other component writes orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists a new order with a store-assigned ID and `created` status.
    async fn create(&self, product_id: ProductId, quantity: u32) -> Result<Order, StoreError>;

    /// Loads an order by ID, or `None` if it does not exist.
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError>;

    /// Returns every persisted order.
    async fn find_all(&self) -> Result<Vec<Order>, StoreError>;

    /// Writes a new status for an order.
    ///
    /// Returns the updated order, or `None` if the ID is unknown.
    async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, StoreError>;
}
