//! Product store contract.

use async_trait::async_trait;
use domain::{Product, ProductId};
use thiserror::Error;

/// Errors raised by a product store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A read against the store failed.
    #[error("product store read failed: {0}")]
    ReadFailed(String),

    /// A write against the store failed.
    #[error("product store write failed: {0}")]
    WriteFailed(String),
}

/// Persistence interface for the product aggregate.
///
/// The inventory coordinator owns the store; stock is only ever written
/// through its adjustment operation.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Loads a product by catalog key, or `None` if it does not exist.
    async fn find_by_id(&self, product_id: &ProductId) -> Result<Option<Product>, StoreError>;

    /// Returns every product.
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    /// Inserts or replaces a product.
    async fn save(&self, product: Product) -> Result<(), StoreError>;
}
