//! In-memory product store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use domain::{Product, ProductId};
use tokio::sync::RwLock;

use crate::store::{ProductStore, StoreError};

#[derive(Default)]
struct State {
    products: HashMap<ProductId, Product>,
    fail_writes: bool,
}

/// In-memory product store backing tests and the single-process binary.
#[derive(Clone, Default)]
pub struct InMemoryProductStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryProductStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures every subsequent write to fail.
    pub async fn set_fail_writes(&self, fail: bool) {
        self.state.write().await.fail_writes = fail;
    }

    /// Returns the number of catalog entries.
    pub async fn product_count(&self) -> usize {
        self.state.read().await.products.len()
    }

    /// Returns the stock level for a product, if present.
    pub async fn stock_of(&self, product_id: &ProductId) -> Option<u32> {
        self.state
            .read()
            .await
            .products
            .get(product_id)
            .map(|p| p.stock)
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_by_id(&self, product_id: &ProductId) -> Result<Option<Product>, StoreError> {
        let state = self.state.read().await;
        Ok(state.products.get(product_id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let state = self.state.read().await;
        Ok(state.products.values().cloned().collect())
    }

    async fn save(&self, product: Product) -> Result<(), StoreError> {
        let mut state = self.state.write().await;

        if state.fail_writes {
            return Err(StoreError::WriteFailed("injected failure".to_string()));
        }

        state.products.insert(product.product_id.clone(), product);
        Ok(())
    }
}
