//! In-memory order store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::OrderId;
use domain::{Order, OrderStatus, ProductId};
use tokio::sync::RwLock;

use crate::store::{OrderStore, StoreError};

#[derive(Default)]
struct State {
    orders: HashMap<OrderId, Order>,
    fail_writes: bool,
}

/// In-memory order store backing tests and the single-process binary.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryOrderStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures every subsequent write to fail.
    pub async fn set_fail_writes(&self, fail: bool) {
        self.state.write().await.fail_writes = fail;
    }

    /// Returns the number of persisted orders.
    pub async fn order_count(&self) -> usize {
        self.state.read().await.orders.len()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, product_id: ProductId, quantity: u32) -> Result<Order, StoreError> {
        let mut state = self.state.write().await;

        if state.fail_writes {
            return Err(StoreError::WriteFailed("injected failure".to_string()));
        }

        let order = Order {
            id: OrderId::new(),
            product_id,
            quantity,
            status: OrderStatus::Created,
        };
        state.orders.insert(order.id, order.clone());

        Ok(order)
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        let state = self.state.read().await;
        Ok(state.orders.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Order>, StoreError> {
        let state = self.state.read().await;
        Ok(state.orders.values().cloned().collect())
    }

    async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, StoreError> {
        let mut state = self.state.write().await;

        if state.fail_writes {
            return Err(StoreError::WriteFailed("injected failure".to_string()));
        }

        Ok(state.orders.get_mut(&id).map(|order| {
            order.status = status;
            order.clone()
        }))
    }
}
