//! Per-product-key serialization.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use domain::ProductId;
use tokio::sync::OwnedMutexGuard;

/// Keyed async mutex serializing stock adjustments per product.
///
/// Two concurrent adjustments against the same product key are strictly
/// ordered; adjustments against different keys do not contend. Entries
/// live for the process lifetime, one per distinct product key.
#[derive(Clone, Default)]
pub struct ProductLocks {
    locks: Arc<Mutex<HashMap<ProductId, Arc<tokio::sync::Mutex<()>>>>>,
}

impl ProductLocks {
    /// Creates an empty lock table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for a product key, waiting if it is held.
    pub async fn acquire(&self, product_id: &ProductId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap();
            locks.entry(product_id.clone()).or_default().clone()
        };
        lock.lock_owned().await
    }
}
