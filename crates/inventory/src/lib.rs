//! Inventory bounded context.
//!
//! Owns the product store and the inventory-side half of the fulfillment
//! choreography: deciding confirm/cancel for each `order_created` event
//! and answering with `order_processed`.

pub mod coordinator;
pub mod error;
pub mod locks;
pub mod memory;
pub mod store;
pub mod subscriber;

pub use coordinator::{InventoryCoordinator, default_catalog};
pub use error::InventoryError;
pub use locks::ProductLocks;
pub use memory::InMemoryProductStore;
pub use store::{ProductStore, StoreError};
pub use subscriber::OrderCreatedSubscriber;
