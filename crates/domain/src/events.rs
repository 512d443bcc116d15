//! Event contracts exchanged between the order and inventory coordinators.
//!
//! The field names and topic names are the interoperability surface:
//! other consumers observing the same choreography rely on them, so they
//! are serialized in camelCase and must not change.

use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::model::{OrderStatus, ProductId};

/// Topic carrying [`OrderCreated`] events.
pub const ORDER_CREATED_TOPIC: &str = "order_created";

/// Topic carrying [`OrderProcessed`] events.
pub const ORDER_PROCESSED_TOPIC: &str = "order_processed";

/// Published once per successfully created order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    /// The store-assigned order ID.
    pub order_id: OrderId,

    /// The product the order references.
    pub product_id: ProductId,

    /// Units ordered.
    pub quantity: u32,
}

/// The inventory decision for one order.
///
/// Restricted to the two terminal outcomes so a `created` status can
/// never travel back over the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingOutcome {
    /// Stock was available and deducted.
    Confirmed,
    /// Product missing or stock insufficient; nothing was deducted.
    Cancelled,
}

impl From<ProcessingOutcome> for OrderStatus {
    fn from(outcome: ProcessingOutcome) -> Self {
        match outcome {
            ProcessingOutcome::Confirmed => OrderStatus::Confirmed,
            ProcessingOutcome::Cancelled => OrderStatus::Cancelled,
        }
    }
}

impl std::fmt::Display for ProcessingOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingOutcome::Confirmed => write!(f, "confirmed"),
            ProcessingOutcome::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Published exactly once per [`OrderCreated`] consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProcessed {
    /// The order the decision applies to.
    pub order_id: OrderId,

    /// The terminal outcome.
    pub status: ProcessingOutcome,
}
