//! Order coordinator error types.

use common::OrderId;
use domain::OrderStatus;
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// A processed event referenced an order absent from the store.
    ///
    /// The order aggregate must exist before its outcome arrives; an
    /// unmatched event indicates a bus-level anomaly, not a normal case.
    #[error("Order with ID \"{0}\" not found")]
    NotFound(OrderId),

    /// The requested status change would violate the single-transition
    /// rule.
    #[error("order {id} is {from}; cannot transition to {to}")]
    InvalidTransition {
        id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },

    /// The order store failed.
    #[error("order persistence failed: {0}")]
    Store(#[from] StoreError),
}
