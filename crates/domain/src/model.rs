//! Order and Product aggregates.

use common::OrderId;
use serde::{Deserialize, Serialize};

/// Product identifier (catalog key).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a new product ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the product ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The status of an order in its lifecycle.
///
/// Status transitions:
/// ```text
/// Created ──┬──► Confirmed
///           └──► Cancelled
/// ```
///
/// Both `Confirmed` and `Cancelled` are terminal; an order transitions
/// at most once and never back to `Created`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order is persisted, awaiting the inventory decision.
    #[default]
    Created,

    /// Stock was available and has been deducted (terminal).
    Confirmed,

    /// Product was missing or stock was insufficient (terminal).
    Cancelled,
}

impl OrderStatus {
    /// Returns true if this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Confirmed | OrderStatus::Cancelled)
    }

    /// Returns true if an order in this status may move to `next`.
    ///
    /// Re-applying a terminal status already held counts as allowed:
    /// rewriting the same terminal value is idempotent in effect.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        match self {
            OrderStatus::Created => next.is_terminal(),
            _ => *self == next,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Created => "created",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

/// A purchase order for a single product.
///
/// Created by the order coordinator; the status is mutated only by the
/// `order_processed` handler. Orders are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Store-assigned identifier.
    pub id: OrderId,

    /// The product this order references. Not enforced as a foreign key
    /// across stores; a dangling reference settles as cancelled.
    pub product_id: ProductId,

    /// Units ordered, at least 1 (enforced by request validation).
    pub quantity: u32,

    /// Current lifecycle status.
    pub status: OrderStatus,
}

/// A catalog entry with its available stock.
///
/// Stock is unsigned, so a negative level is unrepresentable; the
/// inventory coordinator still checks sufficiency before subtracting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique catalog key.
    pub product_id: ProductId,

    /// Units currently available.
    pub stock: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_starts_created() {
        assert_eq!(OrderStatus::default(), OrderStatus::Created);
        assert!(!OrderStatus::Created.is_terminal());
    }

    #[test]
    fn created_transitions_to_either_terminal() {
        assert!(OrderStatus::Created.can_transition_to(OrderStatus::Confirmed));
        assert!(OrderStatus::Created.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Created.can_transition_to(OrderStatus::Created));
    }

    #[test]
    fn terminal_status_never_moves() {
        assert!(!OrderStatus::Confirmed.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Cancelled.can_transition_to(OrderStatus::Confirmed));
        assert!(!OrderStatus::Confirmed.can_transition_to(OrderStatus::Created));
    }

    #[test]
    fn reapplying_same_terminal_status_is_allowed() {
        assert!(OrderStatus::Confirmed.can_transition_to(OrderStatus::Confirmed));
        assert!(OrderStatus::Cancelled.can_transition_to(OrderStatus::Cancelled));
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Confirmed).unwrap(),
            "\"confirmed\""
        );
        assert_eq!(
            serde_json::from_str::<OrderStatus>("\"cancelled\"").unwrap(),
            OrderStatus::Cancelled
        );
    }

    #[test]
    fn order_serializes_with_camel_case_fields() {
        let order = Order {
            id: common::OrderId::new(),
            product_id: ProductId::new("1"),
            quantity: 5,
            status: OrderStatus::Created,
        };
        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("productId").is_some());
        assert_eq!(json["quantity"], 5);
        assert_eq!(json["status"], "created");
    }
}
