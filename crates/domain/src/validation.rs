//! Request validation for order creation.
//!
//! Runs before the order coordinator is invoked, as a pure function: the
//! coordinator only ever sees a [`ValidatedOrder`].

use serde::Deserialize;
use thiserror::Error;

use crate::model::ProductId;

/// Raw create-order request as received from the transport layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Catalog key of the product being ordered.
    pub product_id: String,

    /// Units requested. Signed here so out-of-range values reach
    /// validation instead of failing opaquely at deserialization.
    pub quantity: i64,
}

/// A create-order request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOrder {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Rejections reported to the caller before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("productId must be a non-empty string")]
    EmptyProductId,

    #[error("Quantity must be at least 1")]
    InvalidQuantity { got: i64 },
}

/// Validates a create-order request.
///
/// Rules: `productId` non-empty after trimming, `quantity` an integer
/// of at least 1.
pub fn validate_create_order(req: &CreateOrderRequest) -> Result<ValidatedOrder, ValidationError> {
    if req.product_id.trim().is_empty() {
        return Err(ValidationError::EmptyProductId);
    }

    let quantity = u32::try_from(req.quantity)
        .ok()
        .filter(|q| *q >= 1)
        .ok_or(ValidationError::InvalidQuantity { got: req.quantity })?;

    Ok(ValidatedOrder {
        product_id: ProductId::new(req.product_id.as_str()),
        quantity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_request() {
        let req = CreateOrderRequest {
            product_id: "1".to_string(),
            quantity: 5,
        };
        let validated = validate_create_order(&req).unwrap();
        assert_eq!(validated.product_id, ProductId::new("1"));
        assert_eq!(validated.quantity, 5);
    }

    #[test]
    fn rejects_empty_product_id() {
        let req = CreateOrderRequest {
            product_id: "   ".to_string(),
            quantity: 1,
        };
        assert_eq!(
            validate_create_order(&req),
            Err(ValidationError::EmptyProductId)
        );
    }

    #[test]
    fn rejects_zero_quantity() {
        let req = CreateOrderRequest {
            product_id: "1".to_string(),
            quantity: 0,
        };
        assert_eq!(
            validate_create_order(&req),
            Err(ValidationError::InvalidQuantity { got: 0 })
        );
    }

    #[test]
    fn rejects_negative_quantity() {
        let req = CreateOrderRequest {
            product_id: "1".to_string(),
            quantity: -3,
        };
        assert_eq!(
            validate_create_order(&req),
            Err(ValidationError::InvalidQuantity { got: -3 })
        );
    }

    #[test]
    fn quantity_of_one_is_the_minimum() {
        let req = CreateOrderRequest {
            product_id: "2".to_string(),
            quantity: 1,
        };
        assert!(validate_create_order(&req).is_ok());
    }
}
