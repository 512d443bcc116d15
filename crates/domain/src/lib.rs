//! Domain layer for the fulfillment system.
//!
//! This crate provides the shared domain vocabulary:
//! - Order and Product aggregates with their status rules
//! - Event contracts exchanged between the coordinators
//! - Request validation executed before the order coordinator is invoked

pub mod events;
pub mod model;
pub mod validation;

pub use events::{ORDER_CREATED_TOPIC, ORDER_PROCESSED_TOPIC, OrderCreated, OrderProcessed, ProcessingOutcome};
pub use model::{Order, OrderStatus, Product, ProductId};
pub use validation::{CreateOrderRequest, ValidatedOrder, ValidationError, validate_create_order};
