//! Shared identifier types for the fulfillment system.

pub mod types;

pub use types::OrderId;
