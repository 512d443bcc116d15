//! Bus error types.

use thiserror::Error;

/// Errors surfaced to a publisher.
///
/// Only serialization can fail a publish; handler failures are isolated
/// inside the dispatch loop and never propagate here.
#[derive(Debug, Error)]
pub enum BusError {
    /// The event could not be serialized into a payload.
    #[error("failed to serialize event for topic '{topic}': {source}")]
    Serialize {
        topic: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Error returned by a subscriber's handler.
///
/// Opaque by design: the bus only logs it, so handlers reduce whatever
/// went wrong to a message.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct HandlerError(String);

impl HandlerError {
    /// Creates a handler error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Creates a handler error from any displayable cause.
    pub fn from_err(err: impl std::fmt::Display) -> Self {
        Self(err.to_string())
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        Self::from_err(err)
    }
}
