//! In-process publish/subscribe event bus.
//!
//! Decouples publishers from subscribers by topic name. Delivery is
//! at-most-once per registered handler: there is no message log, no
//! redelivery, and no cross-topic ordering guarantee. An event published
//! with no subscriber registered is dropped.
//!
//! Dispatch is synchronous: `publish` awaits every handler for the topic
//! in registration order before returning. Each handler runs behind its
//! own error boundary, so a failing handler is logged and counted but
//! neither reaches the publisher nor suppresses later handlers.

pub mod broker;
pub mod error;

pub use broker::{EventBus, EventHandler};
pub use error::{BusError, HandlerError};
