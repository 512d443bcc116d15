//! Topic registry and dispatch loop.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{BusError, HandlerError};

/// A subscriber callback for one topic.
///
/// Handlers receive the payload as JSON and deserialize the event type
/// they expect; a payload that does not match is a handler failure.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, payload: serde_json::Value) -> Result<(), HandlerError>;
}

/// In-process event bus keyed by topic name.
///
/// Explicitly constructed and passed by reference to every participant
/// at startup; there is no ambient global instance.
#[derive(Clone, Default)]
pub struct EventBus {
    topics: Arc<RwLock<HashMap<String, Vec<Arc<dyn EventHandler>>>>>,
}

impl EventBus {
    /// Creates a new bus with no subscriptions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for a topic.
    ///
    /// Handlers for the same topic are invoked in registration order.
    pub fn subscribe(&self, topic: impl Into<String>, handler: Arc<dyn EventHandler>) {
        let topic = topic.into();
        self.topics
            .write()
            .unwrap()
            .entry(topic)
            .or_default()
            .push(handler);
    }

    /// Returns the number of handlers registered for a topic.
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.topics
            .read()
            .unwrap()
            .get(topic)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Publishes an event to every handler registered for `topic`.
    ///
    /// Awaits each handler in registration order. A handler error is
    /// logged and counted, then dispatch continues with the next handler.
    /// With no subscribers the event is dropped; once this returns, an
    /// unresolved payload cannot be recovered or replayed.
    pub async fn publish<E: Serialize>(&self, topic: &str, event: &E) -> Result<(), BusError> {
        let payload = serde_json::to_value(event).map_err(|source| BusError::Serialize {
            topic: topic.to_string(),
            source,
        })?;

        // Snapshot the handler list before dispatch so a handler may
        // publish re-entrantly without holding the registry lock.
        let handlers: Vec<Arc<dyn EventHandler>> = self
            .topics
            .read()
            .unwrap()
            .get(topic)
            .cloned()
            .unwrap_or_default();

        if handlers.is_empty() {
            tracing::debug!(topic, "no subscribers registered; event dropped");
            return Ok(());
        }

        metrics::counter!("events_published_total").increment(1);

        for (position, handler) in handlers.iter().enumerate() {
            if let Err(err) = handler.handle(payload.clone()).await {
                metrics::counter!("event_handler_failures_total").increment(1);
                tracing::warn!(topic, position, error = %err, "event handler failed");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recorder {
        label: &'static str,
        seen: Arc<Mutex<Vec<(&'static str, serde_json::Value)>>>,
    }

    #[async_trait]
    impl EventHandler for Recorder {
        async fn handle(&self, payload: serde_json::Value) -> Result<(), HandlerError> {
            self.seen.lock().unwrap().push((self.label, payload));
            Ok(())
        }
    }

    struct Failing;

    #[async_trait]
    impl EventHandler for Failing {
        async fn handle(&self, _payload: serde_json::Value) -> Result<(), HandlerError> {
            Err(HandlerError::new("boom"))
        }
    }

    #[tokio::test]
    async fn delivers_payload_to_subscriber() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        bus.subscribe(
            "orders",
            Arc::new(Recorder {
                label: "a",
                seen: seen.clone(),
            }),
        );

        bus.publish("orders", &serde_json::json!({"n": 1}))
            .await
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].1["n"], 1);
    }

    #[tokio::test]
    async fn handlers_run_in_registration_order() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        bus.subscribe(
            "t",
            Arc::new(Recorder {
                label: "first",
                seen: seen.clone(),
            }),
        );
        bus.subscribe(
            "t",
            Arc::new(Recorder {
                label: "second",
                seen: seen.clone(),
            }),
        );

        bus.publish("t", &serde_json::json!({})).await.unwrap();

        let labels: Vec<_> = seen.lock().unwrap().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn failing_handler_does_not_block_others() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        bus.subscribe("t", Arc::new(Failing));
        bus.subscribe(
            "t",
            Arc::new(Recorder {
                label: "survivor",
                seen: seen.clone(),
            }),
        );

        let result = bus.publish("t", &serde_json::json!({})).await;

        assert!(result.is_ok());
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn publish_without_subscribers_drops_event() {
        let bus = EventBus::new();
        let result = bus.publish("nobody-home", &serde_json::json!({})).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn topics_are_independent() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        bus.subscribe(
            "a",
            Arc::new(Recorder {
                label: "a",
                seen: seen.clone(),
            }),
        );

        bus.publish("b", &serde_json::json!({})).await.unwrap();

        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(bus.subscriber_count("a"), 1);
        assert_eq!(bus.subscriber_count("b"), 0);
    }

    struct Chainer {
        bus: EventBus,
    }

    #[async_trait]
    impl EventHandler for Chainer {
        async fn handle(&self, payload: serde_json::Value) -> Result<(), HandlerError> {
            // Publishes while the outer dispatch is still on the stack.
            self.bus.publish("downstream", &payload).await.ok();
            Ok(())
        }
    }

    #[tokio::test]
    async fn handler_can_publish_reentrantly() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        bus.subscribe("upstream", Arc::new(Chainer { bus: bus.clone() }));
        bus.subscribe(
            "downstream",
            Arc::new(Recorder {
                label: "down",
                seen: seen.clone(),
            }),
        );

        bus.publish("upstream", &serde_json::json!({"hop": 1}))
            .await
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "down");
        assert_eq!(seen[0].1["hop"], 1);
    }
}
