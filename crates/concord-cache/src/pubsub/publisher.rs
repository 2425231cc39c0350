//! Redis Pub/Sub publisher.
//!
//! Publishes mutation events to Redis topics for distribution to the
//! realtime transport. Implements the `EventPublisher` port from
//! concord-core.

use async_trait::async_trait;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

use concord_core::{DomainError, EventPublisher};

use crate::pool::RedisPool;
use crate::pubsub::Topic;

/// Event names, one per resource kind and transition.
///
/// Distinct names per kind mean subscribers can tell a channel message from
/// a direct message without inspecting the topic they arrived on; the event
/// name is the payload's discriminant.
pub mod event_names {
    pub const MESSAGE_CREATE: &str = "MESSAGE_CREATE";
    pub const MESSAGE_UPDATE: &str = "MESSAGE_UPDATE";
    pub const MESSAGE_DELETE: &str = "MESSAGE_DELETE";
    pub const DIRECT_MESSAGE_CREATE: &str = "DIRECT_MESSAGE_CREATE";
    pub const DIRECT_MESSAGE_UPDATE: &str = "DIRECT_MESSAGE_UPDATE";
    pub const DIRECT_MESSAGE_DELETE: &str = "DIRECT_MESSAGE_DELETE";
    pub const CHANNEL_CREATE: &str = "CHANNEL_CREATE";
    pub const CHANNEL_UPDATE: &str = "CHANNEL_UPDATE";
    pub const CHANNEL_DELETE: &str = "CHANNEL_DELETE";
    pub const MEMBER_UPDATE: &str = "MEMBER_UPDATE";
    pub const MEMBER_REMOVE: &str = "MEMBER_REMOVE";
    pub const SERVER_UPDATE: &str = "SERVER_UPDATE";
}

/// Event wrapper for Pub/Sub messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastEvent {
    /// Event type name (e.g., "MESSAGE_CREATE")
    pub event_type: String,
    /// Full resource graph of the mutated resource
    pub data: serde_json::Value,
}

impl BroadcastEvent {
    /// Create a new event
    #[must_use]
    pub fn new(event_type: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            event_type: event_type.into(),
            data,
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Redis Pub/Sub publisher
#[derive(Clone)]
pub struct RedisPublisher {
    pool: RedisPool,
}

impl RedisPublisher {
    /// Create a new publisher
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Publish an event to a topic
    pub async fn publish_event(
        &self,
        topic: &Topic,
        event: &BroadcastEvent,
    ) -> crate::pool::RedisResult<u32> {
        let mut conn = self.pool.get().await?;
        let topic_name = topic.name();
        let payload = event.to_json()?;

        let receivers: u32 = conn.publish(&topic_name, &payload).await?;

        tracing::debug!(
            topic = %topic_name,
            event_type = %event.event_type,
            receivers = receivers,
            "Published event"
        );

        Ok(receivers)
    }
}

#[async_trait]
impl EventPublisher for RedisPublisher {
    async fn publish(
        &self,
        topic: &str,
        event: &str,
        payload: serde_json::Value,
    ) -> Result<(), DomainError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| DomainError::BroadcastError(e.to_string()))?;

        let wrapped = BroadcastEvent::new(event, payload);
        let body = wrapped
            .to_json()
            .map_err(|e| DomainError::BroadcastError(e.to_string()))?;

        let receivers: u32 = conn
            .publish(topic, &body)
            .await
            .map_err(|e| DomainError::BroadcastError(e.to_string()))?;

        tracing::debug!(topic = %topic, event_type = %event, receivers, "Published event");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_creation() {
        let data = serde_json::json!({
            "id": "12345",
            "content": "Hello!"
        });

        let event = BroadcastEvent::new(event_names::MESSAGE_CREATE, data.clone());
        assert_eq!(event.event_type, "MESSAGE_CREATE");
        assert_eq!(event.data, data);
    }

    #[test]
    fn test_event_serialization() {
        let data = serde_json::json!({"content": "test"});
        let event = BroadcastEvent::new(event_names::DIRECT_MESSAGE_DELETE, data);

        let json = event.to_json().unwrap();
        assert!(json.contains("DIRECT_MESSAGE_DELETE"));
        assert!(json.contains("test"));
    }

    #[test]
    fn test_event_names_are_distinct_per_kind() {
        // A subscriber must be able to tell the resource kind from the event
        // name alone.
        assert_ne!(event_names::MESSAGE_UPDATE, event_names::DIRECT_MESSAGE_UPDATE);
        assert_ne!(event_names::MESSAGE_DELETE, event_names::DIRECT_MESSAGE_DELETE);
    }
}
