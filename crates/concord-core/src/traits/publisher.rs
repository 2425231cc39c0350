//! Event publisher port - the broadcast half of the mutation protocol

use async_trait::async_trait;
use serde_json::Value;

use crate::error::DomainError;

/// Publish/subscribe fan-out keyed by a topic string.
///
/// Delivery is at-most-once and best-effort: a failed publish must never
/// roll back the store write that preceded it, and no retries are performed.
/// Services call this after the mutation commits and swallow (log) errors.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish `payload` as `event` on `topic`
    async fn publish(&self, topic: &str, event: &str, payload: Value) -> Result<(), DomainError>;
}
