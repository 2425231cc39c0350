//! # concord-cache
//!
//! Redis layer for real-time event distribution.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Pub/Sub**: best-effort fan-out of mutation events to subscribed
//!   transports, keyed by scope-derived topics
//!
//! The subscribing side (the concrete realtime transport) is an external
//! collaborator; only the publish half lives here, behind the
//! `concord_core::EventPublisher` port.

pub mod pool;
pub mod pubsub;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export pubsub types
pub use pubsub::{
    event_names, BroadcastEvent, RedisPublisher, Topic, CHANNEL_TOPIC_PREFIX,
    CONVERSATION_TOPIC_PREFIX, SERVER_TOPIC_PREFIX,
};
