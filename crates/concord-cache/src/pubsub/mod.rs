//! Redis Pub/Sub module.
//!
//! Publish-only event distribution; subscribers are the external realtime
//! transport's concern.

mod publisher;
mod topics;

pub use publisher::{event_names, BroadcastEvent, RedisPublisher};
pub use topics::{
    Topic, CHANNEL_TOPIC_PREFIX, CONVERSATION_TOPIC_PREFIX, SERVER_TOPIC_PREFIX,
};
