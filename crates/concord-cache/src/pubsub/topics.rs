//! Pub/Sub topic definitions.
//!
//! Topics are derived from the scope id of the mutated resource: channel
//! messages fan out on the channel topic, direct messages on the
//! conversation topic, membership and channel-list changes on the server
//! topic.

use concord_core::Snowflake;

/// Topic prefix for server-wide events
pub const SERVER_TOPIC_PREFIX: &str = "server:";
/// Topic prefix for channel events
pub const CHANNEL_TOPIC_PREFIX: &str = "channel:";
/// Topic prefix for conversation events
pub const CONVERSATION_TOPIC_PREFIX: &str = "conversation:";

/// Pub/Sub topic types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Events for a server (membership, channel list)
    Server(Snowflake),
    /// Events for a channel (messages)
    Channel(Snowflake),
    /// Events for a conversation (direct messages)
    Conversation(Snowflake),
}

impl Topic {
    /// Create a server topic
    #[must_use]
    pub fn server(server_id: Snowflake) -> Self {
        Self::Server(server_id)
    }

    /// Create a channel topic
    #[must_use]
    pub fn channel(channel_id: Snowflake) -> Self {
        Self::Channel(channel_id)
    }

    /// Create a conversation topic
    #[must_use]
    pub fn conversation(conversation_id: Snowflake) -> Self {
        Self::Conversation(conversation_id)
    }

    /// Get the Redis topic name
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Server(id) => format!("{SERVER_TOPIC_PREFIX}{id}"),
            Self::Channel(id) => format!("{CHANNEL_TOPIC_PREFIX}{id}"),
            Self::Conversation(id) => format!("{CONVERSATION_TOPIC_PREFIX}{id}"),
        }
    }

    /// Parse a topic name back to a `Topic`, if it matches a known prefix
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let parse_id = |s: &str| s.parse::<i64>().ok().map(Snowflake::from);

        if let Some(id_str) = name.strip_prefix(SERVER_TOPIC_PREFIX) {
            return parse_id(id_str).map(Self::Server);
        }
        if let Some(id_str) = name.strip_prefix(CHANNEL_TOPIC_PREFIX) {
            return parse_id(id_str).map(Self::Channel);
        }
        if let Some(id_str) = name.strip_prefix(CONVERSATION_TOPIC_PREFIX) {
            return parse_id(id_str).map(Self::Conversation);
        }
        None
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_names() {
        let server_id = Snowflake::from(12345i64);
        let channel_id = Snowflake::from(67890i64);
        let conversation_id = Snowflake::from(11111i64);

        assert_eq!(Topic::server(server_id).name(), "server:12345");
        assert_eq!(Topic::channel(channel_id).name(), "channel:67890");
        assert_eq!(Topic::conversation(conversation_id).name(), "conversation:11111");
    }

    #[test]
    fn test_topic_parse() {
        assert_eq!(
            Topic::parse("server:12345"),
            Some(Topic::Server(Snowflake::from(12345i64)))
        );
        assert_eq!(
            Topic::parse("channel:67890"),
            Some(Topic::Channel(Snowflake::from(67890i64)))
        );
        assert_eq!(
            Topic::parse("conversation:11111"),
            Some(Topic::Conversation(Snowflake::from(11111i64)))
        );
        assert_eq!(Topic::parse("unknown:123"), None);
        assert_eq!(Topic::parse("channel:not-a-number"), None);
    }
}
