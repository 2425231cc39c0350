//! Message entity - a channel message with soft-delete semantics

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Content a message is replaced with when soft-deleted
pub const DELETED_MESSAGE_TOMBSTONE: &str = "This message has been deleted";

/// Channel message entity
///
/// State model: ACTIVE -> DELETED, one way, terminal. A deleted message keeps
/// its row but carries the tombstone content, no file reference, and is
/// excluded from the mutable set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    /// Authoring member (not profile): authorship is always server-scoped
    pub author_id: Snowflake,
    pub content: String,
    pub file_url: Option<String>,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Message {
    /// Create a new message
    pub fn new(
        id: Snowflake,
        channel_id: Snowflake,
        author_id: Snowflake,
        content: String,
        file_url: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            channel_id,
            author_id,
            content,
            file_url,
            deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the content (author edit)
    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }

    /// Apply the tombstone. Idempotent once deleted.
    pub fn soft_delete(&mut self) {
        self.content = DELETED_MESSAGE_TOMBSTONE.to_string();
        self.file_url = None;
        self.deleted = true;
        self.updated_at = Utc::now();
    }

    /// Check if message content is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Message {
        Message::new(
            Snowflake::new(1),
            Snowflake::new(100),
            Snowflake::new(200),
            "hello".to_string(),
            Some("https://files.example/a.png".to_string()),
        )
    }

    #[test]
    fn test_message_creation() {
        let msg = sample();
        assert!(!msg.deleted);
        assert!(!msg.is_empty());
    }

    #[test]
    fn test_edit_replaces_content() {
        let mut msg = sample();
        msg.edit("hi".to_string());
        assert_eq!(msg.content, "hi");
        assert!(!msg.deleted);
    }

    #[test]
    fn test_soft_delete_applies_tombstone() {
        let mut msg = sample();
        msg.soft_delete();
        assert!(msg.deleted);
        assert_eq!(msg.content, DELETED_MESSAGE_TOMBSTONE);
        assert!(msg.file_url.is_none());
    }
}
