//! Conversation and DirectMessage entities - one-to-one messaging

use chrono::{DateTime, Utc};

use crate::entities::message::DELETED_MESSAGE_TOMBSTONE;
use crate::value_objects::Snowflake;

/// Conversation entity - pairs exactly two members for direct messaging
///
/// Conceptually unordered; stored with two fixed slots. Lookups must check
/// both orderings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: Snowflake,
    pub member_one_id: Snowflake,
    pub member_two_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// Create a new conversation between two members
    pub fn new(id: Snowflake, member_one_id: Snowflake, member_two_id: Snowflake) -> Self {
        Self {
            id,
            member_one_id,
            member_two_id,
            created_at: Utc::now(),
        }
    }

    /// Whether the given member occupies one of the two slots
    #[inline]
    #[must_use]
    pub fn involves(&self, member_id: Snowflake) -> bool {
        self.member_one_id == member_id || self.member_two_id == member_id
    }

    /// The counterpart of the given member, if they participate at all
    #[must_use]
    pub fn other_member(&self, member_id: Snowflake) -> Option<Snowflake> {
        if self.member_one_id == member_id {
            Some(self.member_two_id)
        } else if self.member_two_id == member_id {
            Some(self.member_one_id)
        } else {
            None
        }
    }
}

/// Direct message entity; same soft-delete semantics as `Message`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectMessage {
    pub id: Snowflake,
    pub conversation_id: Snowflake,
    pub author_id: Snowflake,
    pub content: String,
    pub file_url: Option<String>,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DirectMessage {
    /// Create a new direct message
    pub fn new(
        id: Snowflake,
        conversation_id: Snowflake,
        author_id: Snowflake,
        content: String,
        file_url: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            conversation_id,
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

    /// Apply the tombstone
    pub fn soft_delete(&mut self) {
        self.content = DELETED_MESSAGE_TOMBSTONE.to_string();
        self.file_url = None;
        self.deleted = true;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_involvement() {
        let conversation = Conversation::new(Snowflake::new(1), Snowflake::new(10), Snowflake::new(20));
        assert!(conversation.involves(Snowflake::new(10)));
        assert!(conversation.involves(Snowflake::new(20)));
        assert!(!conversation.involves(Snowflake::new(30)));
    }

    #[test]
    fn test_other_member() {
        let conversation = Conversation::new(Snowflake::new(1), Snowflake::new(10), Snowflake::new(20));
        assert_eq!(conversation.other_member(Snowflake::new(10)), Some(Snowflake::new(20)));
        assert_eq!(conversation.other_member(Snowflake::new(20)), Some(Snowflake::new(10)));
        assert_eq!(conversation.other_member(Snowflake::new(30)), None);
    }

    #[test]
    fn test_direct_message_soft_delete() {
        let mut dm = DirectMessage::new(
            Snowflake::new(1),
            Snowflake::new(2),
            Snowflake::new(3),
            "psst".to_string(),
            None,
        );
        dm.soft_delete();
        assert!(dm.deleted);
        assert_eq!(dm.content, DELETED_MESSAGE_TOMBSTONE);
    }
}
