//! Conversation and direct message database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for conversations table
#[derive(Debug, Clone, FromRow)]
pub struct ConversationModel {
    pub id: i64,
    pub member_one_id: i64,
    pub member_two_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Joined row: a conversation plus the caller's member slot in it
#[derive(Debug, Clone, FromRow)]
pub struct ConversationWithMembershipModel {
    pub id: i64,
    pub member_one_id: i64,
    pub member_two_id: i64,
    pub created_at: DateTime<Utc>,
    pub member_id: i64,
    pub member_server_id: i64,
    pub member_profile_id: i64,
    pub member_role: i16,
    pub member_joined_at: DateTime<Utc>,
    pub member_updated_at: DateTime<Utc>,
}

/// Database model for direct_messages table
#[derive(Debug, Clone, FromRow)]
pub struct DirectMessageModel {
    pub id: i64,
    pub conversation_id: i64,
    pub author_id: i64,
    pub content: String,
    pub file_url: Option<String>,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Joined row: a direct message plus its authoring member and profile
#[derive(Debug, Clone, FromRow)]
pub struct DirectMessageWithAuthorModel {
    pub id: i64,
    pub conversation_id: i64,
    pub author_id: i64,
    pub content: String,
    pub file_url: Option<String>,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub member_server_id: i64,
    pub member_profile_id: i64,
    pub member_role: i16,
    pub member_joined_at: DateTime<Utc>,
    pub member_updated_at: DateTime<Utc>,
    pub profile_external_id: String,
    pub profile_name: String,
    pub profile_avatar_url: Option<String>,
    pub profile_created_at: DateTime<Utc>,
    pub profile_updated_at: DateTime<Utc>,
}
