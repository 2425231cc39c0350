//! Message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for messages table
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub channel_id: i64,
    pub author_id: i64,
    pub content: String,
    pub file_url: Option<String>,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Joined row: a message plus its authoring member and that member's profile
///
/// The feed and every mutation return this full graph so clients never have
/// to stitch authors together themselves.
#[derive(Debug, Clone, FromRow)]
pub struct MessageWithAuthorModel {
    pub id: i64,
    pub channel_id: i64,
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
