//! Member database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: i64,
    pub server_id: i64,
    pub profile_id: i64,
    pub role: i16,
    pub joined_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Joined row: a member plus its profile
#[derive(Debug, Clone, FromRow)]
pub struct MemberWithProfileModel {
    pub id: i64,
    pub server_id: i64,
    pub profile_id: i64,
    pub role: i16,
    pub joined_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub profile_external_id: String,
    pub profile_name: String,
    pub profile_avatar_url: Option<String>,
    pub profile_created_at: DateTime<Utc>,
    pub profile_updated_at: DateTime<Utc>,
}
