//! Server database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for servers table
#[derive(Debug, Clone, FromRow)]
pub struct ServerModel {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub owner_id: i64,
    pub invite_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Joined row: a server plus the caller's member row in it
///
/// Produced by the scoped `find_with_membership` query, which only matches
/// when the caller actually belongs to the server.
#[derive(Debug, Clone, FromRow)]
pub struct ServerWithMembershipModel {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub owner_id: i64,
    pub invite_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub member_id: i64,
    pub member_profile_id: i64,
    pub member_role: i16,
    pub member_joined_at: DateTime<Utc>,
    pub member_updated_at: DateTime<Utc>,
}
