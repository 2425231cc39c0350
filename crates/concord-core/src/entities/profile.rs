//! Profile entity - a user's identity record, independent of any server

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Profile entity
///
/// Created on first sign-in. `external_id` references the upstream identity
/// provider's subject and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Snowflake,
    pub external_id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new profile from identity-provider claims
    pub fn new(
        id: Snowflake,
        external_id: String,
        name: String,
        avatar_url: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            external_id,
            name,
            avatar_url,
            created_at: now,
            updated_at: now,
        }
    }
}
