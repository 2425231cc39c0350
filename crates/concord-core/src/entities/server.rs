//! Server entity - a community container owning channels and memberships

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Server entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub id: Snowflake,
    pub name: String,
    pub image_url: Option<String>,
    /// The owning profile. This is the single source of truth for ownership;
    /// no role value encodes it.
    pub owner_id: Snowflake,
    pub invite_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Server {
    /// Create a new server
    pub fn new(
        id: Snowflake,
        name: String,
        image_url: Option<String>,
        owner_id: Snowflake,
        invite_code: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            image_url,
            owner_id,
            invite_code,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the given profile owns this server
    #[inline]
    #[must_use]
    pub fn is_owned_by(&self, profile_id: Snowflake) -> bool {
        self.owner_id == profile_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership_is_derived_from_owner_id() {
        let server = Server::new(
            Snowflake::new(1),
            "rustaceans".to_string(),
            None,
            Snowflake::new(7),
            "4f9d0c1e".to_string(),
        );
        assert!(server.is_owned_by(Snowflake::new(7)));
        assert!(!server.is_owned_by(Snowflake::new(8)));
    }
}
