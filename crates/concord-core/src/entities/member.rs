//! Member entity - a profile's role-scoped membership within one server

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Member role within a server
///
/// This is a closed set; ownership is NOT a role. Whether a member owns the
/// server is derived from `Server::owner_id` alone, so the two conventions
/// can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i16)]
pub enum Role {
    #[default]
    Guest = 0,
    Moderator = 1,
    Admin = 2,
}

impl Role {
    /// Whether this role carries moderation rights (channel management,
    /// deleting other members' messages)
    #[inline]
    #[must_use]
    pub fn can_moderate(self) -> bool {
        match self {
            Self::Admin | Self::Moderator => true,
            Self::Guest => false,
        }
    }

    /// Sort rank for member listings (admins first)
    #[must_use]
    pub fn rank(self) -> i16 {
        match self {
            Self::Admin => 0,
            Self::Moderator => 1,
            Self::Guest => 2,
        }
    }

    /// Wire/database code
    #[inline]
    #[must_use]
    pub fn as_i16(self) -> i16 {
        self as i16
    }

    /// Display label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Guest => "GUEST",
            Self::Moderator => "MODERATOR",
            Self::Admin => "ADMIN",
        }
    }
}

impl From<i16> for Role {
    fn from(value: i16) -> Self {
        match value {
            1 => Self::Moderator,
            2 => Self::Admin,
            _ => Self::Guest,
        }
    }
}

impl From<Role> for i16 {
    fn from(role: Role) -> Self {
        role as i16
    }
}

/// Server member entity (junction between Profile and Server)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: Snowflake,
    pub server_id: Snowflake,
    pub profile_id: Snowflake,
    pub role: Role,
    pub joined_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Create a new membership with the given role
    pub fn new(id: Snowflake, server_id: Snowflake, profile_id: Snowflake, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id,
            server_id,
            profile_id,
            role,
            joined_at: now,
            updated_at: now,
        }
    }

    /// Change the member's role
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_codes_roundtrip() {
        for role in [Role::Guest, Role::Moderator, Role::Admin] {
            assert_eq!(Role::from(role.as_i16()), role);
        }
        // Unknown codes degrade to the least privileged role
        assert_eq!(Role::from(99), Role::Guest);
    }

    #[test]
    fn test_moderation_rights() {
        assert!(Role::Admin.can_moderate());
        assert!(Role::Moderator.can_moderate());
        assert!(!Role::Guest.can_moderate());
    }

    #[test]
    fn test_rank_orders_admins_first() {
        assert!(Role::Admin.rank() < Role::Moderator.rank());
        assert!(Role::Moderator.rank() < Role::Guest.rank());
    }

    #[test]
    fn test_member_role_change() {
        let mut member = Member::new(
            Snowflake::new(1),
            Snowflake::new(100),
            Snowflake::new(200),
            Role::Guest,
        );
        assert_eq!(member.role, Role::Guest);

        member.set_role(Role::Moderator);
        assert_eq!(member.role, Role::Moderator);
    }
}
