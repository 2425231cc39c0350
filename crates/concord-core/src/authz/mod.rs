//! Capability predicate - the decision rule of the mutation protocol
//!
//! Every mutating operation reduces to one question: may this actor perform
//! this capability? The answer is a pure function of the actor's role, their
//! authorship of the target, and their ownership of the enclosing server.
//! The match is exhaustive over a closed set, so adding a capability or a
//! role is a compile error until every combination is decided.

use crate::entities::Role;

/// The closed set of gated operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Edit a message's or direct message's content
    EditContent,
    /// Soft-delete a message or direct message
    DeleteContent,
    /// Create, rename, or delete a channel
    ManageChannels,
    /// Change a member's role or remove a member
    ManageMembers,
    /// Update/delete the server or regenerate its invite code
    ManageServer,
}

/// The caller, reduced to the three facts the predicate consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub role: Role,
    /// Whether the caller authored the target resource
    pub is_author: bool,
    /// Whether the caller's profile owns the enclosing server
    pub is_owner: bool,
}

impl Actor {
    /// An actor positioned against a specific authored resource
    #[must_use]
    pub fn new(role: Role, is_author: bool, is_owner: bool) -> Self {
        Self {
            role,
            is_author,
            is_owner,
        }
    }

    /// An actor for operations where authorship is not meaningful
    /// (channel, member, and server management)
    #[must_use]
    pub fn manager(role: Role, is_owner: bool) -> Self {
        Self {
            role,
            is_author: false,
            is_owner,
        }
    }

    /// Decide whether this actor may exercise the capability
    #[must_use]
    pub fn permits(&self, capability: Capability) -> bool {
        match capability {
            // Authorship alone gates edits; role elevation grants nothing.
            Capability::EditContent => self.is_author,
            // Deletion extends to moderators and admins.
            Capability::DeleteContent => self.is_author || self.role.can_moderate(),
            Capability::ManageChannels => self.role.can_moderate(),
            // Member and server management never derive from Role.
            Capability::ManageMembers | Capability::ManageServer => self.is_owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROLES: [Role; 3] = [Role::Guest, Role::Moderator, Role::Admin];

    #[test]
    fn test_only_author_may_edit() {
        for role in ALL_ROLES {
            assert!(Actor::new(role, true, false).permits(Capability::EditContent));
            // Not even an admin or the server owner may edit someone else's words
            assert!(!Actor::new(role, false, true).permits(Capability::EditContent));
        }
    }

    #[test]
    fn test_delete_matrix() {
        // Author may always delete their own message
        for role in ALL_ROLES {
            assert!(Actor::new(role, true, false).permits(Capability::DeleteContent));
        }
        // Non-authors need moderation rights
        assert!(Actor::new(Role::Admin, false, false).permits(Capability::DeleteContent));
        assert!(Actor::new(Role::Moderator, false, false).permits(Capability::DeleteContent));
        assert!(!Actor::new(Role::Guest, false, false).permits(Capability::DeleteContent));
    }

    #[test]
    fn test_channel_management_needs_moderation_rights() {
        assert!(Actor::manager(Role::Admin, false).permits(Capability::ManageChannels));
        assert!(Actor::manager(Role::Moderator, false).permits(Capability::ManageChannels));
        assert!(!Actor::manager(Role::Guest, false).permits(Capability::ManageChannels));
        // Ownership without a moderating role does not help here
        assert!(!Actor::manager(Role::Guest, true).permits(Capability::ManageChannels));
    }

    #[test]
    fn test_member_management_is_owner_only() {
        for role in ALL_ROLES {
            assert!(!Actor::manager(role, false).permits(Capability::ManageMembers));
            assert!(Actor::manager(role, true).permits(Capability::ManageMembers));
        }
    }

    #[test]
    fn test_server_management_is_owner_only() {
        assert!(!Actor::manager(Role::Admin, false).permits(Capability::ManageServer));
        assert!(Actor::manager(Role::Guest, true).permits(Capability::ManageServer));
    }
}
