//! Scope guard - the shared prologue of the mutation protocol
//!
//! Steps 2-5 of every gated mutation are identical: resolve the enclosing
//! scope together with the caller's membership in it (one scoped lookup, so
//! a missing scope and a missing membership are indistinguishable to the
//! caller), then evaluate the capability predicate against the caller's
//! role, authorship, and ownership facts. This module is that prologue.

use concord_core::authz::{Actor, Capability};
use concord_core::entities::{Conversation, Member, Server};
use concord_core::Snowflake;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// A resolved server scope: the server plus the caller's member row in it
#[derive(Debug, Clone)]
pub struct ServerScope {
    pub server: Server,
    pub member: Member,
}

impl ServerScope {
    /// Whether the caller owns this server
    #[inline]
    pub fn is_owner(&self) -> bool {
        self.server.is_owned_by(self.member.profile_id)
    }

    /// The caller as a capability actor positioned against an authored resource
    pub fn actor(&self, is_author: bool) -> Actor {
        Actor::new(self.member.role, is_author, self.is_owner())
    }

    /// Enforce a capability, with authorship taken into account
    pub fn require(&self, capability: Capability, is_author: bool) -> ServiceResult<()> {
        if self.actor(is_author).permits(capability) {
            Ok(())
        } else {
            Err(ServiceError::permission_denied(capability_name(capability)))
        }
    }

    /// Enforce a capability for operations where authorship is meaningless
    pub fn require_management(&self, capability: Capability) -> ServiceResult<()> {
        self.require(capability, false)
    }
}

/// A resolved conversation scope: the conversation plus the caller's slot
#[derive(Debug, Clone)]
pub struct ConversationScope {
    pub conversation: Conversation,
    pub member: Member,
}

impl ConversationScope {
    /// Enforce a capability against the caller's role and authorship.
    ///
    /// Ownership never applies inside a conversation; there is no server
    /// owner to defer to between two peers.
    pub fn require(&self, capability: Capability, is_author: bool) -> ServiceResult<()> {
        if Actor::new(self.member.role, is_author, false).permits(capability) {
            Ok(())
        } else {
            Err(ServiceError::permission_denied(capability_name(capability)))
        }
    }
}

/// Resolve a server scope for the caller (protocol steps 2-3)
pub async fn resolve_server_scope(
    ctx: &ServiceContext,
    server_id: Snowflake,
    profile_id: Snowflake,
) -> ServiceResult<ServerScope> {
    let (server, member) = ctx
        .server_repo()
        .find_with_membership(server_id, profile_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Server", server_id.to_string()))?;

    Ok(ServerScope { server, member })
}

/// Resolve a conversation scope for the caller (protocol steps 2-3)
pub async fn resolve_conversation_scope(
    ctx: &ServiceContext,
    conversation_id: Snowflake,
    profile_id: Snowflake,
) -> ServiceResult<ConversationScope> {
    let (conversation, member) = ctx
        .conversation_repo()
        .find_with_membership(conversation_id, profile_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Conversation", conversation_id.to_string()))?;

    Ok(ConversationScope {
        conversation,
        member,
    })
}

fn capability_name(capability: Capability) -> &'static str {
    match capability {
        Capability::EditContent => "EDIT_CONTENT",
        Capability::DeleteContent => "DELETE_CONTENT",
        Capability::ManageChannels => "MANAGE_CHANNELS",
        Capability::ManageMembers => "MANAGE_MEMBERS",
        Capability::ManageServer => "MANAGE_SERVER",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concord_core::entities::Role;

    fn scope(role: Role, owner: bool) -> ServerScope {
        let profile_id = Snowflake::new(10);
        let owner_id = if owner { profile_id } else { Snowflake::new(99) };
        ServerScope {
            server: Server::new(
                Snowflake::new(1),
                "s".to_string(),
                None,
                owner_id,
                "code".to_string(),
            ),
            member: Member::new(Snowflake::new(2), Snowflake::new(1), profile_id, role),
        }
    }

    #[test]
    fn test_admin_cannot_edit_foreign_content() {
        let scope = scope(Role::Admin, false);
        assert!(scope.require(Capability::EditContent, false).is_err());
        assert!(scope.require(Capability::EditContent, true).is_ok());
    }

    #[test]
    fn test_guest_owner_manages_members_but_not_channels() {
        let scope = scope(Role::Guest, true);
        assert!(scope.require_management(Capability::ManageMembers).is_ok());
        assert!(scope.require_management(Capability::ManageChannels).is_err());
    }

    #[test]
    fn test_conversation_scope_ignores_ownership() {
        let conversation_scope = ConversationScope {
            conversation: Conversation::new(Snowflake::new(1), Snowflake::new(2), Snowflake::new(3)),
            member: Member::new(Snowflake::new(2), Snowflake::new(5), Snowflake::new(10), Role::Guest),
        };
        assert!(conversation_scope.require(Capability::DeleteContent, true).is_ok());
        assert!(conversation_scope.require(Capability::DeleteContent, false).is_err());
    }
}
