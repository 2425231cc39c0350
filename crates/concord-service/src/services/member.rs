//! Member service
//!
//! Role changes and removals. Both are owner-only, and the owner's own
//! member row is immutable through this path: the service rejects the owner
//! as target, and the conditional store write excludes the owner's row
//! again so a race cannot slip past.

use concord_cache::{event_names, Topic};
use concord_core::authz::Capability;
use concord_core::entities::Role;
use concord_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::ServerDetailResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::guard::{resolve_server_scope, ServerScope};

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Change a member's role (owner only, owner row immutable)
    #[instrument(skip(self))]
    pub async fn update_role(
        &self,
        server_id: Snowflake,
        member_id: Snowflake,
        profile_id: Snowflake,
        role: Role,
    ) -> ServiceResult<ServerDetailResponse> {
        let scope = resolve_server_scope(self.ctx, server_id, profile_id).await?;
        scope.require_management(Capability::ManageMembers)?;

        let target = self
            .ctx
            .member_repo()
            .find_in_server(server_id, member_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member", member_id.to_string()))?;

        if target.profile_id == scope.server.owner_id {
            return Err(DomainError::OwnerImmutable.into());
        }

        self.ctx
            .member_repo()
            .update_role_excluding(server_id, member_id, role, scope.server.owner_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member", member_id.to_string()))?;

        info!(server_id = %server_id, member_id = %member_id, role = role.label(), "Member role changed");

        let detail = self.server_detail(&scope).await?;
        self.ctx
            .broadcast(
                &Topic::server(server_id).name(),
                event_names::MEMBER_UPDATE,
                &detail,
            )
            .await;

        Ok(detail)
    }

    /// Remove a member from the server (owner only, owner not removable)
    #[instrument(skip(self))]
    pub async fn remove_member(
        &self,
        server_id: Snowflake,
        member_id: Snowflake,
        profile_id: Snowflake,
    ) -> ServiceResult<ServerDetailResponse> {
        let scope = resolve_server_scope(self.ctx, server_id, profile_id).await?;
        scope.require_management(Capability::ManageMembers)?;

        let target = self
            .ctx
            .member_repo()
            .find_in_server(server_id, member_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member", member_id.to_string()))?;

        if target.profile_id == scope.server.owner_id {
            return Err(DomainError::OwnerImmutable.into());
        }

        let removed = self
            .ctx
            .member_repo()
            .delete_excluding(server_id, member_id, scope.server.owner_id)
            .await?;
        if !removed {
            return Err(ServiceError::not_found("Member", member_id.to_string()));
        }

        info!(server_id = %server_id, member_id = %member_id, "Member removed");

        let detail = self.server_detail(&scope).await?;
        self.ctx
            .broadcast(
                &Topic::server(server_id).name(),
                event_names::MEMBER_REMOVE,
                &detail,
            )
            .await;

        Ok(detail)
    }

    /// The server graph returned by member mutations (channels + role-ordered
    /// members with profiles)
    async fn server_detail(&self, scope: &ServerScope) -> ServiceResult<ServerDetailResponse> {
        let channels = self.ctx.channel_repo().find_by_server(scope.server.id).await?;
        let members = self.ctx.member_repo().find_by_server(scope.server.id).await?;
        Ok(ServerDetailResponse::new(&scope.server, &channels, &members))
    }
}
