//! Server service
//!
//! Server lifecycle: creation (with the default channel and the creator's
//! admin membership), owner-gated updates and deletion, invite-code
//! regeneration, joining by invite code, and leaving.

use concord_cache::{event_names, Topic};
use concord_core::authz::Capability;
use concord_core::entities::{Channel, Member, Role, Server};
use concord_core::traits::ServerPatch;
use concord_core::{DomainError, Snowflake};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateServerRequest, ServerDetailResponse, ServerResponse, UpdateServerRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::guard::resolve_server_scope;

/// Server service
pub struct ServerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ServerService<'a> {
    /// Create a new ServerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a server with its default channel and the creator as admin
    #[instrument(skip(self, request))]
    pub async fn create_server(
        &self,
        profile_id: Snowflake,
        request: CreateServerRequest,
    ) -> ServiceResult<ServerDetailResponse> {
        let server = Server::new(
            self.ctx.generate_id(),
            request.name,
            request.image_url,
            profile_id,
            new_invite_code(),
        );
        self.ctx.server_repo().create(&server).await?;

        let general = Channel::new_default(self.ctx.generate_id(), server.id, profile_id);
        self.ctx.channel_repo().create(&general).await?;

        let creator = Member::new(self.ctx.generate_id(), server.id, profile_id, Role::Admin);
        self.ctx.member_repo().create(&creator).await?;

        info!(server_id = %server.id, owner_id = %profile_id, "Server created");

        self.detail(&server).await
    }

    /// List servers the caller belongs to
    #[instrument(skip(self))]
    pub async fn list_servers(&self, profile_id: Snowflake) -> ServiceResult<Vec<ServerResponse>> {
        let servers = self.ctx.server_repo().find_by_profile(profile_id).await?;
        Ok(servers.iter().map(ServerResponse::from).collect())
    }

    /// Get one server with channels and members
    #[instrument(skip(self))]
    pub async fn get_server(
        &self,
        server_id: Snowflake,
        profile_id: Snowflake,
    ) -> ServiceResult<ServerDetailResponse> {
        let scope = resolve_server_scope(self.ctx, server_id, profile_id).await?;
        self.detail(&scope.server).await
    }

    /// Update server name/image (owner only)
    #[instrument(skip(self, request))]
    pub async fn update_server(
        &self,
        server_id: Snowflake,
        profile_id: Snowflake,
        request: UpdateServerRequest,
    ) -> ServiceResult<ServerResponse> {
        let scope = resolve_server_scope(self.ctx, server_id, profile_id).await?;
        scope.require_management(Capability::ManageServer)?;

        let patch = ServerPatch {
            name: request.name,
            image_url: request.image_url,
            invite_code: None,
        };
        let updated = self
            .ctx
            .server_repo()
            .update_if_owner(server_id, profile_id, patch)
            .await?
            .ok_or_else(|| ServiceError::not_found("Server", server_id.to_string()))?;

        info!(server_id = %server_id, "Server updated");

        let response = ServerResponse::from(&updated);
        self.ctx
            .broadcast(
                &Topic::server(server_id).name(),
                event_names::SERVER_UPDATE,
                &response,
            )
            .await;

        Ok(response)
    }

    /// Delete a server (owner only)
    #[instrument(skip(self))]
    pub async fn delete_server(
        &self,
        server_id: Snowflake,
        profile_id: Snowflake,
    ) -> ServiceResult<()> {
        let scope = resolve_server_scope(self.ctx, server_id, profile_id).await?;
        scope.require_management(Capability::ManageServer)?;

        let removed = self
            .ctx
            .server_repo()
            .delete_if_owner(server_id, profile_id)
            .await?;
        if !removed {
            return Err(ServiceError::not_found("Server", server_id.to_string()));
        }

        info!(server_id = %server_id, "Server deleted");

        Ok(())
    }

    /// Replace the invite code (owner only)
    #[instrument(skip(self))]
    pub async fn regenerate_invite_code(
        &self,
        server_id: Snowflake,
        profile_id: Snowflake,
    ) -> ServiceResult<ServerResponse> {
        let scope = resolve_server_scope(self.ctx, server_id, profile_id).await?;
        scope.require_management(Capability::ManageServer)?;

        let patch = ServerPatch {
            name: None,
            image_url: None,
            invite_code: Some(new_invite_code()),
        };
        let updated = self
            .ctx
            .server_repo()
            .update_if_owner(server_id, profile_id, patch)
            .await?
            .ok_or_else(|| ServiceError::not_found("Server", server_id.to_string()))?;

        info!(server_id = %server_id, "Invite code regenerated");

        Ok(ServerResponse::from(&updated))
    }

    /// Join a server via its invite code (as guest)
    #[instrument(skip(self, invite_code))]
    pub async fn join_by_invite(
        &self,
        invite_code: &str,
        profile_id: Snowflake,
    ) -> ServiceResult<ServerDetailResponse> {
        let server = self
            .ctx
            .server_repo()
            .find_by_invite_code(invite_code)
            .await?
            .ok_or_else(|| DomainError::InviteNotFound(invite_code.to_string()))?;

        if self
            .ctx
            .member_repo()
            .find_membership(server.id, profile_id)
            .await?
            .is_some()
        {
            return Err(DomainError::AlreadyMember.into());
        }

        let member = Member::new(self.ctx.generate_id(), server.id, profile_id, Role::Guest);
        self.ctx.member_repo().create(&member).await?;

        info!(server_id = %server.id, profile_id = %profile_id, "Member joined via invite");

        self.detail(&server).await
    }

    /// Leave a server. The owner cannot leave their own server.
    #[instrument(skip(self))]
    pub async fn leave_server(
        &self,
        server_id: Snowflake,
        profile_id: Snowflake,
    ) -> ServiceResult<()> {
        let scope = resolve_server_scope(self.ctx, server_id, profile_id).await?;

        if scope.is_owner() {
            return Err(DomainError::CannotLeaveOwnedServer.into());
        }

        self.ctx
            .member_repo()
            .delete_membership(server_id, profile_id)
            .await?;

        info!(server_id = %server_id, profile_id = %profile_id, "Member left server");

        Ok(())
    }

    async fn detail(&self, server: &Server) -> ServiceResult<ServerDetailResponse> {
        let channels = self.ctx.channel_repo().find_by_server(server.id).await?;
        let members = self.ctx.member_repo().find_by_server(server.id).await?;
        Ok(ServerDetailResponse::new(server, &channels, &members))
    }
}

/// Fresh invite code (UUID text form)
fn new_invite_code() -> String {
    Uuid::new_v4().to_string()
}
