//! Channel service
//!
//! Channel creation, renaming, and deletion. All three are gated on the
//! ManageChannels capability (admin or moderator), and the reserved default
//! channel is immutable.

use concord_cache::{event_names, Topic};
use concord_core::authz::Capability;
use concord_core::entities::{Channel, RESERVED_CHANNEL_NAME};
use concord_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{ChannelResponse, CreateChannelRequest, UpdateChannelRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::guard::resolve_server_scope;

/// Channel service
pub struct ChannelService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChannelService<'a> {
    /// Create a new ChannelService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new channel
    #[instrument(skip(self, request))]
    pub async fn create_channel(
        &self,
        server_id: Snowflake,
        profile_id: Snowflake,
        request: CreateChannelRequest,
    ) -> ServiceResult<ChannelResponse> {
        // Exact-match reservation, rejected before any role consideration.
        if request.name == RESERVED_CHANNEL_NAME {
            return Err(DomainError::ReservedChannelName(request.name).into());
        }

        let scope = resolve_server_scope(self.ctx, server_id, profile_id).await?;
        scope.require_management(Capability::ManageChannels)?;

        let channel = Channel::new(
            self.ctx.generate_id(),
            server_id,
            request.name,
            request.kind,
            profile_id,
        );
        self.ctx.channel_repo().create(&channel).await?;

        info!(channel_id = %channel.id, server_id = %server_id, "Channel created");

        let response = ChannelResponse::from(&channel);
        self.ctx
            .broadcast(
                &Topic::server(server_id).name(),
                event_names::CHANNEL_CREATE,
                &response,
            )
            .await;

        Ok(response)
    }

    /// Rename or retype a channel
    #[instrument(skip(self, request))]
    pub async fn update_channel(
        &self,
        server_id: Snowflake,
        channel_id: Snowflake,
        profile_id: Snowflake,
        request: UpdateChannelRequest,
    ) -> ServiceResult<ChannelResponse> {
        if request.name == RESERVED_CHANNEL_NAME {
            return Err(DomainError::ReservedChannelName(request.name).into());
        }

        let scope = resolve_server_scope(self.ctx, server_id, profile_id).await?;
        scope.require_management(Capability::ManageChannels)?;

        let target = self
            .ctx
            .channel_repo()
            .find_in_server(server_id, channel_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Channel", channel_id.to_string()))?;

        if target.is_default() {
            return Err(DomainError::DefaultChannelImmutable.into());
        }

        let updated = self
            .ctx
            .channel_repo()
            .update_in_server(server_id, channel_id, &request.name, request.kind)
            .await?
            .ok_or_else(|| ServiceError::not_found("Channel", channel_id.to_string()))?;

        info!(channel_id = %channel_id, "Channel updated");

        let response = ChannelResponse::from(&updated);
        self.ctx
            .broadcast(
                &Topic::server(server_id).name(),
                event_names::CHANNEL_UPDATE,
                &response,
            )
            .await;

        Ok(response)
    }

    /// Delete a channel
    #[instrument(skip(self))]
    pub async fn delete_channel(
        &self,
        server_id: Snowflake,
        channel_id: Snowflake,
        profile_id: Snowflake,
    ) -> ServiceResult<()> {
        let scope = resolve_server_scope(self.ctx, server_id, profile_id).await?;
        scope.require_management(Capability::ManageChannels)?;

        let target = self
            .ctx
            .channel_repo()
            .find_in_server(server_id, channel_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Channel", channel_id.to_string()))?;

        if target.is_default() {
            return Err(DomainError::DefaultChannelImmutable.into());
        }

        let removed = self
            .ctx
            .channel_repo()
            .delete_in_server(server_id, channel_id)
            .await?;
        if !removed {
            return Err(ServiceError::not_found("Channel", channel_id.to_string()));
        }

        info!(channel_id = %channel_id, server_id = %server_id, "Channel deleted");

        let response = ChannelResponse::from(&target);
        self.ctx
            .broadcast(
                &Topic::server(server_id).name(),
                event_names::CHANNEL_DELETE,
                &response,
            )
            .await;

        Ok(())
    }
}
