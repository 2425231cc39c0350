//! Message service
//!
//! Channel message feed, creation, editing, and soft deletion. Mutations
//! follow the gated protocol: scope, target, capability predicate, one
//! conditional store write, best-effort broadcast.

use concord_cache::{event_names, Topic};
use concord_core::authz::Capability;
use concord_core::entities::{Message, DELETED_MESSAGE_TOMBSTONE};
use concord_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CreateMessageRequest, FeedResponse, MessageResponse, UpdateMessageRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::feed::FeedPage;
use super::guard::{resolve_server_scope, ServerScope};

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Read one feed page, newest first
    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        server_id: Snowflake,
        channel_id: Snowflake,
        profile_id: Snowflake,
        cursor: Option<Snowflake>,
    ) -> ServiceResult<FeedResponse<MessageResponse>> {
        let scope = resolve_server_scope(self.ctx, server_id, profile_id).await?;
        self.resolve_channel(&scope, channel_id).await?;

        let page_size = self.ctx.feed_config().page_size;
        let rows = self
            .ctx
            .message_repo()
            .list_page(channel_id, cursor, page_size)
            .await?;

        let page = FeedPage::assemble(rows, page_size, |row| row.message.id);
        let items = page.items.iter().map(MessageResponse::from).collect();

        Ok(FeedResponse::new(items, page.next_cursor))
    }

    /// Create a new message
    #[instrument(skip(self, request))]
    pub async fn create_message(
        &self,
        server_id: Snowflake,
        channel_id: Snowflake,
        profile_id: Snowflake,
        request: CreateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let scope = resolve_server_scope(self.ctx, server_id, profile_id).await?;
        self.resolve_channel(&scope, channel_id).await?;

        let message = Message::new(
            self.ctx.generate_id(),
            channel_id,
            scope.member.id,
            request.content,
            request.file_url,
        );
        self.ctx.message_repo().create(&message).await?;

        // Re-read through the scoped lookup to return the author graph.
        let created = self
            .ctx
            .message_repo()
            .find_in_channel(channel_id, message.id)
            .await?
            .ok_or_else(|| ServiceError::internal("created message vanished"))?;

        info!(message_id = %message.id, channel_id = %channel_id, "Message created");

        let response = MessageResponse::from(&created);
        self.ctx
            .broadcast(
                &Topic::channel(channel_id).name(),
                event_names::MESSAGE_CREATE,
                &response,
            )
            .await;

        Ok(response)
    }

    /// Edit a message's content. Author only; role elevation grants nothing.
    #[instrument(skip(self, request))]
    pub async fn update_message(
        &self,
        server_id: Snowflake,
        channel_id: Snowflake,
        message_id: Snowflake,
        profile_id: Snowflake,
        request: UpdateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let scope = resolve_server_scope(self.ctx, server_id, profile_id).await?;
        self.resolve_channel(&scope, channel_id).await?;

        let target = self
            .ctx
            .message_repo()
            .find_in_channel(channel_id, message_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Message", message_id.to_string()))?;

        let is_author = target.message.author_id == scope.member.id;
        scope.require(Capability::EditContent, is_author)?;

        // The write re-checks channel, author, and the deleted flag; a race
        // that invalidates any of them surfaces as NotFound.
        let updated = self
            .ctx
            .message_repo()
            .update_content_if_author(channel_id, message_id, scope.member.id, &request.content)
            .await?
            .ok_or_else(|| ServiceError::not_found("Message", message_id.to_string()))?;

        info!(message_id = %message_id, "Message updated");

        let response = MessageResponse::from(&updated);
        self.ctx
            .broadcast(
                &Topic::channel(channel_id).name(),
                event_names::MESSAGE_UPDATE,
                &response,
            )
            .await;

        Ok(response)
    }

    /// Soft-delete a message. Author, admin, or moderator.
    #[instrument(skip(self))]
    pub async fn delete_message(
        &self,
        server_id: Snowflake,
        channel_id: Snowflake,
        message_id: Snowflake,
        profile_id: Snowflake,
    ) -> ServiceResult<MessageResponse> {
        let scope = resolve_server_scope(self.ctx, server_id, profile_id).await?;
        self.resolve_channel(&scope, channel_id).await?;

        let target = self
            .ctx
            .message_repo()
            .find_in_channel(channel_id, message_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Message", message_id.to_string()))?;

        let is_author = target.message.author_id == scope.member.id;
        scope.require(Capability::DeleteContent, is_author)?;

        let deleted = self
            .ctx
            .message_repo()
            .soft_delete(channel_id, message_id, DELETED_MESSAGE_TOMBSTONE)
            .await?
            .ok_or_else(|| ServiceError::not_found("Message", message_id.to_string()))?;

        info!(message_id = %message_id, "Message deleted");

        let response = MessageResponse::from(&deleted);
        self.ctx
            .broadcast(
                &Topic::channel(channel_id).name(),
                event_names::MESSAGE_DELETE,
                &response,
            )
            .await;

        Ok(response)
    }

    /// Protocol step 4 for the enclosing channel: scoped resolution only
    async fn resolve_channel(
        &self,
        scope: &ServerScope,
        channel_id: Snowflake,
    ) -> ServiceResult<()> {
        self.ctx
            .channel_repo()
            .find_in_server(scope.server.id, channel_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Channel", channel_id.to_string()))?;
        Ok(())
    }
}
