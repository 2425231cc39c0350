//! Direct message service
//!
//! The conversation-scoped mirror of the message service: same protocol,
//! same soft-delete semantics, conversation topic and event names.

use concord_cache::{event_names, Topic};
use concord_core::authz::Capability;
use concord_core::entities::{DirectMessage, DELETED_MESSAGE_TOMBSTONE};
use concord_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{
    CreateMessageRequest, DirectMessageResponse, FeedResponse, UpdateMessageRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::feed::FeedPage;
use super::guard::resolve_conversation_scope;

/// Direct message service
pub struct DirectMessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DirectMessageService<'a> {
    /// Create a new DirectMessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Read one feed page, newest first
    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        conversation_id: Snowflake,
        profile_id: Snowflake,
        cursor: Option<Snowflake>,
    ) -> ServiceResult<FeedResponse<DirectMessageResponse>> {
        resolve_conversation_scope(self.ctx, conversation_id, profile_id).await?;

        let page_size = self.ctx.feed_config().page_size;
        let rows = self
            .ctx
            .direct_message_repo()
            .list_page(conversation_id, cursor, page_size)
            .await?;

        let page = FeedPage::assemble(rows, page_size, |row| row.message.id);
        let items = page.items.iter().map(DirectMessageResponse::from).collect();

        Ok(FeedResponse::new(items, page.next_cursor))
    }

    /// Create a new direct message
    #[instrument(skip(self, request))]
    pub async fn create_message(
        &self,
        conversation_id: Snowflake,
        profile_id: Snowflake,
        request: CreateMessageRequest,
    ) -> ServiceResult<DirectMessageResponse> {
        let scope = resolve_conversation_scope(self.ctx, conversation_id, profile_id).await?;

        let message = DirectMessage::new(
            self.ctx.generate_id(),
            conversation_id,
            scope.member.id,
            request.content,
            request.file_url,
        );
        self.ctx.direct_message_repo().create(&message).await?;

        let created = self
            .ctx
            .direct_message_repo()
            .find_in_conversation(conversation_id, message.id)
            .await?
            .ok_or_else(|| ServiceError::internal("created direct message vanished"))?;

        info!(message_id = %message.id, conversation_id = %conversation_id, "Direct message created");

        let response = DirectMessageResponse::from(&created);
        self.ctx
            .broadcast(
                &Topic::conversation(conversation_id).name(),
                event_names::DIRECT_MESSAGE_CREATE,
                &response,
            )
            .await;

        Ok(response)
    }

    /// Edit a direct message's content. Author only.
    #[instrument(skip(self, request))]
    pub async fn update_message(
        &self,
        conversation_id: Snowflake,
        message_id: Snowflake,
        profile_id: Snowflake,
        request: UpdateMessageRequest,
    ) -> ServiceResult<DirectMessageResponse> {
        let scope = resolve_conversation_scope(self.ctx, conversation_id, profile_id).await?;

        let target = self
            .ctx
            .direct_message_repo()
            .find_in_conversation(conversation_id, message_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Direct message", message_id.to_string()))?;

        let is_author = target.message.author_id == scope.member.id;
        scope.require(Capability::EditContent, is_author)?;

        let updated = self
            .ctx
            .direct_message_repo()
            .update_content_if_author(conversation_id, message_id, scope.member.id, &request.content)
            .await?
            .ok_or_else(|| ServiceError::not_found("Direct message", message_id.to_string()))?;

        info!(message_id = %message_id, "Direct message updated");

        let response = DirectMessageResponse::from(&updated);
        self.ctx
            .broadcast(
                &Topic::conversation(conversation_id).name(),
                event_names::DIRECT_MESSAGE_UPDATE,
                &response,
            )
            .await;

        Ok(response)
    }

    /// Soft-delete a direct message. Author, admin, or moderator.
    #[instrument(skip(self))]
    pub async fn delete_message(
        &self,
        conversation_id: Snowflake,
        message_id: Snowflake,
        profile_id: Snowflake,
    ) -> ServiceResult<DirectMessageResponse> {
        let scope = resolve_conversation_scope(self.ctx, conversation_id, profile_id).await?;

        let target = self
            .ctx
            .direct_message_repo()
            .find_in_conversation(conversation_id, message_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Direct message", message_id.to_string()))?;

        let is_author = target.message.author_id == scope.member.id;
        scope.require(Capability::DeleteContent, is_author)?;

        let deleted = self
            .ctx
            .direct_message_repo()
            .soft_delete(conversation_id, message_id, DELETED_MESSAGE_TOMBSTONE)
            .await?
            .ok_or_else(|| ServiceError::not_found("Direct message", message_id.to_string()))?;

        info!(message_id = %message_id, "Direct message deleted");

        let response = DirectMessageResponse::from(&deleted);
        self.ctx
            .broadcast(
                &Topic::conversation(conversation_id).name(),
                event_names::DIRECT_MESSAGE_DELETE,
                &response,
            )
            .await;

        Ok(response)
    }
}
