//! Conversation service
//!
//! Get-or-create of the one conversation between two members of a server.

use concord_core::entities::Conversation;
use concord_core::traits::MemberWithProfile;
use concord_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::ConversationResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::guard::resolve_server_scope;

/// Conversation service
pub struct ConversationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ConversationService<'a> {
    /// Create a new ConversationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Open the conversation between the caller and another member of the
    /// same server, creating it on first contact. Slot order is whoever
    /// opened first; lookups check both orderings.
    #[instrument(skip(self))]
    pub async fn open_conversation(
        &self,
        server_id: Snowflake,
        profile_id: Snowflake,
        target_member_id: Snowflake,
    ) -> ServiceResult<ConversationResponse> {
        let scope = resolve_server_scope(self.ctx, server_id, profile_id).await?;

        let target = self
            .ctx
            .member_repo()
            .find_in_server(server_id, target_member_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member", target_member_id.to_string()))?;

        let existing = self
            .ctx
            .conversation_repo()
            .find_by_members(scope.member.id, target.id)
            .await?;

        let conversation = match existing {
            Some(conversation) => conversation,
            None => {
                let conversation =
                    Conversation::new(self.ctx.generate_id(), scope.member.id, target.id);
                self.ctx.conversation_repo().create(&conversation).await?;
                info!(conversation_id = %conversation.id, "Conversation created");
                conversation
            }
        };

        let member_one = self.member_with_profile(server_id, conversation.member_one_id).await?;
        let member_two = self.member_with_profile(server_id, conversation.member_two_id).await?;

        Ok(ConversationResponse::new(&conversation, &member_one, &member_two))
    }

    async fn member_with_profile(
        &self,
        server_id: Snowflake,
        member_id: Snowflake,
    ) -> ServiceResult<MemberWithProfile> {
        let member = self
            .ctx
            .member_repo()
            .find_in_server(server_id, member_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member", member_id.to_string()))?;

        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(member.profile_id)
            .await?
            .ok_or_else(|| ServiceError::internal("member without profile"))?;

        Ok(MemberWithProfile { member, profile })
    }
}
