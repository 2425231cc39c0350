//! PostgreSQL implementation of ConversationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use concord_core::entities::{Conversation, Member};
use concord_core::traits::{ConversationRepository, RepoResult};
use concord_core::value_objects::Snowflake;

use crate::models::{ConversationModel, ConversationWithMembershipModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ConversationRepository
#[derive(Clone)]
pub struct PgConversationRepository {
    pool: PgPool,
}

impl PgConversationRepository {
    /// Create a new PgConversationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversationRepository for PgConversationRepository {
    #[instrument(skip(self))]
    async fn find_with_membership(
        &self,
        conversation_id: Snowflake,
        profile_id: Snowflake,
    ) -> RepoResult<Option<(Conversation, Member)>> {
        // The caller's member row may sit in either slot.
        let result = sqlx::query_as::<_, ConversationWithMembershipModel>(
            r#"
            SELECT c.id, c.member_one_id, c.member_two_id, c.created_at,
                   m.id AS member_id, m.server_id AS member_server_id,
                   m.profile_id AS member_profile_id, m.role AS member_role,
                   m.joined_at AS member_joined_at, m.updated_at AS member_updated_at
            FROM conversations c
            JOIN members m ON m.id IN (c.member_one_id, c.member_two_id)
            WHERE c.id = $1 AND m.profile_id = $2
            "#,
        )
        .bind(conversation_id.into_inner())
        .bind(profile_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(<(Conversation, Member)>::from))
    }

    #[instrument(skip(self))]
    async fn find_by_members(
        &self,
        member_one_id: Snowflake,
        member_two_id: Snowflake,
    ) -> RepoResult<Option<Conversation>> {
        let result = sqlx::query_as::<_, ConversationModel>(
            r#"
            SELECT id, member_one_id, member_two_id, created_at
            FROM conversations
            WHERE (member_one_id = $1 AND member_two_id = $2)
               OR (member_one_id = $2 AND member_two_id = $1)
            "#,
        )
        .bind(member_one_id.into_inner())
        .bind(member_two_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Conversation::from))
    }

    #[instrument(skip(self, conversation))]
    async fn create(&self, conversation: &Conversation) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO conversations (id, member_one_id, member_two_id, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(conversation.id.into_inner())
        .bind(conversation.member_one_id.into_inner())
        .bind(conversation.member_two_id.into_inner())
        .bind(conversation.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgConversationRepository>();
    }
}
