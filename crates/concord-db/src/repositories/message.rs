//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use concord_core::entities::Message;
use concord_core::traits::{MessageRepository, MessageWithAuthor, RepoResult};
use concord_core::value_objects::Snowflake;

use crate::models::MessageWithAuthorModel;

use super::error::map_db_error;

const AUTHOR_COLUMNS: &str = r#"
       mem.server_id AS member_server_id, mem.profile_id AS member_profile_id,
       mem.role AS member_role, mem.joined_at AS member_joined_at, mem.updated_at AS member_updated_at,
       p.external_id AS profile_external_id, p.name AS profile_name,
       p.avatar_url AS profile_avatar_url, p.created_at AS profile_created_at,
       p.updated_at AS profile_updated_at"#;

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_in_channel(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> RepoResult<Option<MessageWithAuthor>> {
        let sql = format!(
            r#"
            SELECT msg.id, msg.channel_id, msg.author_id, msg.content, msg.file_url,
                   msg.deleted, msg.created_at, msg.updated_at,{AUTHOR_COLUMNS}
            FROM messages msg
            JOIN members mem ON mem.id = msg.author_id
            JOIN profiles p ON p.id = mem.profile_id
            WHERE msg.id = $2 AND msg.channel_id = $1 AND msg.deleted = FALSE
            "#
        );

        let result = sqlx::query_as::<_, MessageWithAuthorModel>(&sql)
            .bind(channel_id.into_inner())
            .bind(message_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(MessageWithAuthor::from))
    }

    #[instrument(skip(self, message))]
    async fn create(&self, message: &Message) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO messages (id, channel_id, author_id, content, file_url, deleted, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, FALSE, $6, $7)
            "#,
        )
        .bind(message.id.into_inner())
        .bind(message.channel_id.into_inner())
        .bind(message.author_id.into_inner())
        .bind(&message.content)
        .bind(message.file_url.as_deref())
        .bind(message.created_at)
        .bind(message.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, content))]
    async fn update_content_if_author(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        author_id: Snowflake,
        content: &str,
    ) -> RepoResult<Option<MessageWithAuthor>> {
        // One statement: the update applies only while the message is still
        // in this channel, not deleted, and owned by the author; the CTE then
        // rebuilds the author graph for the response and broadcast.
        let sql = format!(
            r#"
            WITH updated AS (
                UPDATE messages
                SET content = $4, updated_at = NOW()
                WHERE id = $2 AND channel_id = $1 AND author_id = $3 AND deleted = FALSE
                RETURNING id, channel_id, author_id, content, file_url, deleted, created_at, updated_at
            )
            SELECT msg.id, msg.channel_id, msg.author_id, msg.content, msg.file_url,
                   msg.deleted, msg.created_at, msg.updated_at,{AUTHOR_COLUMNS}
            FROM updated msg
            JOIN members mem ON mem.id = msg.author_id
            JOIN profiles p ON p.id = mem.profile_id
            "#
        );

        let result = sqlx::query_as::<_, MessageWithAuthorModel>(&sql)
            .bind(channel_id.into_inner())
            .bind(message_id.into_inner())
            .bind(author_id.into_inner())
            .bind(content)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(MessageWithAuthor::from))
    }

    #[instrument(skip(self, tombstone))]
    async fn soft_delete(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        tombstone: &str,
    ) -> RepoResult<Option<MessageWithAuthor>> {
        // `deleted = FALSE` in the predicate makes the terminal state sticky:
        // a second delete (or an edit racing a delete) matches zero rows.
        let sql = format!(
            r#"
            WITH updated AS (
                UPDATE messages
                SET content = $3, file_url = NULL, deleted = TRUE, updated_at = NOW()
                WHERE id = $2 AND channel_id = $1 AND deleted = FALSE
                RETURNING id, channel_id, author_id, content, file_url, deleted, created_at, updated_at
            )
            SELECT msg.id, msg.channel_id, msg.author_id, msg.content, msg.file_url,
                   msg.deleted, msg.created_at, msg.updated_at,{AUTHOR_COLUMNS}
            FROM updated msg
            JOIN members mem ON mem.id = msg.author_id
            JOIN profiles p ON p.id = mem.profile_id
            "#
        );

        let result = sqlx::query_as::<_, MessageWithAuthorModel>(&sql)
            .bind(channel_id.into_inner())
            .bind(message_id.into_inner())
            .bind(tombstone)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(MessageWithAuthor::from))
    }

    #[instrument(skip(self))]
    async fn list_page(
        &self,
        channel_id: Snowflake,
        before: Option<Snowflake>,
        limit: i64,
    ) -> RepoResult<Vec<MessageWithAuthor>> {
        // Snowflakes order by creation time, so `id DESC` is newest-first
        // with a deterministic tiebreak. Tombstoned rows stay visible.
        let results = match before {
            Some(cursor) => {
                let sql = format!(
                    r#"
                    SELECT msg.id, msg.channel_id, msg.author_id, msg.content, msg.file_url,
                           msg.deleted, msg.created_at, msg.updated_at,{AUTHOR_COLUMNS}
                    FROM messages msg
                    JOIN members mem ON mem.id = msg.author_id
                    JOIN profiles p ON p.id = mem.profile_id
                    WHERE msg.channel_id = $1 AND msg.id < $2
                    ORDER BY msg.id DESC
                    LIMIT $3
                    "#
                );
                sqlx::query_as::<_, MessageWithAuthorModel>(&sql)
                    .bind(channel_id.into_inner())
                    .bind(cursor.into_inner())
                    .bind(limit)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let sql = format!(
                    r#"
                    SELECT msg.id, msg.channel_id, msg.author_id, msg.content, msg.file_url,
                           msg.deleted, msg.created_at, msg.updated_at,{AUTHOR_COLUMNS}
                    FROM messages msg
                    JOIN members mem ON mem.id = msg.author_id
                    JOIN profiles p ON p.id = mem.profile_id
                    WHERE msg.channel_id = $1
                    ORDER BY msg.id DESC
                    LIMIT $2
                    "#
                );
                sqlx::query_as::<_, MessageWithAuthorModel>(&sql)
                    .bind(channel_id.into_inner())
                    .bind(limit)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(MessageWithAuthor::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgMessageRepository>();
    }
}
