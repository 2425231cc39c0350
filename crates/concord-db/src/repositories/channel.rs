//! PostgreSQL implementation of ChannelRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use concord_core::entities::{Channel, ChannelKind, RESERVED_CHANNEL_NAME};
use concord_core::traits::{ChannelRepository, RepoResult};
use concord_core::value_objects::Snowflake;

use crate::models::ChannelModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ChannelRepository
#[derive(Clone)]
pub struct PgChannelRepository {
    pool: PgPool,
}

impl PgChannelRepository {
    /// Create a new PgChannelRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChannelRepository for PgChannelRepository {
    #[instrument(skip(self))]
    async fn find_in_server(
        &self,
        server_id: Snowflake,
        channel_id: Snowflake,
    ) -> RepoResult<Option<Channel>> {
        let result = sqlx::query_as::<_, ChannelModel>(
            r#"
            SELECT id, server_id, name, kind, created_by, created_at, updated_at
            FROM channels
            WHERE id = $2 AND server_id = $1
            "#,
        )
        .bind(server_id.into_inner())
        .bind(channel_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Channel::from))
    }

    #[instrument(skip(self))]
    async fn find_by_server(&self, server_id: Snowflake) -> RepoResult<Vec<Channel>> {
        let results = sqlx::query_as::<_, ChannelModel>(
            r#"
            SELECT id, server_id, name, kind, created_by, created_at, updated_at
            FROM channels
            WHERE server_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(server_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Channel::from).collect())
    }

    #[instrument(skip(self, channel))]
    async fn create(&self, channel: &Channel) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO channels (id, server_id, name, kind, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(channel.id.into_inner())
        .bind(channel.server_id.into_inner())
        .bind(&channel.name)
        .bind(channel.kind.as_i16())
        .bind(channel.created_by.into_inner())
        .bind(channel.created_at)
        .bind(channel.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_in_server(
        &self,
        server_id: Snowflake,
        channel_id: Snowflake,
        name: &str,
        kind: ChannelKind,
    ) -> RepoResult<Option<Channel>> {
        // The name predicate keeps the default channel out of reach even if
        // a racing request resolved it before the rename landed.
        let result = sqlx::query_as::<_, ChannelModel>(
            r#"
            UPDATE channels
            SET name = $3, kind = $4, updated_at = NOW()
            WHERE id = $2 AND server_id = $1 AND name <> $5
            RETURNING id, server_id, name, kind, created_by, created_at, updated_at
            "#,
        )
        .bind(server_id.into_inner())
        .bind(channel_id.into_inner())
        .bind(name)
        .bind(kind.as_i16())
        .bind(RESERVED_CHANNEL_NAME)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Channel::from))
    }

    #[instrument(skip(self))]
    async fn delete_in_server(&self, server_id: Snowflake, channel_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM channels
            WHERE id = $2 AND server_id = $1 AND name <> $3
            "#,
        )
        .bind(server_id.into_inner())
        .bind(channel_id.into_inner())
        .bind(RESERVED_CHANNEL_NAME)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgChannelRepository>();
    }
}
