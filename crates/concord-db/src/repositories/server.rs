//! PostgreSQL implementation of ServerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use concord_core::entities::{Member, Server};
use concord_core::traits::{RepoResult, ServerPatch, ServerRepository};
use concord_core::value_objects::Snowflake;

use crate::models::{ServerModel, ServerWithMembershipModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ServerRepository
#[derive(Clone)]
pub struct PgServerRepository {
    pool: PgPool,
}

impl PgServerRepository {
    /// Create a new PgServerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServerRepository for PgServerRepository {
    #[instrument(skip(self))]
    async fn find_with_membership(
        &self,
        server_id: Snowflake,
        profile_id: Snowflake,
    ) -> RepoResult<Option<(Server, Member)>> {
        // The join doubles as the visibility check: no member row, no server.
        let result = sqlx::query_as::<_, ServerWithMembershipModel>(
            r#"
            SELECT s.id, s.name, s.image_url, s.owner_id, s.invite_code, s.created_at, s.updated_at,
                   m.id AS member_id, m.profile_id AS member_profile_id, m.role AS member_role,
                   m.joined_at AS member_joined_at, m.updated_at AS member_updated_at
            FROM servers s
            JOIN members m ON m.server_id = s.id
            WHERE s.id = $1 AND m.profile_id = $2
            "#,
        )
        .bind(server_id.into_inner())
        .bind(profile_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(<(Server, Member)>::from))
    }

    #[instrument(skip(self))]
    async fn find_by_invite_code(&self, invite_code: &str) -> RepoResult<Option<Server>> {
        let result = sqlx::query_as::<_, ServerModel>(
            r#"
            SELECT id, name, image_url, owner_id, invite_code, created_at, updated_at
            FROM servers
            WHERE invite_code = $1
            "#,
        )
        .bind(invite_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Server::from))
    }

    #[instrument(skip(self))]
    async fn find_by_profile(&self, profile_id: Snowflake) -> RepoResult<Vec<Server>> {
        let results = sqlx::query_as::<_, ServerModel>(
            r#"
            SELECT s.id, s.name, s.image_url, s.owner_id, s.invite_code, s.created_at, s.updated_at
            FROM servers s
            JOIN members m ON m.server_id = s.id
            WHERE m.profile_id = $1
            ORDER BY s.created_at
            "#,
        )
        .bind(profile_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Server::from).collect())
    }

    #[instrument(skip(self, server))]
    async fn create(&self, server: &Server) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO servers (id, name, image_url, owner_id, invite_code, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(server.id.into_inner())
        .bind(&server.name)
        .bind(server.image_url.as_deref())
        .bind(server.owner_id.into_inner())
        .bind(&server.invite_code)
        .bind(server.created_at)
        .bind(server.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, patch))]
    async fn update_if_owner(
        &self,
        server_id: Snowflake,
        owner_id: Snowflake,
        patch: ServerPatch,
    ) -> RepoResult<Option<Server>> {
        let result = sqlx::query_as::<_, ServerModel>(
            r#"
            UPDATE servers
            SET name = COALESCE($3, name),
                image_url = COALESCE($4, image_url),
                invite_code = COALESCE($5, invite_code),
                updated_at = NOW()
            WHERE id = $1 AND owner_id = $2
            RETURNING id, name, image_url, owner_id, invite_code, created_at, updated_at
            "#,
        )
        .bind(server_id.into_inner())
        .bind(owner_id.into_inner())
        .bind(patch.name)
        .bind(patch.image_url)
        .bind(patch.invite_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Server::from))
    }

    #[instrument(skip(self))]
    async fn delete_if_owner(&self, server_id: Snowflake, owner_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM servers
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(server_id.into_inner())
        .bind(owner_id.into_inner())
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
        assert_send_sync::<PgServerRepository>();
    }
}
