//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use concord_core::entities::{Member, Role};
use concord_core::traits::{MemberRepository, MemberWithProfile, RepoResult};
use concord_core::value_objects::Snowflake;

use crate::models::{MemberModel, MemberWithProfileModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_in_server(
        &self,
        server_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r#"
            SELECT id, server_id, profile_id, role, joined_at, updated_at
            FROM members
            WHERE id = $2 AND server_id = $1
            "#,
        )
        .bind(server_id.into_inner())
        .bind(member_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self))]
    async fn find_membership(
        &self,
        server_id: Snowflake,
        profile_id: Snowflake,
    ) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r#"
            SELECT id, server_id, profile_id, role, joined_at, updated_at
            FROM members
            WHERE server_id = $1 AND profile_id = $2
            "#,
        )
        .bind(server_id.into_inner())
        .bind(profile_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self))]
    async fn find_by_server(&self, server_id: Snowflake) -> RepoResult<Vec<MemberWithProfile>> {
        // Admins first, then moderators, then guests; stable by join time.
        let results = sqlx::query_as::<_, MemberWithProfileModel>(
            r#"
            SELECT m.id, m.server_id, m.profile_id, m.role, m.joined_at, m.updated_at,
                   p.external_id AS profile_external_id, p.name AS profile_name,
                   p.avatar_url AS profile_avatar_url, p.created_at AS profile_created_at,
                   p.updated_at AS profile_updated_at
            FROM members m
            JOIN profiles p ON p.id = m.profile_id
            WHERE m.server_id = $1
            ORDER BY (CASE m.role WHEN 2 THEN 0 WHEN 1 THEN 1 ELSE 2 END), m.joined_at
            "#,
        )
        .bind(server_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(MemberWithProfile::from).collect())
    }

    #[instrument(skip(self, member))]
    async fn create(&self, member: &Member) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO members (id, server_id, profile_id, role, joined_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(member.id.into_inner())
        .bind(member.server_id.into_inner())
        .bind(member.profile_id.into_inner())
        .bind(member.role.as_i16())
        .bind(member.joined_at)
        .bind(member.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || concord_core::DomainError::AlreadyMember))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_role_excluding(
        &self,
        server_id: Snowflake,
        member_id: Snowflake,
        role: Role,
        protected_profile_id: Snowflake,
    ) -> RepoResult<Option<Member>> {
        // The owner's own row never matches the predicate.
        let result = sqlx::query_as::<_, MemberModel>(
            r#"
            UPDATE members
            SET role = $3, updated_at = NOW()
            WHERE id = $2 AND server_id = $1 AND profile_id <> $4
            RETURNING id, server_id, profile_id, role, joined_at, updated_at
            "#,
        )
        .bind(server_id.into_inner())
        .bind(member_id.into_inner())
        .bind(role.as_i16())
        .bind(protected_profile_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self))]
    async fn delete_excluding(
        &self,
        server_id: Snowflake,
        member_id: Snowflake,
        protected_profile_id: Snowflake,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM members
            WHERE id = $2 AND server_id = $1 AND profile_id <> $3
            "#,
        )
        .bind(server_id.into_inner())
        .bind(member_id.into_inner())
        .bind(protected_profile_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_membership(
        &self,
        server_id: Snowflake,
        profile_id: Snowflake,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM members
            WHERE server_id = $1 AND profile_id = $2
            "#,
        )
        .bind(server_id.into_inner())
        .bind(profile_id.into_inner())
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
        assert_send_sync::<PgMemberRepository>();
    }
}
