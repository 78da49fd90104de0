//! PostgreSQL implementation of GroupRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use raid_core::{Group, GroupRepository, NewGroup, RepoResult, Snowflake};

use crate::models::GroupModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of GroupRepository
///
/// The `(host_id, location)` uniqueness invariant is enforced by a unique
/// index, so two near-simultaneous creation requests for the same key cannot
/// both insert; the loser surfaces as `DuplicateGroup`.
#[derive(Clone)]
pub struct PgGroupRepository {
    pool: PgPool,
}

impl PgGroupRepository {
    /// Create a new PgGroupRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepository {
    #[instrument(skip(self))]
    async fn find(&self, host_id: Snowflake, location: &str) -> RepoResult<Option<Group>> {
        let result = sqlx::query_as::<_, GroupModel>(
            r#"
            SELECT id, host_id, location, raid_type, time, channel_id, message_id, created_at
            FROM groups
            WHERE host_id = $1 AND location = $2
            "#,
        )
        .bind(host_id.into_inner())
        .bind(location)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Group::from))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Group>> {
        let result = sqlx::query_as::<_, GroupModel>(
            r#"
            SELECT id, host_id, location, raid_type, time, channel_id, message_id, created_at
            FROM groups
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Group::from))
    }

    #[instrument(skip(self, group))]
    async fn create(&self, group: &NewGroup) -> RepoResult<Group> {
        let result = sqlx::query_as::<_, GroupModel>(
            r#"
            INSERT INTO groups (host_id, location, raid_type, time, channel_id, message_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, host_id, location, raid_type, time, channel_id, message_id, created_at
            "#,
        )
        .bind(group.host_id.into_inner())
        .bind(&group.location)
        .bind(&group.raid_type)
        .bind(group.time)
        .bind(group.channel_id.into_inner())
        .bind(group.message_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || raid_core::DomainError::DuplicateGroup(group.location.clone()))
        })?;

        Ok(Group::from(result))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM groups WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
