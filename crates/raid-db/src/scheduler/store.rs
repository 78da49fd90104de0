//! PostgreSQL-backed job store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use raid_core::{JobScheduler, RepoResult, ScheduledJob};

use crate::models::ScheduledJobModel;
use crate::repositories::map_db_error;

/// PostgreSQL implementation of JobScheduler
#[derive(Clone)]
pub struct PgJobScheduler {
    pool: PgPool,
}

impl PgJobScheduler {
    /// Create a new PgJobScheduler
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch jobs whose fire time has passed, oldest first
    #[instrument(skip(self))]
    pub async fn due(&self, now: DateTime<Utc>, limit: i64) -> RepoResult<Vec<ScheduledJobModel>> {
        let results = sqlx::query_as::<_, ScheduledJobModel>(
            r#"
            SELECT id, name, fire_at, payload, created_at
            FROM scheduled_jobs
            WHERE fire_at <= $1
            ORDER BY fire_at
            LIMIT $2
            "#,
        )
        .bind(now)
        .bind(limit.clamp(1, 100))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results)
    }

    /// Remove a job row after its handler succeeded
    #[instrument(skip(self))]
    pub async fn complete(&self, id: i64) -> RepoResult<()> {
        sqlx::query(
            r#"
            DELETE FROM scheduled_jobs WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl JobScheduler for PgJobScheduler {
    #[instrument(skip(self, job), fields(name = %job.name, fire_at = %job.fire_at))]
    async fn schedule(&self, job: ScheduledJob) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO scheduled_jobs (name, fire_at, payload)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&job.name)
        .bind(job.fire_at)
        .bind(&job.payload)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
