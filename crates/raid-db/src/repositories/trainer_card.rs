//! PostgreSQL implementation of TrainerCardRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use raid_core::{RepoResult, Snowflake, TrainerCard, TrainerCardRepository};

use crate::models::TrainerCardModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TrainerCardRepository
///
/// Read-only; card editing belongs to a different surface of the bot.
#[derive(Clone)]
pub struct PgTrainerCardRepository {
    pool: PgPool,
}

impl PgTrainerCardRepository {
    /// Create a new PgTrainerCardRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrainerCardRepository for PgTrainerCardRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<TrainerCard>> {
        let result = sqlx::query_as::<_, TrainerCardModel>(
            r#"
            SELECT user_id, trainer_name, friend_code
            FROM trainer_cards
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(TrainerCard::from))
    }
}
