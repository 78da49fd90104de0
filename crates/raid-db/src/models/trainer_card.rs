//! Trainer card database model

use sqlx::FromRow;

use raid_core::{Snowflake, TrainerCard};

/// Database model for the trainer_cards table
#[derive(Debug, Clone, FromRow)]
pub struct TrainerCardModel {
    pub user_id: i64,
    pub trainer_name: String,
    pub friend_code: String,
}

impl From<TrainerCardModel> for TrainerCard {
    fn from(model: TrainerCardModel) -> Self {
        Self {
            user_id: Snowflake::new(model.user_id),
            trainer_name: model.trainer_name,
            friend_code: model.friend_code,
        }
    }
}
