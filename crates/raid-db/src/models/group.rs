//! Group database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use raid_core::{Group, Snowflake};

/// Database model for the groups table
#[derive(Debug, Clone, FromRow)]
pub struct GroupModel {
    pub id: i64,
    pub host_id: i64,
    pub location: String,
    pub raid_type: String,
    pub time: DateTime<Utc>,
    pub channel_id: i64,
    pub message_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<GroupModel> for Group {
    fn from(model: GroupModel) -> Self {
        Self {
            id: Snowflake::new(model.id),
            host_id: Snowflake::new(model.host_id),
            location: model.location,
            raid_type: model.raid_type,
            time: model.time,
            channel_id: Snowflake::new(model.channel_id),
            message_id: Snowflake::new(model.message_id),
            created_at: model.created_at,
        }
    }
}
