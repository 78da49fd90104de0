//! Scheduled job database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the scheduled_jobs table
///
/// Rows stay in the table until their handler succeeds, which is what makes
/// dispatch at-least-once across process restarts.
#[derive(Debug, Clone, FromRow)]
pub struct ScheduledJobModel {
    pub id: i64,
    pub name: String,
    pub fire_at: DateTime<Utc>,
    pub payload: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
