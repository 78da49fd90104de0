//! Durable scheduler port
//!
//! A scheduled job is a (name, fire time, payload) record. The backing store
//! persists it and invokes the handler registered for the name at or after the
//! fire time, at least once, surviving process restarts. The concrete store is
//! an implementation choice of the infrastructure layer.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::entities::Group;
use crate::traits::repositories::RepoResult;
use crate::value_objects::Snowflake;

/// Job tag for the deferred group deletion
pub const DELETE_GROUP_JOB: &str = "delete-raid-group";

/// Payload of the deferred group deletion job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationJob {
    pub group_id: Snowflake,
    pub channel_id: Snowflake,
}

/// A durable deferred job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledJob {
    /// Fixed tag identifying the job kind; selects the handler
    pub name: String,
    pub fire_at: DateTime<Utc>,
    pub payload: serde_json::Value,
}

impl ScheduledJob {
    /// The deferred deletion job for a freshly created group
    pub fn expiration(group: &Group) -> Self {
        Self {
            name: DELETE_GROUP_JOB.to_string(),
            fire_at: group.expires_at(),
            payload: json!(ExpirationJob {
                group_id: group.id,
                channel_id: group.channel_id,
            }),
        }
    }
}

/// Registers durable jobs
#[async_trait]
pub trait JobScheduler: Send + Sync {
    async fn schedule(&self, job: ScheduledJob) -> RepoResult<()>;
}

/// Handles due jobs of one kind; registered with the runner by name
#[async_trait]
pub trait JobHandler: Send + Sync {
    /// The job tag this handler owns
    fn name(&self) -> &'static str;

    /// Invoked at-least-once per due job; must be idempotent
    async fn handle(&self, payload: serde_json::Value) -> RepoResult<()>;
}
