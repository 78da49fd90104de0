//! Expiration service
//!
//! The handler behind the deferred group deletion job. The runner invokes it
//! at least once per due job, so every step treats "already gone" as success;
//! a re-delivered job after a crash or a racing cancellation lands on the
//! same terminal state.

use async_trait::async_trait;
use tracing::{info, instrument};

use raid_core::{
    DomainError, ExpirationJob, JobHandler, RepoResult, DELETE_GROUP_JOB,
};

use super::context::ServiceContext;

/// Expiration service
///
/// Owns its context so it can be registered with the job runner and outlive
/// any single request.
pub struct ExpirationService {
    ctx: ServiceContext,
}

impl ExpirationService {
    /// Create a new ExpirationService
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Tear down an expired group and retract its invite message
    #[instrument(skip(self))]
    async fn expire(&self, job: ExpirationJob) -> RepoResult<()> {
        let Some(group) = self.ctx.groups().find_by_id(job.group_id).await? else {
            // Already canceled or expired
            return Ok(());
        };

        if let Err(e) = self
            .ctx
            .gateway()
            .delete_message(job.channel_id, group.message_id)
            .await
        {
            if !e.is_not_found() {
                return Err(e);
            }
        }

        self.ctx.groups().delete(group.id).await?;

        info!(
            group_id = %group.id,
            host_id = %group.host_id,
            location = %group.location,
            "Raid group expired"
        );
        Ok(())
    }
}

#[async_trait]
impl JobHandler for ExpirationService {
    fn name(&self) -> &'static str {
        DELETE_GROUP_JOB
    }

    async fn handle(&self, payload: serde_json::Value) -> RepoResult<()> {
        let job: ExpirationJob = serde_json::from_value(payload)
            .map_err(|e| DomainError::SchedulerError(format!("Bad expiration payload: {e}")))?;
        self.expire(job).await
    }
}
