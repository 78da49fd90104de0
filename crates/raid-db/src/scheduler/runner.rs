//! Polling job runner

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use raid_core::{JobHandler, RepoResult};

use super::store::PgJobScheduler;

const DISPATCH_BATCH_SIZE: i64 = 50;

/// Polls the job store and dispatches due jobs to their handlers
///
/// Each handler owns one job name. A job row is deleted only after its handler
/// returns Ok; a failing handler leaves the row in place to be retried on the
/// next poll, so handlers must be idempotent.
pub struct JobRunner {
    store: PgJobScheduler,
    handlers: HashMap<&'static str, Arc<dyn JobHandler>>,
    poll_interval: Duration,
}

impl JobRunner {
    /// Create a runner polling at the given interval
    pub fn new(store: PgJobScheduler, poll_interval: Duration) -> Self {
        Self {
            store,
            handlers: HashMap::new(),
            poll_interval,
        }
    }

    /// Register the handler for its job name
    pub fn register(&mut self, handler: Arc<dyn JobHandler>) {
        self.handlers.insert(handler.name(), handler);
    }

    /// Run the polling loop until the task is dropped
    pub async fn run(self) {
        info!(
            interval_secs = self.poll_interval.as_secs(),
            handlers = self.handlers.len(),
            "Job runner started"
        );

        let mut ticker = tokio::time::interval(self.poll_interval);
        loop {
            ticker.tick().await;
            if let Err(e) = self.dispatch_due().await {
                error!(error = %e, "Job poll failed");
            }
        }
    }

    /// Dispatch every currently-due job once; exposed for tests and manual drains
    pub async fn dispatch_due(&self) -> RepoResult<usize> {
        let due = self.store.due(Utc::now(), DISPATCH_BATCH_SIZE).await?;
        let mut dispatched = 0;

        for job in due {
            let Some(handler) = self.handlers.get(job.name.as_str()) else {
                warn!(name = %job.name, id = job.id, "No handler registered for job");
                continue;
            };

            match handler.handle(job.payload.clone()).await {
                Ok(()) => {
                    self.store.complete(job.id).await?;
                    debug!(name = %job.name, id = job.id, "Job completed");
                    dispatched += 1;
                }
                Err(e) => {
                    // Leave the row for the next poll
                    warn!(name = %job.name, id = job.id, error = %e, "Job failed, will retry");
                }
            }
        }

        Ok(dispatched)
    }
}
