//! Service context - dependency container for services
//!
//! Holds the repositories, the chat gateway, the scheduler, and the resolved
//! settings needed by the services.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use raid_core::{ChatGateway, GroupRepository, JobScheduler, TrainerCardRepository};

use crate::channels::ChannelDirectory;
use crate::settings::RaidSettings;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - The group and trainer card repositories
/// - The chat gateway
/// - The durable job scheduler
/// - The resolved raid settings and the channel directory
#[derive(Clone)]
pub struct ServiceContext {
    groups: Arc<dyn GroupRepository>,
    trainer_cards: Arc<dyn TrainerCardRepository>,
    gateway: Arc<dyn ChatGateway>,
    scheduler: Arc<dyn JobScheduler>,
    settings: RaidSettings,
    channels: ChannelDirectory,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        groups: Arc<dyn GroupRepository>,
        trainer_cards: Arc<dyn TrainerCardRepository>,
        gateway: Arc<dyn ChatGateway>,
        scheduler: Arc<dyn JobScheduler>,
        settings: RaidSettings,
    ) -> Self {
        Self {
            groups,
            trainer_cards,
            gateway,
            scheduler,
            settings,
            channels: ChannelDirectory::new(),
        }
    }

    /// Get the group repository
    pub fn groups(&self) -> &dyn GroupRepository {
        self.groups.as_ref()
    }

    /// Get the trainer card repository
    pub fn trainer_cards(&self) -> &dyn TrainerCardRepository {
        self.trainer_cards.as_ref()
    }

    /// Get the chat gateway
    pub fn gateway(&self) -> &dyn ChatGateway {
        self.gateway.as_ref()
    }

    /// Get the job scheduler
    pub fn scheduler(&self) -> &dyn JobScheduler {
        self.scheduler.as_ref()
    }

    /// Get the resolved raid settings
    pub fn settings(&self) -> &RaidSettings {
        &self.settings
    }

    /// Get the channel directory
    pub fn channels(&self) -> &ChannelDirectory {
        &self.channels
    }

    /// The current instant in the reference timezone
    pub fn now_local(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.settings.timezone)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("settings", &self.settings)
            .field("repositories", &"...")
            .field("gateway", &"...")
            .finish()
    }
}
