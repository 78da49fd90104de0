//! Service-layer view of the application configuration

use chrono::Duration;
use chrono_tz::Tz;
use raid_common::config::{AppConfig, ConfigError};

/// The configuration slice the services need, with the timezone pre-parsed
#[derive(Debug, Clone)]
pub struct RaidSettings {
    /// Reference timezone for wall-clock time inputs and display
    pub timezone: Tz,
    /// Channel invite messages are posted to
    pub air_support_channel: String,
    /// Channel RSVP notifications are broadcast to
    pub raids_channel: String,
    /// Name of the join-request marker emoji
    pub marker_emoji: String,
    pub command_prefix: String,
    /// Resolved times at or beyond now + window are rejected
    pub schedule_window: Duration,
}

impl RaidSettings {
    /// Build settings from the loaded application config
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            timezone: config.raid.reference_timezone()?,
            air_support_channel: config.channels.air_support.clone(),
            raids_channel: config.channels.raids.clone(),
            marker_emoji: config.raid.marker_emoji.clone(),
            command_prefix: config.commands.prefix.clone(),
            schedule_window: Duration::minutes(i64::from(config.raid.schedule_window_minutes)),
        })
    }
}

impl Default for RaidSettings {
    fn default() -> Self {
        // AppConfig::default carries the community defaults and a valid timezone
        Self::from_config(&AppConfig::default()).unwrap_or(Self {
            timezone: chrono_tz::America::New_York,
            air_support_channel: "air-support".to_string(),
            raids_channel: "raids".to_string(),
            marker_emoji: "remote".to_string(),
            command_prefix: "!".to_string(),
            schedule_window: Duration::minutes(105),
        })
    }
}
