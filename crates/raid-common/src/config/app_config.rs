//! Application configuration structs
//!
//! Loads configuration from environment variables; only DATABASE_URL is
//! required, everything else falls back to the community's defaults.

use std::env;

use chrono_tz::Tz;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub channels: ChannelConfig,
    pub commands: CommandConfig,
    pub raid: RaidConfig,
    pub scheduler: SchedulerConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Names of the guild channels the bot works in
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    /// Channel invite messages are posted to
    pub air_support: String,
    /// Channel RSVP notifications are broadcast to
    pub raids: String,
}

/// Command surface configuration
#[derive(Debug, Clone)]
pub struct CommandConfig {
    pub prefix: String,
}

/// Raid scheduling configuration
#[derive(Debug, Clone)]
pub struct RaidConfig {
    /// Name of the join-request marker emoji
    pub marker_emoji: String,
    /// Reference timezone for wall-clock time inputs
    pub timezone: String,
    /// Resolved times at or beyond this many minutes ahead are rejected
    pub schedule_window_minutes: u32,
}

impl RaidConfig {
    /// Parse the configured reference timezone
    pub fn reference_timezone(&self) -> Result<Tz, ConfigError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidValue("RAID_TIMEZONE", self.timezone.clone()))
    }
}

/// Durable scheduler configuration
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    pub poll_interval_secs: u64,
}

// Default value functions
fn default_app_name() -> String {
    "raid-bot".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_air_support_channel() -> String {
    "air-support".to_string()
}

fn default_raids_channel() -> String {
    "raids".to_string()
}

fn default_prefix() -> String {
    "!".to_string()
}

fn default_marker_emoji() -> String {
    "remote".to_string()
}

fn default_timezone() -> String {
    "America/New_York".to_string()
}

fn default_schedule_window_minutes() -> u32 {
    105
}

fn default_poll_interval_secs() -> u64 {
    15
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            },
            channels: ChannelConfig {
                air_support: env::var("AIR_SUPPORT_CHANNEL")
                    .unwrap_or_else(|_| default_air_support_channel()),
                raids: env::var("RAIDS_CHANNEL").unwrap_or_else(|_| default_raids_channel()),
            },
            commands: CommandConfig {
                prefix: env::var("COMMAND_PREFIX").unwrap_or_else(|_| default_prefix()),
            },
            raid: RaidConfig {
                marker_emoji: env::var("MARKER_EMOJI").unwrap_or_else(|_| default_marker_emoji()),
                timezone: env::var("RAID_TIMEZONE").unwrap_or_else(|_| default_timezone()),
                schedule_window_minutes: env::var("SCHEDULE_WINDOW_MINUTES")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_schedule_window_minutes),
            },
            scheduler: SchedulerConfig {
                poll_interval_secs: env::var("SCHEDULER_POLL_INTERVAL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_poll_interval_secs),
            },
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: default_app_name(),
                env: Environment::default(),
            },
            database: DatabaseConfig {
                url: String::new(),
                max_connections: default_max_connections(),
                min_connections: default_min_connections(),
            },
            channels: ChannelConfig {
                air_support: default_air_support_channel(),
                raids: default_raids_channel(),
            },
            commands: CommandConfig {
                prefix: default_prefix(),
            },
            raid: RaidConfig {
                marker_emoji: default_marker_emoji(),
                timezone: default_timezone(),
                schedule_window_minutes: default_schedule_window_minutes(),
            },
            scheduler: SchedulerConfig {
                poll_interval_secs: default_poll_interval_secs(),
            },
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
