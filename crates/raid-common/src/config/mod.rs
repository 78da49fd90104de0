//! Configuration loading

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ChannelConfig, CommandConfig, ConfigError, DatabaseConfig, Environment,
    RaidConfig, SchedulerConfig,
};
