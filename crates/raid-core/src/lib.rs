//! # raid-core
//!
//! Domain layer for the raid group coordination bot: entities, value objects,
//! domain errors, the pure scheduling/parsing logic, and the ports (repository,
//! gateway, and scheduler traits) the infrastructure layers implement.
//! This crate has zero dependencies on infrastructure (database, chat platform, etc.).

pub mod entities;
pub mod error;
pub mod raid_type;
pub mod time;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Group, NewGroup, TrainerCard, normalize_location};
pub use error::DomainError;
pub use traits::{
    jump_url, ChatGateway, EmbedField, ExpirationJob, GatewayUser, GroupRepository, GuildEmoji,
    JobHandler, JobScheduler, MessageEmbed, OutboundMessage, ReactionEvent, RepoResult,
    ScheduledJob, TrainerCardRepository, DELETE_GROUP_JOB,
};
pub use value_objects::Snowflake;
