//! Ports - interfaces the infrastructure layers implement

mod gateway;
mod repositories;
mod scheduler;

pub use gateway::{
    ChatGateway, EmbedField, GatewayUser, GuildEmoji, MessageEmbed, OutboundMessage, ReactionEvent,
    jump_url,
};
pub use repositories::{GroupRepository, RepoResult, TrainerCardRepository};
pub use scheduler::{ExpirationJob, JobHandler, JobScheduler, ScheduledJob, DELETE_GROUP_JOB};
