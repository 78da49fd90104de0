//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found (benign - callers treat these as "already gone")
    // =========================================================================
    #[error("Group not found: {0}")]
    GroupNotFound(Snowflake),

    #[error("Invite message not found: {0}")]
    ArtifactNotFound(Snowflake),

    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    #[error("Emoji not found: {0}")]
    EmojiNotFound(String),

    #[error("Trainer card not found for user: {0}")]
    TrainerCardNotFound(Snowflake),

    // =========================================================================
    // Validation
    // =========================================================================
    #[error("`{0}` is not a valid time")]
    InvalidTimeFormat(String),

    #[error("`{0}` is too far in the future")]
    TimeTooFarInFuture(String),

    // =========================================================================
    // Conflict / Gate
    // =========================================================================
    #[error("A group already exists for location `{0}`")]
    DuplicateGroup(String),

    #[error("Trainer card is incomplete for user: {0}")]
    ProfileIncomplete(Snowflake),

    // =========================================================================
    // Infrastructure (wrapped)
    // =========================================================================
    #[error("Gateway error: {0}")]
    GatewayError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Scheduler error: {0}")]
    SchedulerError(String),
}

impl DomainError {
    /// Get a stable code string for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::GroupNotFound(_) => "UNKNOWN_GROUP",
            Self::ArtifactNotFound(_) => "UNKNOWN_MESSAGE",
            Self::ChannelNotFound(_) => "UNKNOWN_CHANNEL",
            Self::EmojiNotFound(_) => "UNKNOWN_EMOJI",
            Self::TrainerCardNotFound(_) => "UNKNOWN_TRAINER_CARD",
            Self::InvalidTimeFormat(_) => "INVALID_TIME_FORMAT",
            Self::TimeTooFarInFuture(_) => "TIME_TOO_FAR_IN_FUTURE",
            Self::DuplicateGroup(_) => "DUPLICATE_GROUP",
            Self::ProfileIncomplete(_) => "PROFILE_INCOMPLETE",
            Self::GatewayError(_) => "GATEWAY_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::SchedulerError(_) => "SCHEDULER_ERROR",
        }
    }

    /// Check if this is a "not found" error
    ///
    /// Deletion paths treat every not-found as success: cancellation and
    /// expiration race to the same terminal state, and the invite message can
    /// be removed out-of-band.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::GroupNotFound(_)
                | Self::ArtifactNotFound(_)
                | Self::ChannelNotFound(_)
                | Self::EmojiNotFound(_)
                | Self::TrainerCardNotFound(_)
        )
    }
}
