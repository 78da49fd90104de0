//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Group, NewGroup, TrainerCard};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Group Repository
// ============================================================================

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Find a live group by its uniqueness key (`location` must already be
    /// case-folded; see [`crate::entities::normalize_location`])
    async fn find(&self, host_id: Snowflake, location: &str) -> RepoResult<Option<Group>>;

    /// Find a group by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Group>>;

    /// Insert a new group and return it with its assigned id
    ///
    /// Fails with [`DomainError::DuplicateGroup`] when a live group already
    /// exists for the same (host, location) key; the insert itself enforces
    /// the uniqueness invariant, not just the callers' pre-checks.
    async fn create(&self, group: &NewGroup) -> RepoResult<Group>;

    /// Delete a group; returns false if the record was already gone
    async fn delete(&self, id: Snowflake) -> RepoResult<bool>;
}

// ============================================================================
// Trainer Card Repository
// ============================================================================

#[async_trait]
pub trait TrainerCardRepository: Send + Sync {
    /// Look up a member's trainer card
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<TrainerCard>>;
}
