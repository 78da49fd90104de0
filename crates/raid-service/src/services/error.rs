//! Service layer error types

use raid_core::DomainError;
use thiserror::Error;

/// Service layer error type
///
/// User-recoverable conditions (bad time strings, duplicate groups, missing
/// trainer cards) never surface here; the services answer those with reply
/// messages. What remains is either a domain-layer fault or an internal one.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Domain rule violation or infrastructure fault
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    /// Get a stable code string for logs
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
