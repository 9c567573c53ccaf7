//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{PostId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Follow relationship not found for user {0}")]
    FollowNotFound(UserId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Already following user {0}")]
    AlreadyFollowing(UserId),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    /// The store refused the write because another transaction holds the lock.
    /// Safe to retry with the same inputs.
    #[error("Storage busy: {0}")]
    StorageBusy(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::FollowNotFound(_) => "UNKNOWN_FOLLOW",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::AlreadyFollowing(_) => "ALREADY_FOLLOWING",
            Self::StorageBusy(_) | Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PostNotFound(_) | Self::FollowNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyFollowing(_))
    }

    /// Check if the failed operation may succeed when repeated unchanged
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StorageBusy(_))
    }
}
