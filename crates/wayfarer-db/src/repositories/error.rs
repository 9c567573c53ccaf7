//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use wayfarer_core::error::DomainError;
use wayfarer_core::value_objects::PostId;

// SQLite primary result codes; extended codes carry these in the low byte
const SQLITE_BUSY: i32 = 5;
const SQLITE_LOCKED: i32 = 6;

/// Convert SQLx error to DomainError
///
/// Lock contention becomes `StorageBusy` so callers can retry the whole transaction.
pub fn map_db_error(e: SqlxError) -> DomainError {
    if is_lock_contention(&e) {
        return DomainError::StorageBusy(e.to_string());
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

fn is_lock_contention(e: &SqlxError) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };
    db_err
        .code()
        .and_then(|code| code.parse::<i32>().ok())
        .is_some_and(|code| matches!(code & 0xff, SQLITE_BUSY | SQLITE_LOCKED))
}

/// Create a "post not found" error
pub fn post_not_found(id: PostId) -> DomainError {
    DomainError::PostNotFound(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::value_objects::UserId;

    #[test]
    fn test_non_database_errors_are_not_retryable() {
        let err = map_db_error(SqlxError::RowNotFound);
        assert!(matches!(err, DomainError::DatabaseError(_)));
        assert!(!err.is_retryable());

        let err = map_db_error(SqlxError::PoolTimedOut);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_unique_fallback() {
        let err = map_unique_violation(SqlxError::RowNotFound, || {
            DomainError::AlreadyFollowing(UserId::new(1))
        });
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }
}
