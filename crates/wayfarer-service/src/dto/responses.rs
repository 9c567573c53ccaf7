//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Ids serialize as
//! JSON integers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use wayfarer_core::value_objects::{
    CommentId, PostId, ReactionKind, ReactionOutcome, UserId,
};

// ============================================================================
// Post Responses
// ============================================================================

/// Post response
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub content: String,
    pub country: String,
    pub visit_date: NaiveDate,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: DateTime<Utc>,
}

/// Sum of likes a user's posts have received
#[derive(Debug, Clone, Serialize)]
pub struct UserLikesResponse {
    pub user_id: UserId,
    pub total_likes: i64,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment response
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Result of a like/dislike action, with the counters it committed
#[derive(Debug, Clone, Serialize)]
pub struct ReactResponse {
    pub action: ReactionOutcome,
    pub likes: i64,
    pub dislikes: i64,
}

/// Caller's standing reaction; `null` when there is none
#[derive(Debug, Clone, Serialize)]
pub struct ReactionStateResponse {
    pub reaction: Option<ReactionKind>,
}

/// Cached counters next to the ledger-derived counts
#[derive(Debug, Clone, Serialize)]
pub struct CounterAuditResponse {
    pub post_id: PostId,
    pub likes: i64,
    pub dislikes: i64,
    pub ledger_likes: i64,
    pub ledger_dislikes: i64,
    pub consistent: bool,
}

// ============================================================================
// Follow Responses
// ============================================================================

/// A follow relationship
#[derive(Debug, Clone, Serialize)]
pub struct FollowResponse {
    pub follower_id: UserId,
    pub following_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FollowCountsResponse {
    pub user_id: UserId,
    pub followers: i64,
    pub following: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
