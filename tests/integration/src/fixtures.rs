//! Test fixtures and data generators
//!
//! Request bodies sent to the API and the response shapes the tests read back.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create post request
#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub country: String,
    pub visit_date: String,
}

impl CreatePostRequest {
    pub fn unique() -> Self {
        Self::in_country("Portugal")
    }

    pub fn in_country(country: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Trip {suffix}"),
            content: format!("Notes from trip {suffix}"),
            country: country.to_string(),
            visit_date: "2024-05-17".to_string(),
        }
    }
}

/// Post response
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub country: String,
    pub visit_date: String,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: String,
}

/// Per-user like total
#[derive(Debug, Deserialize)]
pub struct UserLikesResponse {
    pub user_id: i64,
    pub total_likes: i64,
}

/// Add comment request
#[derive(Debug, Serialize)]
pub struct AddCommentRequest {
    pub content: String,
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub content: String,
}

/// Result of a like/dislike call
#[derive(Debug, Deserialize)]
pub struct ReactResponse {
    pub action: String,
    pub likes: i64,
    pub dislikes: i64,
}

/// Caller's standing reaction
#[derive(Debug, Deserialize)]
pub struct ReactionStateResponse {
    pub reaction: Option<String>,
}

/// Counter audit
#[derive(Debug, Deserialize)]
pub struct CounterAuditResponse {
    pub post_id: i64,
    pub likes: i64,
    pub dislikes: i64,
    pub ledger_likes: i64,
    pub ledger_dislikes: i64,
    pub consistent: bool,
}

/// A follow relationship
#[derive(Debug, Deserialize)]
pub struct FollowResponse {
    pub follower_id: i64,
    pub following_id: i64,
    pub created_at: String,
}

/// Follower and following totals
#[derive(Debug, Deserialize)]
pub struct FollowCountsResponse {
    pub user_id: i64,
    pub followers: i64,
    pub following: i64,
}
