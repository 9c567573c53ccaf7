//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub post_id: i64,
    pub user_id: i64,
    /// `like` or `dislike`, enforced by a CHECK constraint
    pub kind: String,
    pub created_at: DateTime<Utc>,
}
