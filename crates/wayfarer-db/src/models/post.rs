//! Post database models

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub country: String,
    pub visit_date: NaiveDate,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: DateTime<Utc>,
}

/// Counter columns of a post
#[derive(Debug, Clone, Copy, FromRow)]
pub struct CountersModel {
    pub likes: i64,
    pub dislikes: i64,
}

/// Cached counters next to counts derived from the reactions table
#[derive(Debug, Clone, Copy, FromRow)]
pub struct CounterAuditModel {
    pub likes: i64,
    pub dislikes: i64,
    pub ledger_likes: i64,
    pub ledger_dislikes: i64,
}
