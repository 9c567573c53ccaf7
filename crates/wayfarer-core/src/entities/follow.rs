//! Follow entity

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// One user following another. At most one per (follower, following) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follow {
    pub follower_id: UserId,
    pub following_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Follower and following totals of a user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FollowCounts {
    /// Users following this user
    pub followers: i64,
    /// Users this user follows
    pub following: i64,
}
