//! Post entity - a travel blog entry about a visited country

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::{PostId, ReactionCounters, UserId};

/// Post entity
///
/// `likes` and `dislikes` are a projection of the reaction ledger. They are
/// written only by [`crate::traits::ReactionLedger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
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

impl Post {
    /// Cached reaction counters
    #[inline]
    pub fn counters(&self) -> ReactionCounters {
        ReactionCounters::new(self.likes, self.dislikes)
    }

    /// Check if the given user wrote this post
    #[inline]
    pub fn is_author(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Fields for a post that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: UserId,
    pub title: String,
    pub content: String,
    pub country: String,
    pub visit_date: NaiveDate,
}

/// Partial update of the author-editable fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub country: Option<String>,
    pub visit_date: Option<NaiveDate>,
}

impl PostUpdate {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.country.is_none()
            && self.visit_date.is_none()
    }
}
