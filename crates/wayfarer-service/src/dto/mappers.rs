//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs, and
//! from request DTOs to domain inputs.

use wayfarer_core::entities::{Comment, Follow, FollowCounts, NewPost, Post, PostUpdate};
use wayfarer_core::value_objects::{CounterAudit, ReactionChange, UserId};

use super::requests::{CreatePostRequest, UpdatePostRequest};
use super::responses::{
    CommentResponse, CounterAuditResponse, FollowCountsResponse, FollowResponse, PostResponse,
    ReactResponse,
};

/// Title and country are stored without surrounding whitespace
fn trimmed(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            title: post.title,
            content: post.content,
            country: post.country,
            visit_date: post.visit_date,
            likes: post.likes,
            dislikes: post.dislikes,
            created_at: post.created_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            user_id: comment.user_id,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

impl From<ReactionChange> for ReactResponse {
    fn from(change: ReactionChange) -> Self {
        Self {
            action: change.outcome,
            likes: change.counters.likes,
            dislikes: change.counters.dislikes,
        }
    }
}

impl From<CounterAudit> for CounterAuditResponse {
    fn from(audit: CounterAudit) -> Self {
        Self {
            post_id: audit.post_id,
            likes: audit.cached.likes,
            dislikes: audit.cached.dislikes,
            ledger_likes: audit.ledger.likes,
            ledger_dislikes: audit.ledger.dislikes,
            consistent: audit.is_consistent(),
        }
    }
}

impl From<Follow> for FollowResponse {
    fn from(follow: Follow) -> Self {
        Self {
            follower_id: follow.follower_id,
            following_id: follow.following_id,
            created_at: follow.created_at,
        }
    }
}

impl FollowCountsResponse {
    pub fn new(user_id: UserId, counts: FollowCounts) -> Self {
        Self {
            user_id,
            followers: counts.followers,
            following: counts.following,
        }
    }
}

impl CreatePostRequest {
    /// Post to store for `user_id`
    pub fn into_new_post(self, user_id: UserId) -> NewPost {
        NewPost {
            user_id,
            title: trimmed(self.title),
            content: self.content,
            country: trimmed(self.country),
            visit_date: self.visit_date,
        }
    }
}

/// Counters are not representable here
impl From<UpdatePostRequest> for PostUpdate {
    fn from(request: UpdatePostRequest) -> Self {
        Self {
            title: request.title.map(trimmed),
            content: request.content,
            country: request.country.map(trimmed),
            visit_date: request.visit_date,
        }
    }
}
