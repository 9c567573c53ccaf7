//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    Comment, Follow, FollowCounts, NewComment, NewPost, Post, PostUpdate, Reaction,
};
use crate::error::DomainError;
use crate::value_objects::{
    CounterAudit, PostId, PostSort, ReactionChange, ReactionCounters, ReactionKind, UserId,
};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Post Repository
// ============================================================================

/// Offset pagination options for post listings
#[derive(Debug, Clone, Copy)]
pub struct PostQuery {
    pub limit: i64,
    pub offset: i64,
    pub sort: PostSort,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
            sort: PostSort::Newest,
        }
    }
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>>;

    /// List posts with pagination and ordering.
    /// `limit` and `offset` are used as given; callers bound them.
    async fn list(&self, query: PostQuery) -> RepoResult<Vec<Post>>;

    /// List all posts written by a user, newest first
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Post>>;

    /// Case-insensitive substring search over country and title
    async fn search(&self, term: &str, limit: i64) -> RepoResult<Vec<Post>>;

    /// Store a new post with zeroed counters
    async fn create(&self, post: &NewPost) -> RepoResult<Post>;

    /// Apply an update if the post exists and belongs to `user_id`.
    /// Never touches the reaction counters.
    async fn update(&self, id: PostId, user_id: UserId, update: &PostUpdate)
        -> RepoResult<Option<Post>>;

    /// Delete a post owned by `user_id` together with its reactions and comments.
    /// Returns false if nothing matched.
    async fn delete(&self, id: PostId, user_id: UserId) -> RepoResult<bool>;

    /// Sum of likes over all posts written by a user
    async fn total_likes(&self, user_id: UserId) -> RepoResult<i64>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Store a new comment
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment>;

    /// Comments on a post, newest first
    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<Comment>>;
}

// ============================================================================
// Reaction Ledger
// ============================================================================

/// Owner of the one-reaction-per-(post, user) invariant and of the counters
/// cached on each post.
#[async_trait]
pub trait ReactionLedger: Send + Sync {
    /// Apply a like or dislike action atomically.
    ///
    /// Fails with `PostNotFound` for an unknown post, leaving no trace.
    /// The ledger row and the post counters change in one transaction.
    async fn react(
        &self,
        post_id: PostId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> RepoResult<ReactionChange>;

    /// Standing reaction of a user on a post
    async fn find(&self, post_id: PostId, user_id: UserId) -> RepoResult<Option<Reaction>>;

    /// Cached counters of a post, `None` if the post does not exist
    async fn counters(&self, post_id: PostId) -> RepoResult<Option<ReactionCounters>>;

    /// Compare cached counters with ledger counts, `None` if the post does not exist
    async fn audit(&self, post_id: PostId) -> RepoResult<Option<CounterAudit>>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Record that `follower` follows `following`.
    /// Fails with `AlreadyFollowing` if the pair already exists.
    async fn follow(&self, follower: UserId, following: UserId) -> RepoResult<Follow>;

    /// Remove a follow. Returns false if the pair did not exist.
    async fn unfollow(&self, follower: UserId, following: UserId) -> RepoResult<bool>;

    /// Posts written by users that `follower` follows, newest first
    async fn feed(&self, follower: UserId, limit: i64, offset: i64) -> RepoResult<Vec<Post>>;

    /// Follower and following totals of a user
    async fn counts(&self, user_id: UserId) -> RepoResult<FollowCounts>;
}
