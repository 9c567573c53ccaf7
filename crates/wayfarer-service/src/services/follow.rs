//! Follow service
//!
//! Following other travellers and reading their posts as a personal feed.

use tracing::{info, instrument};

use wayfarer_core::error::DomainError;
use wayfarer_core::value_objects::UserId;

use crate::dto::{FeedQuery, FollowCountsResponse, FollowResponse, PostResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::post::page_bounds;

/// Follow service
pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    /// Create a new FollowService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Start following a user. Following twice is a conflict.
    #[instrument(skip(self))]
    pub async fn follow(
        &self,
        follower: UserId,
        following: UserId,
    ) -> ServiceResult<FollowResponse> {
        if follower == following {
            return Err(ServiceError::validation("Users cannot follow themselves"));
        }

        let follow = self.ctx.follow_repo().follow(follower, following).await?;

        info!(follower = %follower, following = %following, "User followed");

        Ok(FollowResponse::from(follow))
    }

    /// Stop following a user
    #[instrument(skip(self))]
    pub async fn unfollow(&self, follower: UserId, following: UserId) -> ServiceResult<()> {
        if !self.ctx.follow_repo().unfollow(follower, following).await? {
            return Err(DomainError::FollowNotFound(following).into());
        }

        info!(follower = %follower, following = %following, "User unfollowed");

        Ok(())
    }

    /// Posts by followed users, newest first
    #[instrument(skip(self))]
    pub async fn feed(
        &self,
        follower: UserId,
        query: FeedQuery,
    ) -> ServiceResult<Vec<PostResponse>> {
        let (limit, offset) = page_bounds(query.limit, query.offset);

        let posts = self.ctx.follow_repo().feed(follower, limit, offset).await?;

        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// Follower and following totals of a user
    #[instrument(skip(self))]
    pub async fn counts(&self, user_id: UserId) -> ServiceResult<FollowCountsResponse> {
        let counts = self.ctx.follow_repo().counts(user_id).await?;

        Ok(FollowCountsResponse::new(user_id, counts))
    }
}
