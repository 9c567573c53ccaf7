//! Post service
//!
//! Publishing, listing, searching, editing and deleting travel posts.

use tracing::{info, instrument};

use wayfarer_core::entities::PostUpdate;
use wayfarer_core::error::DomainError;
use wayfarer_core::traits::PostQuery;
use wayfarer_core::value_objects::{PostId, UserId};

use crate::dto::{
    CreatePostRequest, ListPostsQuery, PostResponse, UpdatePostRequest, UserLikesResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Default page size for post listings
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Largest page a client may request
pub const MAX_PAGE_SIZE: i64 = 100;
/// Cap on search results
const SEARCH_LIMIT: i64 = 50;

/// Page size and offset within the allowed bounds
pub(crate) fn page_bounds(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    (
        limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
        offset.unwrap_or(0).max(0),
    )
}

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Publish a post; counters start at zero
    #[instrument(skip(self, request))]
    pub async fn create_post(
        &self,
        user_id: UserId,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let new_post = request.into_new_post(user_id);

        let post = self.ctx.post_repo().create(&new_post).await?;

        info!(post_id = %post.id, user_id = %user_id, "Post created");

        Ok(PostResponse::from(post))
    }

    /// Get a post by ID
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: PostId) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        Ok(PostResponse::from(post))
    }

    /// Page through all posts
    #[instrument(skip(self))]
    pub async fn list_posts(&self, query: ListPostsQuery) -> ServiceResult<Vec<PostResponse>> {
        let (limit, offset) = page_bounds(query.limit, query.offset);
        let query = PostQuery {
            limit,
            offset,
            sort: query.sort,
        };

        let posts = self.ctx.post_repo().list(query).await?;

        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// All posts written by a user, newest first
    #[instrument(skip(self))]
    pub async fn list_user_posts(&self, user_id: UserId) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().find_by_user(user_id).await?;

        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// Case-insensitive match on country or title. Poster names are not searchable.
    #[instrument(skip(self))]
    pub async fn search_posts(&self, query: &str) -> ServiceResult<Vec<PostResponse>> {
        let term = query.trim();
        if term.is_empty() {
            return Err(ServiceError::validation("Search query must not be empty"));
        }

        let posts = self.ctx.post_repo().search(term, SEARCH_LIMIT).await?;

        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// Edit a post. Only the author may edit; anyone else sees `NotFound`.
    #[instrument(skip(self, request))]
    pub async fn update_post(
        &self,
        post_id: PostId,
        user_id: UserId,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let update = PostUpdate::from(request);
        if update.is_empty() {
            return Err(ServiceError::validation("No fields to update"));
        }

        let post = self
            .ctx
            .post_repo()
            .update(post_id, user_id, &update)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        info!(post_id = %post_id, "Post updated");

        Ok(PostResponse::from(post))
    }

    /// Delete a post with its reactions and comments. Author only.
    #[instrument(skip(self))]
    pub async fn delete_post(&self, post_id: PostId, user_id: UserId) -> ServiceResult<()> {
        if !self.ctx.post_repo().delete(post_id, user_id).await? {
            return Err(DomainError::PostNotFound(post_id).into());
        }

        info!(post_id = %post_id, user_id = %user_id, "Post deleted");

        Ok(())
    }

    /// Total likes received across a user's posts
    #[instrument(skip(self))]
    pub async fn user_like_total(&self, user_id: UserId) -> ServiceResult<UserLikesResponse> {
        let total_likes = self.ctx.post_repo().total_likes(user_id).await?;

        Ok(UserLikesResponse {
            user_id,
            total_likes,
        })
    }
}
