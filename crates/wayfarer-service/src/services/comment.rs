//! Comment service

use tracing::{info, instrument};

use wayfarer_core::entities::NewComment;
use wayfarer_core::error::DomainError;
use wayfarer_core::value_objects::{PostId, UserId};

use crate::dto::{AddCommentRequest, CommentResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comment on a post
    #[instrument(skip(self, request))]
    pub async fn add_comment(
        &self,
        post_id: PostId,
        user_id: UserId,
        request: AddCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let comment = self
            .ctx
            .comment_repo()
            .create(&NewComment {
                post_id,
                user_id,
                content: request.content,
            })
            .await?;

        info!(comment_id = %comment.id, post_id = %post_id, "Comment added");

        Ok(CommentResponse::from(comment))
    }

    /// Comments on a post, newest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, post_id: PostId) -> ServiceResult<Vec<CommentResponse>> {
        if self.ctx.post_repo().find_by_id(post_id).await?.is_none() {
            return Err(DomainError::PostNotFound(post_id).into());
        }

        let comments = self.ctx.comment_repo().find_by_post(post_id).await?;

        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }
}
