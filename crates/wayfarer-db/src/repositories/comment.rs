//! SQLite implementation of CommentRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use wayfarer_core::entities::{Comment, NewComment};
use wayfarer_core::traits::{CommentRepository, RepoResult};
use wayfarer_core::value_objects::PostId;

use crate::models::CommentModel;

use super::error::{map_db_error, post_not_found};

/// SQLite implementation of CommentRepository
#[derive(Clone)]
pub struct SqliteCommentRepository {
    pool: SqlitePool,
}

impl SqliteCommentRepository {
    /// Create a new SqliteCommentRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    #[instrument(skip(self, comment), fields(post_id = %comment.post_id, user_id = %comment.user_id))]
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        // INSERT ... SELECT yields no row when the post is missing
        let model = sqlx::query_as::<_, CommentModel>(
            r"
            INSERT INTO comments (post_id, user_id, content, created_at)
            SELECT id, ?, ?, ? FROM posts WHERE id = ?
            RETURNING id, post_id, user_id, content, created_at
            ",
        )
        .bind(comment.user_id.into_inner())
        .bind(&comment.content)
        .bind(Utc::now())
        .bind(comment.post_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| post_not_found(comment.post_id))?;

        Ok(Comment::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, post_id, user_id, content, created_at
            FROM comments
            WHERE post_id = ?
            ORDER BY id DESC
            ",
        )
        .bind(post_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }
}
