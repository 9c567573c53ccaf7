//! SQLite implementation of FollowRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use wayfarer_core::entities::{Follow, FollowCounts, Post};
use wayfarer_core::error::DomainError;
use wayfarer_core::traits::{FollowRepository, RepoResult};
use wayfarer_core::value_objects::UserId;

use crate::models::{FollowCountsModel, FollowModel, PostModel};

use super::error::{map_db_error, map_unique_violation};
use super::post::POST_COLUMNS;

/// SQLite implementation of FollowRepository
#[derive(Clone)]
pub struct SqliteFollowRepository {
    pool: SqlitePool,
}

impl SqliteFollowRepository {
    /// Create a new SqliteFollowRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for SqliteFollowRepository {
    #[instrument(skip(self))]
    async fn follow(&self, follower: UserId, following: UserId) -> RepoResult<Follow> {
        // the (follower_id, following_id) primary key rejects duplicates
        let model = sqlx::query_as::<_, FollowModel>(
            r"
            INSERT INTO follows (follower_id, following_id, created_at)
            VALUES (?, ?, ?)
            RETURNING follower_id, following_id, created_at
            ",
        )
        .bind(follower.into_inner())
        .bind(following.into_inner())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyFollowing(following)))?;

        Ok(Follow::from(model))
    }

    #[instrument(skip(self))]
    async fn unfollow(&self, follower: UserId, following: UserId) -> RepoResult<bool> {
        let result =
            sqlx::query("DELETE FROM follows WHERE follower_id = ? AND following_id = ?")
                .bind(follower.into_inner())
                .bind(following.into_inner())
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn feed(&self, follower: UserId, limit: i64, offset: i64) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(&format!(
            r"
            SELECT {POST_COLUMNS} FROM posts
            WHERE user_id IN (SELECT following_id FROM follows WHERE follower_id = ?)
            ORDER BY id DESC
            LIMIT ? OFFSET ?
            "
        ))
        .bind(follower.into_inner())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn counts(&self, user_id: UserId) -> RepoResult<FollowCounts> {
        let model = sqlx::query_as::<_, FollowCountsModel>(
            r"
            SELECT
                (SELECT COUNT(*) FROM follows WHERE following_id = ?1) AS followers,
                (SELECT COUNT(*) FROM follows WHERE follower_id = ?1) AS following
            ",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(FollowCounts::from(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqliteFollowRepository>();
    }
}
