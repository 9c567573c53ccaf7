//! SQLite implementation of PostRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use wayfarer_core::entities::{NewPost, Post, PostUpdate};
use wayfarer_core::traits::{PostQuery, PostRepository, RepoResult};
use wayfarer_core::value_objects::{PostId, PostSort, UserId};

use crate::models::PostModel;

use super::error::map_db_error;

pub(super) const POST_COLUMNS: &str =
    "id, user_id, title, content, country, visit_date, likes, dislikes, created_at";

/// SQLite implementation of PostRepository
#[derive(Clone)]
pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    /// Create a new SqlitePostRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Escape LIKE wildcards so the term matches literally
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn order_clause(sort: PostSort) -> &'static str {
    match sort {
        PostSort::Newest => "ORDER BY id DESC",
        PostSort::MostLiked => "ORDER BY likes DESC, id DESC",
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = ?"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: PostQuery) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(&format!(
            "SELECT {POST_COLUMNS} FROM posts {} LIMIT ? OFFSET ?",
            order_clause(query.sort)
        ))
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE user_id = ? ORDER BY id DESC"
        ))
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn search(&self, term: &str, limit: i64) -> RepoResult<Vec<Post>> {
        let pattern = like_pattern(term);

        // SQLite LIKE is case-insensitive for ASCII
        let results = sqlx::query_as::<_, PostModel>(&format!(
            r"
            SELECT {POST_COLUMNS} FROM posts
            WHERE country LIKE ?1 ESCAPE '\' OR title LIKE ?1 ESCAPE '\'
            ORDER BY id DESC
            LIMIT ?2
            "
        ))
        .bind(pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self, post), fields(user_id = %post.user_id))]
    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        let model = sqlx::query_as::<_, PostModel>(&format!(
            r"
            INSERT INTO posts (user_id, title, content, country, visit_date, likes, dislikes, created_at)
            VALUES (?, ?, ?, ?, ?, 0, 0, ?)
            RETURNING {POST_COLUMNS}
            "
        ))
        .bind(post.user_id.into_inner())
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.country)
        .bind(post.visit_date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Post::from(model))
    }

    #[instrument(skip(self, update))]
    async fn update(
        &self,
        id: PostId,
        user_id: UserId,
        update: &PostUpdate,
    ) -> RepoResult<Option<Post>> {
        // likes/dislikes are deliberately absent from the SET list
        let result = sqlx::query_as::<_, PostModel>(&format!(
            r"
            UPDATE posts
            SET title = COALESCE(?, title),
                content = COALESCE(?, content),
                country = COALESCE(?, country),
                visit_date = COALESCE(?, visit_date)
            WHERE id = ? AND user_id = ?
            RETURNING {POST_COLUMNS}
            "
        ))
        .bind(update.title.as_deref())
        .bind(update.content.as_deref())
        .bind(update.country.as_deref())
        .bind(update.visit_date)
        .bind(id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: PostId, user_id: UserId) -> RepoResult<bool> {
        // Reactions and comments go with the post via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM posts WHERE id = ? AND user_id = ?")
            .bind(id.into_inner())
            .bind(user_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn total_likes(&self, user_id: UserId) -> RepoResult<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(likes), 0) FROM posts WHERE user_id = ?",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(total)
    }
}
