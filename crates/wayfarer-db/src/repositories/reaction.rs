//! SQLite implementation of ReactionLedger
//!
//! Each `react` call is one transaction whose first statement writes the
//! post row. That write takes SQLite's database write lock before anything is
//! read, so every read-decide-write sequence runs serialized against all
//! other writers, across processes as well as tasks. Writers that cannot get
//! the lock wait up to the pool's busy timeout; a transaction that still
//! fails with BUSY/LOCKED is rolled back and replayed from the start.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{debug, instrument, warn};

use wayfarer_core::entities::Reaction;
use wayfarer_core::error::DomainError;
use wayfarer_core::traits::{ReactionLedger, RepoResult};
use wayfarer_core::value_objects::{
    CounterAudit, PostId, ReactionChange, ReactionCounters, ReactionKind, ReactionTransition,
    UserId,
};

use crate::mappers::{audit_from_model, parse_kind};
use crate::models::{CounterAuditModel, CountersModel, ReactionModel};

use super::error::{map_db_error, map_unique_violation, post_not_found};

/// Bounded replay of transactions that lost a lock race
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts including the first one
    pub max_attempts: u32,
    /// Delay before the first replay; doubles on each further replay
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 8,
            base_delay: Duration::from_millis(10),
            max_delay: Duration::from_millis(250),
        }
    }
}

impl RetryPolicy {
    /// Delay before replay number `attempt` (1-based)
    pub fn delay(&self, attempt: u32) -> Duration {
        let factor = 1u32 << attempt.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

/// SQLite implementation of ReactionLedger
#[derive(Clone)]
pub struct SqliteReactionLedger {
    pool: SqlitePool,
    retry: RetryPolicy,
}

impl SqliteReactionLedger {
    /// Create a new SqliteReactionLedger with the default retry policy
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_retry(pool, RetryPolicy::default())
    }

    pub fn with_retry(pool: SqlitePool, retry: RetryPolicy) -> Self {
        Self { pool, retry }
    }

    /// One attempt: a single transaction, rolled back on any error
    async fn react_once(
        &self,
        post_id: PostId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> RepoResult<ReactionChange> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        lock_post(&mut tx, post_id).await?;

        let current = sqlx::query_scalar::<_, String>(
            "SELECT kind FROM reactions WHERE post_id = ? AND user_id = ?",
        )
        .bind(post_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .as_deref()
        .map(parse_kind)
        .transpose()?;

        let transition = ReactionTransition::plan(current, kind);
        write_ledger_row(&mut tx, post_id, user_id, &transition).await?;

        let counters: ReactionCounters = sqlx::query_as::<_, CountersModel>(
            r"
            UPDATE posts
            SET likes = likes + ?, dislikes = dislikes + ?
            WHERE id = ?
            RETURNING likes, dislikes
            ",
        )
        .bind(transition.like_delta)
        .bind(transition.dislike_delta)
        .bind(post_id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?
        .into();

        tx.commit().await.map_err(map_db_error)?;

        Ok(ReactionChange {
            outcome: transition.outcome,
            current: transition.next,
            counters,
        })
    }
}

/// Take the write lock by touching the post row; fails if the post is missing
async fn lock_post(tx: &mut Transaction<'_, Sqlite>, post_id: PostId) -> RepoResult<()> {
    let result = sqlx::query("UPDATE posts SET likes = likes WHERE id = ?")
        .bind(post_id.into_inner())
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

    if result.rows_affected() == 0 {
        return Err(post_not_found(post_id));
    }
    Ok(())
}

/// Apply the ledger side of a transition: exactly one insert, delete or update
async fn write_ledger_row(
    tx: &mut Transaction<'_, Sqlite>,
    post_id: PostId,
    user_id: UserId,
    transition: &ReactionTransition,
) -> RepoResult<()> {
    let query = match (transition.previous, transition.next) {
        (None, Some(next)) => {
            let row = Reaction::new(post_id, user_id, next);
            sqlx::query(
                "INSERT INTO reactions (post_id, user_id, kind, created_at) VALUES (?, ?, ?, ?)",
            )
            .bind(row.post_id.into_inner())
            .bind(row.user_id.into_inner())
            .bind(row.kind.as_str())
            .bind(row.created_at)
        }
        (Some(_), Some(next)) => {
            sqlx::query("UPDATE reactions SET kind = ? WHERE post_id = ? AND user_id = ?")
                .bind(next.as_str())
                .bind(post_id.into_inner())
                .bind(user_id.into_inner())
        }
        (Some(_), None) => sqlx::query("DELETE FROM reactions WHERE post_id = ? AND user_id = ?")
            .bind(post_id.into_inner())
            .bind(user_id.into_inner()),
        (None, None) => return Ok(()),
    };

    // Under the write lock a duplicate key cannot occur; if it does, replay
    query
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::StorageBusy(format!(
                    "concurrent reaction insert on post {post_id}"
                ))
            })
        })?;

    Ok(())
}

#[async_trait]
impl ReactionLedger for SqliteReactionLedger {
    #[instrument(skip(self))]
    async fn react(
        &self,
        post_id: PostId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> RepoResult<ReactionChange> {
        let mut attempt = 1;
        loop {
            match self.react_once(post_id, user_id, kind).await {
                Ok(change) => {
                    debug!(outcome = %change.outcome, attempt, "Reaction applied");
                    return Ok(change);
                }
                Err(e) if e.is_retryable() && attempt < self.retry.max_attempts => {
                    let delay = self.retry.delay(attempt);
                    warn!(attempt, ?delay, error = %e, "Reaction transaction contended, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    #[instrument(skip(self))]
    async fn find(&self, post_id: PostId, user_id: UserId) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT post_id, user_id, kind, created_at
            FROM reactions
            WHERE post_id = ? AND user_id = ?
            ",
        )
        .bind(post_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn counters(&self, post_id: PostId) -> RepoResult<Option<ReactionCounters>> {
        let result = sqlx::query_as::<_, CountersModel>(
            "SELECT likes, dislikes FROM posts WHERE id = ?",
        )
        .bind(post_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReactionCounters::from))
    }

    #[instrument(skip(self))]
    async fn audit(&self, post_id: PostId) -> RepoResult<Option<CounterAudit>> {
        // One statement, so both sides come from the same snapshot
        let result = sqlx::query_as::<_, CounterAuditModel>(
            r"
            SELECT
                p.likes,
                p.dislikes,
                (SELECT COUNT(*) FROM reactions r WHERE r.post_id = p.id AND r.kind = 'like')
                    AS ledger_likes,
                (SELECT COUNT(*) FROM reactions r WHERE r.post_id = p.id AND r.kind = 'dislike')
                    AS ledger_dislikes
            FROM posts p
            WHERE p.id = ?
            ",
        )
        .bind(post_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(|model| audit_from_model(post_id, model)))
    }
}
