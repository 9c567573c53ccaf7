//! Service context - dependency container for services
//!
//! Holds the repositories and other dependencies needed by services.

use std::sync::Arc;

use wayfarer_common::auth::JwtService;
use wayfarer_core::traits::{
    CommentRepository, FollowRepository, PostRepository, ReactionLedger,
};
use wayfarer_db::{
    SqliteCommentRepository, SqliteFollowRepository, SqlitePool, SqlitePostRepository,
    SqliteReactionLedger,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Repositories are held as trait objects so tests can substitute them.
#[derive(Clone)]
pub struct ServiceContext {
    pool: SqlitePool,

    // Repositories
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reaction_ledger: Arc<dyn ReactionLedger>,
    follow_repo: Arc<dyn FollowRepository>,

    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: SqlitePool,
        post_repo: Arc<dyn PostRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        reaction_ledger: Arc<dyn ReactionLedger>,
        follow_repo: Arc<dyn FollowRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            post_repo,
            comment_repo,
            reaction_ledger,
            follow_repo,
            jwt_service,
        }
    }

    /// Wire the SQLite repositories over one pool
    pub fn sqlite(pool: SqlitePool, jwt_service: Arc<JwtService>) -> Self {
        Self::new(
            pool.clone(),
            Arc::new(SqlitePostRepository::new(pool.clone())),
            Arc::new(SqliteCommentRepository::new(pool.clone())),
            Arc::new(SqliteReactionLedger::new(pool.clone())),
            Arc::new(SqliteFollowRepository::new(pool)),
            jwt_service,
        )
    }

    /// Get the SQLite connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn reaction_ledger(&self) -> &dyn ReactionLedger {
        self.reaction_ledger.as_ref()
    }

    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"SqlitePool")
            .field("repositories", &"...")
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom repositories
///
/// Repositories that are not set default to the SQLite implementations over `pool`.
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<SqlitePool>,
    post_repo: Option<Arc<dyn PostRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reaction_ledger: Option<Arc<dyn ReactionLedger>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: SqlitePool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reaction_ledger(mut self, ledger: Arc<dyn ReactionLedger>) -> Self {
        self.reaction_ledger = Some(ledger);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the pool or JWT service is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let pool = self
            .pool
            .ok_or_else(|| ServiceError::validation("pool is required"))?;
        let jwt_service = self
            .jwt_service
            .ok_or_else(|| ServiceError::validation("jwt_service is required"))?;

        Ok(ServiceContext::new(
            pool.clone(),
            self.post_repo
                .unwrap_or_else(|| Arc::new(SqlitePostRepository::new(pool.clone()))),
            self.comment_repo
                .unwrap_or_else(|| Arc::new(SqliteCommentRepository::new(pool.clone()))),
            self.reaction_ledger
                .unwrap_or_else(|| Arc::new(SqliteReactionLedger::new(pool.clone()))),
            self.follow_repo
                .unwrap_or_else(|| Arc::new(SqliteFollowRepository::new(pool))),
            jwt_service,
        ))
    }
}
