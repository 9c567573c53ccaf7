//! # wayfarer-db
//!
//! Database layer implementing repository traits with SQLite via SQLx.
//!
//! ## Overview
//!
//! This crate provides SQLite implementations for the repository traits
//! defined in `wayfarer-core`:
//!
//! - Connection pool management (WAL journal, busy timeout, foreign keys)
//! - Schema bootstrap
//! - Database models with SQLx `FromRow` derives and model → entity mappers
//! - Repository implementations, including the transactional reaction ledger
//!   and the follow graph behind the personal feed
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wayfarer_db::{create_pool, run_migrations, DatabaseConfig, SqliteReactionLedger};
//! use wayfarer_core::{ReactionKind, ReactionLedger};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::new("sqlite://wayfarer.db")).await?;
//!     run_migrations(&pool).await?;
//!
//!     let ledger = SqliteReactionLedger::new(pool);
//!     let change = ledger.react(post_id, user_id, ReactionKind::Like).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, ping, DatabaseConfig, SqlitePool};
pub use repositories::{
    RetryPolicy, SqliteCommentRepository, SqliteFollowRepository, SqlitePostRepository,
    SqliteReactionLedger,
};
pub use schema::run_migrations;
