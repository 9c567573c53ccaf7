//! Repository implementations
//!
//! SQLite implementations of the repository traits defined in wayfarer-core.

mod comment;
mod error;
mod follow;
mod post;
mod reaction;

pub use comment::SqliteCommentRepository;
pub use follow::SqliteFollowRepository;
pub use post::SqlitePostRepository;
pub use reaction::{RetryPolicy, SqliteReactionLedger};
