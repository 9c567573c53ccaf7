//! # wayfarer-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, Follow, FollowCounts, NewComment, NewPost, Post, PostUpdate, Reaction,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, FollowRepository, PostQuery, PostRepository, ReactionLedger, RepoResult,
};
pub use value_objects::{
    CommentId, CounterAudit, IdParseError, PostId, PostSort, ReactionChange, ReactionCounters,
    ReactionKind, ReactionOutcome, ReactionTransition, UserId,
};
