//! Business logic services
//!
//! Service layer implementations that handle validation, logging, and
//! orchestration of repository calls.

pub mod comment;
pub mod context;
pub mod error;
pub mod follow;
pub mod post;
pub mod reaction;

pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use follow::FollowService;
pub use post::PostService;
pub use reaction::ReactionService;
