//! Database models - SQLx-compatible structs for SQLite tables

mod comment;
mod follow;
mod post;
mod reaction;

pub use comment::CommentModel;
pub use follow::{FollowCountsModel, FollowModel};
pub use post::{CounterAuditModel, CountersModel, PostModel};
pub use reaction::ReactionModel;
