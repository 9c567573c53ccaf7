//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CommentRepository, FollowRepository, PostQuery, PostRepository, ReactionLedger, RepoResult,
};
