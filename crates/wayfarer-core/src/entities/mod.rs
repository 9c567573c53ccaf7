//! Domain entities - core business objects

mod comment;
mod follow;
mod post;
mod reaction;

pub use comment::{Comment, NewComment};
pub use follow::{Follow, FollowCounts};
pub use post::{NewPost, Post, PostUpdate};
pub use reaction::Reaction;
