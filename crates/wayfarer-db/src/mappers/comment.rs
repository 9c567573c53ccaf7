//! Comment entity <-> model mapper

use wayfarer_core::entities::Comment;
use wayfarer_core::value_objects::{CommentId, PostId, UserId};

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: CommentId::new(model.id),
            post_id: PostId::new(model.post_id),
            user_id: UserId::new(model.user_id),
            content: model.content,
            created_at: model.created_at,
        }
    }
}
