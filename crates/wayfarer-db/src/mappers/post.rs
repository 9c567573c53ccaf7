//! Post entity <-> model mapper

use wayfarer_core::entities::Post;
use wayfarer_core::value_objects::{CounterAudit, PostId, ReactionCounters, UserId};

use crate::models::{CounterAuditModel, CountersModel, PostModel};

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: PostId::new(model.id),
            user_id: UserId::new(model.user_id),
            title: model.title,
            content: model.content,
            country: model.country,
            visit_date: model.visit_date,
            likes: model.likes,
            dislikes: model.dislikes,
            created_at: model.created_at,
        }
    }
}

impl From<CountersModel> for ReactionCounters {
    fn from(model: CountersModel) -> Self {
        ReactionCounters::new(model.likes, model.dislikes)
    }
}

/// Build an audit report for a post
pub fn audit_from_model(post_id: PostId, model: CounterAuditModel) -> CounterAudit {
    CounterAudit {
        post_id,
        cached: ReactionCounters::new(model.likes, model.dislikes),
        ledger: ReactionCounters::new(model.ledger_likes, model.ledger_dislikes),
    }
}
