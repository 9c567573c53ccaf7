//! Reaction entity - one user's standing like or dislike on a post

use chrono::{DateTime, Utc};

use crate::value_objects::{PostId, ReactionKind, UserId};

/// Reaction ledger row. At most one exists per (post_id, user_id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub post_id: PostId,
    pub user_id: UserId,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(post_id: PostId, user_id: UserId, kind: ReactionKind) -> Self {
        Self {
            post_id,
            user_id,
            kind,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_like(&self) -> bool {
        self.kind == ReactionKind::Like
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_creation() {
        let reaction = Reaction::new(PostId::new(1), UserId::new(100), ReactionKind::Like);
        assert_eq!(reaction.post_id, PostId::new(1));
        assert_eq!(reaction.user_id, UserId::new(100));
        assert!(reaction.is_like());
    }
}
