//! Reaction entity <-> model mapper

use wayfarer_core::entities::Reaction;
use wayfarer_core::error::DomainError;
use wayfarer_core::value_objects::{PostId, ReactionKind, UserId};

use crate::models::ReactionModel;

/// Decode the `kind` column
pub fn parse_kind(raw: &str) -> Result<ReactionKind, DomainError> {
    ReactionKind::parse(raw)
        .ok_or_else(|| DomainError::DatabaseError(format!("unknown reaction kind: {raw}")))
}

/// Convert ReactionModel to Reaction entity
impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        Ok(Reaction {
            post_id: PostId::new(model.post_id),
            user_id: UserId::new(model.user_id),
            kind: parse_kind(&model.kind)?,
            created_at: model.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn model(kind: &str) -> ReactionModel {
        ReactionModel {
            post_id: 1,
            user_id: 2,
            kind: kind.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_reaction_from_model() {
        let reaction = Reaction::try_from(model("dislike")).unwrap();
        assert_eq!(reaction.kind, ReactionKind::Dislike);
        assert_eq!(reaction.user_id, UserId::new(2));
    }

    #[test]
    fn test_unknown_kind_is_database_error() {
        let err = Reaction::try_from(model("love")).unwrap_err();
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }
}
