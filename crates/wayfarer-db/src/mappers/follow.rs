//! Follow entity <-> model mapper

use wayfarer_core::entities::{Follow, FollowCounts};
use wayfarer_core::value_objects::UserId;

use crate::models::{FollowCountsModel, FollowModel};

impl From<FollowModel> for Follow {
    fn from(model: FollowModel) -> Self {
        Follow {
            follower_id: UserId::new(model.follower_id),
            following_id: UserId::new(model.following_id),
            created_at: model.created_at,
        }
    }
}

impl From<FollowCountsModel> for FollowCounts {
    fn from(model: FollowCountsModel) -> Self {
        FollowCounts {
            followers: model.followers,
            following: model.following,
        }
    }
}
