//! User handlers
//!
//! Read-only views over a user's posts.

use axum::{extract::State, Json};
use wayfarer_core::UserId;
use wayfarer_service::{PostResponse, PostService, UserLikesResponse};

use crate::extractors::IdPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /users/{user_id}/posts
pub async fn get_user_posts(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<UserId>,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let posts = PostService::new(state.service_context())
        .list_user_posts(user_id)
        .await?;
    Ok(Json(posts))
}

/// GET /users/{user_id}/likes
pub async fn get_user_likes(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<UserId>,
) -> ApiResult<Json<UserLikesResponse>> {
    let total = PostService::new(state.service_context())
        .user_like_total(user_id)
        .await?;
    Ok(Json(total))
}
