//! Follow handlers
//!
//! Following travellers and reading their posts as a feed.

use axum::{extract::State, Json};
use wayfarer_core::UserId;
use wayfarer_service::{FollowCountsResponse, FollowResponse, FollowService, PostResponse};

use crate::extractors::{AuthUser, IdPath, Pagination};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// POST /users/{user_id}/follow
pub async fn follow_user(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath<UserId>,
) -> ApiResult<Created<FollowResponse>> {
    let service = FollowService::new(state.service_context());
    let follow = service.follow(auth.user_id, user_id).await?;
    Ok(Created(follow))
}

/// DELETE /users/{user_id}/follow
pub async fn unfollow_user(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath<UserId>,
) -> ApiResult<NoContent> {
    let service = FollowService::new(state.service_context());
    service.unfollow(auth.user_id, user_id).await?;
    Ok(NoContent)
}

/// GET /users/{user_id}/followers
pub async fn get_follow_counts(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<UserId>,
) -> ApiResult<Json<FollowCountsResponse>> {
    let counts = FollowService::new(state.service_context())
        .counts(user_id)
        .await?;
    Ok(Json(counts))
}

/// Posts by the users the caller follows, newest first
///
/// GET /feed?limit&offset
pub async fn get_feed(
    State(state): State<AppState>,
    auth: AuthUser,
    page: Pagination,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = FollowService::new(state.service_context());
    let posts = service.feed(auth.user_id, page.into()).await?;
    Ok(Json(posts))
}
