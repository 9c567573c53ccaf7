//! Post handlers
//!
//! Endpoints for publishing, browsing and editing blog posts.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use wayfarer_core::PostId;
use wayfarer_service::{
    CreatePostRequest, PostResponse, PostService, SearchQuery, UpdatePostRequest,
};

use crate::extractors::{AuthUser, IdPath, Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Publish a post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service.create_post(auth.user_id, request).await?;
    Ok(Created(post))
}

/// List posts
///
/// GET /posts?limit&offset&sort
pub async fn list_posts(
    State(state): State<AppState>,
    page: Pagination,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_posts(page.into()).await?;
    Ok(Json(posts))
}

/// Search posts by country or title
///
/// GET /posts/search?query=
pub async fn search_posts(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.body_text()))?;

    let service = PostService::new(state.service_context());
    let posts = service.search_posts(&query.query).await?;
    Ok(Json(posts))
}

/// Get a post
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    IdPath(post_id): IdPath<PostId>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service.get_post(post_id).await?;
    Ok(Json(post))
}

/// Edit a post (owner only)
///
/// PATCH /posts/{post_id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<PostId>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service.update_post(post_id, auth.user_id, request).await?;
    Ok(Json(post))
}

/// Delete a post (owner only)
///
/// DELETE /posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<PostId>,
) -> ApiResult<NoContent> {
    let service = PostService::new(state.service_context());
    service.delete_post(post_id, auth.user_id).await?;
    Ok(NoContent)
}
