//! Reaction handlers
//!
//! Like and dislike toggles. Repeating the standing reaction retracts it;
//! reacting with the opposite kind switches it in one step.

use axum::{extract::State, Json};
use wayfarer_core::{PostId, ReactionKind};
use wayfarer_service::{
    CounterAuditResponse, ReactResponse, ReactionService, ReactionStateResponse,
};

use crate::extractors::{AuthUser, IdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// POST /posts/{post_id}/like
pub async fn like_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<PostId>,
) -> ApiResult<Json<ReactResponse>> {
    react(&state, auth, post_id, ReactionKind::Like).await
}

/// POST /posts/{post_id}/dislike
pub async fn dislike_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<PostId>,
) -> ApiResult<Json<ReactResponse>> {
    react(&state, auth, post_id, ReactionKind::Dislike).await
}

async fn react(
    state: &AppState,
    auth: AuthUser,
    post_id: PostId,
    kind: ReactionKind,
) -> ApiResult<Json<ReactResponse>> {
    let service = ReactionService::new(state.service_context());
    let response = service.react(post_id, auth.user_id, kind).await?;
    Ok(Json(response))
}

/// Caller's standing reaction
///
/// GET /posts/{post_id}/reaction
pub async fn get_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<PostId>,
) -> ApiResult<Json<ReactionStateResponse>> {
    let service = ReactionService::new(state.service_context());
    let reaction = service.get_reaction(post_id, auth.user_id).await?;
    Ok(Json(reaction))
}

/// Cached counters next to the ledger counts
///
/// GET /posts/{post_id}/reactions/audit
pub async fn audit_reactions(
    State(state): State<AppState>,
    IdPath(post_id): IdPath<PostId>,
) -> ApiResult<Json<CounterAuditResponse>> {
    let service = ReactionService::new(state.service_context());
    let audit = service.audit(post_id).await?;
    Ok(Json(audit))
}
