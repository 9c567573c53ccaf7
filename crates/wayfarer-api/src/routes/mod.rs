//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{comments, follows, health, posts, reactions, users};
use crate::state::AppState;

/// Create the main API router (health routes are merged separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(post_routes())
        .merge(reaction_routes())
        .merge(user_routes())
        .merge(follow_routes())
}

/// Post and comment routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route("/posts/search", get(posts::search_posts))
        .route(
            "/posts/:post_id",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
        .route(
            "/posts/:post_id/comments",
            get(comments::list_comments).post(comments::add_comment),
        )
}

/// Reaction routes
fn reaction_routes() -> Router<AppState> {
    Router::new()
        .route("/posts/:post_id/like", post(reactions::like_post))
        .route("/posts/:post_id/dislike", post(reactions::dislike_post))
        .route("/posts/:post_id/reaction", get(reactions::get_reaction))
        .route(
            "/posts/:post_id/reactions/audit",
            get(reactions::audit_reactions),
        )
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id/posts", get(users::get_user_posts))
        .route("/users/:user_id/likes", get(users::get_user_likes))
}

/// Follow routes
fn follow_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/:user_id/follow",
            post(follows::follow_user).delete(follows::unfollow_user),
        )
        .route("/users/:user_id/followers", get(follows::get_follow_counts))
        .route("/feed", get(follows::get_feed))
}
