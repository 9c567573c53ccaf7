//! API Integration Tests
//!
//! Each test spawns the full router against its own temporary SQLite file.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use futures::future::join_all;
use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn create_post(server: &TestServer, token: &str) -> PostResponse {
    let response = server
        .post_auth("/posts", token, &CreatePostRequest::unique())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn react(server: &TestServer, token: &str, post_id: i64, kind: &str) -> ReactResponse {
    let response = server
        .post_auth_empty(&format!("/posts/{post_id}/{kind}"), token)
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_root("/health").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_root("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/posts").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_like_twice_then_dislike() {
    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.token_for(1);
    let reader = server.token_for(2);
    let post = create_post(&server, &author).await;

    let first = react(&server, &reader, post.id, "like").await;
    assert_eq!(first.action, "added");
    assert_eq!((first.likes, first.dislikes), (1, 0));

    let second = react(&server, &reader, post.id, "like").await;
    assert_eq!(second.action, "removed");
    assert_eq!((second.likes, second.dislikes), (0, 0));

    let third = react(&server, &reader, post.id, "dislike").await;
    assert_eq!(third.action, "added");
    assert_eq!((third.likes, third.dislikes), (0, 1));

    let response = server
        .get_auth(&format!("/posts/{}/reaction", post.id), &reader)
        .await
        .unwrap();
    let state: ReactionStateResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(state.reaction.as_deref(), Some("dislike"));
}

#[tokio::test]
async fn test_opposite_reaction_switches() {
    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.token_for(1);
    let reader = server.token_for(2);
    let post = create_post(&server, &author).await;

    react(&server, &reader, post.id, "like").await;
    let switched = react(&server, &reader, post.id, "dislike").await;
    assert_eq!(switched.action, "switched");
    assert_eq!((switched.likes, switched.dislikes), (0, 1));

    let response = server.get(&format!("/posts/{}", post.id)).await.unwrap();
    let stored: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((stored.likes, stored.dislikes), (0, 1));
}

#[tokio::test]
async fn test_reaction_state_is_null_without_reaction() {
    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.token_for(1);
    let post = create_post(&server, &author).await;

    let response = server
        .get_auth(&format!("/posts/{}/reaction", post.id), &author)
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["reaction"].is_null());
}

#[tokio::test]
async fn test_react_requires_token() {
    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.token_for(1);
    let post = create_post(&server, &author).await;

    let response = server
        .post_empty(&format!("/posts/{}/like", post.id))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTH");

    let response = server
        .post_auth_empty(&format!("/posts/{}/like", post.id), "not-a-jwt")
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_TOKEN");

    // Rejected calls leave no trace in the ledger
    let response = server.get(&format!("/posts/{}", post.id)).await.unwrap();
    let stored: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((stored.likes, stored.dislikes), (0, 0));
}

#[tokio::test]
async fn test_react_to_unknown_post() {
    let server = TestServer::start().await.expect("Failed to start server");
    let reader = server.token_for(2);

    let response = server.post_auth_empty("/posts/999/like", &reader).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_POST");

    let response = server.get_auth("/posts/999/reaction", &reader).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_malformed_post_id() {
    let server = TestServer::start().await.expect("Failed to start server");
    let reader = server.token_for(2);

    let response = server.post_auth_empty("/posts/abc/like", &reader).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_concurrent_likes_keep_counters_exact() {
    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.token_for(1);
    let post = create_post(&server, &author).await;

    let path = format!("/posts/{}/like", post.id);
    let tokens: Vec<String> = (100..130).map(|id| server.token_for(id)).collect();
    let responses = join_all(
        tokens
            .iter()
            .map(|token| server.post_auth_empty(&path, token)),
    )
    .await;
    for response in responses {
        assert_status(response.unwrap(), StatusCode::OK).await.unwrap();
    }

    let response = server
        .get(&format!("/posts/{}/reactions/audit", post.id))
        .await
        .unwrap();
    let audit: CounterAuditResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(audit.likes, 30);
    assert_eq!(audit.ledger_likes, 30);
    assert_eq!(audit.dislikes, 0);
    assert!(audit.consistent);
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_post() {
    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.token_for(1);
    let request = CreatePostRequest::in_country("Japan");

    let response = server.post_auth("/posts", &author, &request).await.unwrap();
    let created: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.user_id, 1);
    assert_eq!(created.title, request.title);
    assert_eq!(created.country, "Japan");
    assert_eq!(created.visit_date, "2024-05-17");
    assert_eq!((created.likes, created.dislikes), (0, 0));

    let response = server.get(&format!("/posts/{}", created.id)).await.unwrap();
    let fetched: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.content, created.content);
}

#[tokio::test]
async fn test_create_post_validation() {
    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.token_for(1);

    let body = json!({
        "title": "",
        "content": "text",
        "country": "Chile",
        "visit_date": "2024-01-01",
    });
    let response = server.post_auth("/posts", &author, &body).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");

    let body = json!({
        "title": "Valparaiso",
        "content": "text",
        "country": "Chile",
        "visit_date": "01/01/2024",
    });
    let response = server.post_auth("/posts", &author, &body).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_list_and_search_posts() {
    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.token_for(1);
    let reader = server.token_for(2);

    let peru = server
        .post_auth("/posts", &author, &CreatePostRequest::in_country("Peru"))
        .await
        .unwrap();
    let peru: PostResponse = assert_json(peru, StatusCode::CREATED).await.unwrap();
    let norway = server
        .post_auth("/posts", &author, &CreatePostRequest::in_country("Norway"))
        .await
        .unwrap();
    let norway: PostResponse = assert_json(norway, StatusCode::CREATED).await.unwrap();

    let response = server.get("/posts").await.unwrap();
    let newest: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        newest.iter().map(|p| p.id).collect::<Vec<_>>(),
        [norway.id, peru.id]
    );

    react(&server, &reader, peru.id, "like").await;
    let response = server.get("/posts?sort=most_liked&limit=1").await.unwrap();
    let top: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].id, peru.id);

    let response = server.get("/posts/search?query=nor").await.unwrap();
    let found: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].country, "Norway");

    // out-of-range paging is bounded, not rejected
    let response = server.get("/posts?limit=0&offset=-3").await.unwrap();
    let bounded: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(bounded.len(), 1);
    assert_eq!(bounded[0].id, norway.id);

    let response = server.get("/posts/search?query=").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_post_owner_only() {
    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.token_for(1);
    let stranger = server.token_for(3);
    let post = create_post(&server, &author).await;
    react(&server, &stranger, post.id, "like").await;

    let patch = json!({ "title": "Renamed" });
    let response = server
        .patch_auth(&format!("/posts/{}", post.id), &stranger, &patch)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .patch_auth(&format!("/posts/{}", post.id), &author, &patch)
        .await
        .unwrap();
    let updated: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.country, post.country);
    assert_eq!(updated.likes, 1);
}

#[tokio::test]
async fn test_delete_post_cascades() {
    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.token_for(1);
    let reader = server.token_for(2);
    let post = create_post(&server, &author).await;
    react(&server, &reader, post.id, "like").await;

    let response = server
        .delete_auth(&format!("/posts/{}", post.id), &reader)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .delete_auth(&format!("/posts/{}", post.id), &author)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/posts/{}", post.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get("/users/1/likes").await.unwrap();
    let total: UserLikesResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(total.total_likes, 0);
}

#[tokio::test]
async fn test_user_posts_and_like_total() {
    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.token_for(7);
    let first = create_post(&server, &author).await;
    let second = create_post(&server, &author).await;

    for reader in [20, 21] {
        react(&server, &server.token_for(reader), first.id, "like").await;
    }
    react(&server, &server.token_for(22), second.id, "like").await;
    react(&server, &server.token_for(23), second.id, "dislike").await;

    let response = server.get("/users/7/posts").await.unwrap();
    let posts: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, second.id);

    let response = server.get("/users/7/likes").await.unwrap();
    let total: UserLikesResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(total.user_id, 7);
    assert_eq!(total.total_likes, 3);
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comments_flow() {
    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.token_for(1);
    let reader = server.token_for(2);
    let post = create_post(&server, &author).await;

    for text in ["Great photos", "Which hostel?"] {
        let body = AddCommentRequest {
            content: text.to_string(),
        };
        let response = server
            .post_auth(&format!("/posts/{}/comments", post.id), &reader, &body)
            .await
            .unwrap();
        let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        assert_eq!(comment.post_id, post.id);
        assert_eq!(comment.user_id, 2);
    }

    let response = server
        .get(&format!("/posts/{}/comments", post.id))
        .await
        .unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].content, "Which hostel?");
}

#[tokio::test]
async fn test_comment_on_unknown_post() {
    let server = TestServer::start().await.expect("Failed to start server");
    let reader = server.token_for(2);

    let body = AddCommentRequest {
        content: "Hello".to_string(),
    };
    let response = server
        .post_auth("/posts/404/comments", &reader, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get("/posts/404/comments").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Follow Tests
// ============================================================================

#[tokio::test]
async fn test_follow_feed_and_unfollow() {
    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.token_for(1);
    let bob = server.token_for(2);
    let carol = server.token_for(3);
    let reader = server.token_for(9);

    let first = create_post(&server, &alice).await;
    create_post(&server, &carol).await;
    let second = create_post(&server, &bob).await;
    let third = create_post(&server, &alice).await;

    let response = server.get_auth("/feed", &reader).await.unwrap();
    let feed: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.is_empty());

    for user_id in [1, 2] {
        let response = server
            .post_auth_empty(&format!("/users/{user_id}/follow"), &reader)
            .await
            .unwrap();
        let follow: FollowResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        assert_eq!((follow.follower_id, follow.following_id), (9, user_id));
    }

    let response = server.get_auth("/feed", &reader).await.unwrap();
    let feed: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        feed.iter().map(|p| p.id).collect::<Vec<_>>(),
        [third.id, second.id, first.id]
    );

    let response = server.get_auth("/feed?limit=1&offset=1", &reader).await.unwrap();
    let page: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.iter().map(|p| p.id).collect::<Vec<_>>(), [second.id]);

    let response = server.delete_auth("/users/1/follow", &reader).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth("/feed", &reader).await.unwrap();
    let feed: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.iter().map(|p| p.id).collect::<Vec<_>>(), [second.id]);
}

#[tokio::test]
async fn test_follow_conflicts_and_rejections() {
    let server = TestServer::start().await.expect("Failed to start server");
    let reader = server.token_for(9);

    let response = server.post_auth_empty("/users/1/follow", &reader).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post_auth_empty("/users/1/follow", &reader).await.unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "ALREADY_FOLLOWING");

    let response = server.post_auth_empty("/users/9/follow", &reader).await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.delete_auth("/users/2/follow", &reader).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_FOLLOW");

    let response = server.post_empty("/users/1/follow").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get("/feed").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_follower_counts() {
    let server = TestServer::start().await.expect("Failed to start server");

    for fan in [2, 3, 4] {
        let token = server.token_for(fan);
        let response = server.post_auth_empty("/users/1/follow", &token).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }
    let star = server.token_for(1);
    let response = server.post_auth_empty("/users/2/follow", &star).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get("/users/1/followers").await.unwrap();
    let counts: FollowCountsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts.user_id, 1);
    assert_eq!((counts.followers, counts.following), (3, 1));
}
