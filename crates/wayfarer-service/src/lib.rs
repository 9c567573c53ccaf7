//! # wayfarer-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AddCommentRequest, CommentResponse, CounterAuditResponse, CreatePostRequest, FeedQuery,
    FollowCountsResponse, FollowResponse, HealthChecks, HealthResponse, ListPostsQuery,
    PostResponse, ReactResponse, ReactionStateResponse, ReadinessResponse, SearchQuery,
    UpdatePostRequest, UserLikesResponse,
};
pub use services::{
    CommentService, FollowService, PostService, ReactionService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
