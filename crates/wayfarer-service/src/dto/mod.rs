//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    AddCommentRequest, CreatePostRequest, FeedQuery, ListPostsQuery, SearchQuery,
    UpdatePostRequest,
};
pub use responses::{
    CommentResponse, CounterAuditResponse, FollowCountsResponse, FollowResponse, HealthChecks,
    HealthResponse, PostResponse, ReactResponse, ReactionStateResponse, ReadinessResponse,
    UserLikesResponse,
};
