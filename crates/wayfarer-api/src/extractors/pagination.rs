//! Pagination extractor
//!
//! Reads `limit`, `offset` and `sort` from the query string of post listings
//! and the feed. Bounds are applied by the services.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use wayfarer_core::PostSort;
use wayfarer_service::{FeedQuery, ListPostsQuery};

use crate::response::ApiError;

/// Raw pagination query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
    /// `newest` or `most_liked`; anything else lists newest first
    #[serde(default)]
    pub sort: Option<String>,
}

/// Parsed pagination parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub sort: PostSort,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self {
            limit: params.limit,
            offset: params.offset,
            sort: params
                .sort
                .as_deref()
                .map_or(PostSort::Newest, PostSort::parse_lenient),
        }
    }
}

impl From<Pagination> for ListPostsQuery {
    fn from(page: Pagination) -> Self {
        Self {
            limit: page.limit,
            offset: page.offset,
            sort: page.sort,
        }
    }
}

impl From<Pagination> for FeedQuery {
    fn from(page: Pagination) -> Self {
        Self {
            limit: page.limit,
            offset: page.offset,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(Pagination::from(params))
    }
}
