//! Path parameter extractors
//!
//! Type-safe extraction of a single numeric id from the route.

use std::str::FromStr;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use wayfarer_core::IdParseError;

use crate::response::ApiError;

/// A single id path segment parsed into `T` (`PostId`, `UserId`)
#[derive(Debug, Clone, Copy)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: FromStr<Err = IdParseError> + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        raw.parse::<T>()
            .map(IdPath)
            .map_err(|e| ApiError::invalid_path(format!("{raw:?}: {e}")))
    }
}
