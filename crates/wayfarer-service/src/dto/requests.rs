//! Request DTOs for API endpoints
//!
//! Body DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use wayfarer_core::value_objects::PostSort;

/// Reject strings that are empty after trimming
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
///
/// `visit_date` must be an ISO `YYYY-MM-DD` date.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "not_blank")
    )]
    pub title: String,

    #[validate(
        length(min = 1, max = 20000, message = "Content must be 1-20000 characters"),
        custom(function = "not_blank")
    )]
    pub content: String,

    #[validate(
        length(min = 1, max = 100, message = "Country must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub country: String,

    pub visit_date: NaiveDate,
}

/// Partial post update; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "not_blank")
    )]
    pub title: Option<String>,

    #[validate(
        length(min = 1, max = 20000, message = "Content must be 1-20000 characters"),
        custom(function = "not_blank")
    )]
    pub content: Option<String>,

    #[validate(
        length(min = 1, max = 100, message = "Country must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub country: Option<String>,

    pub visit_date: Option<NaiveDate>,
}

/// Post listing query string
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListPostsQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    #[serde(default)]
    pub sort: PostSort,
}

/// Feed query string
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FeedQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Search query string
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Add comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddCommentRequest {
    #[validate(
        length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"),
        custom(function = "not_blank")
    )]
    pub content: String,
}
