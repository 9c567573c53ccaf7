//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, pagination and typed ids.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::AuthUser;
pub use pagination::{Pagination, PaginationParams};
pub use path::IdPath;
pub use validated::ValidatedJson;
