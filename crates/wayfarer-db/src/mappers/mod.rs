//! Model to entity mappers
//!
//! - `From<Model> for Entity`: convert database rows to domain objects
//! - `TryFrom` where a column holds an enumerated value that must be checked

mod comment;
mod follow;
mod post;
mod reaction;

pub use post::audit_from_model;
pub use reaction::parse_kind;
