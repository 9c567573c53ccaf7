//! Value objects - immutable types that represent domain concepts

mod ids;
mod reaction;
mod sort;

pub use ids::{CommentId, IdParseError, PostId, UserId};
pub use reaction::{
    CounterAudit, ReactionChange, ReactionCounters, ReactionKind, ReactionOutcome,
    ReactionTransition,
};
pub use sort::PostSort;
