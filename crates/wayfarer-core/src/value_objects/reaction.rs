//! Reaction value objects
//!
//! A user's standing reaction to a post moves through three states:
//!
//! ```text
//!            like                    dislike
//!   None ───────────▶ Liked   None ───────────▶ Disliked
//!   Liked ──like────▶ None    Disliked ─dislike─▶ None
//!   Liked ──dislike─▶ Disliked ──like──▶ Liked   (switch)
//! ```
//!
//! [`ReactionTransition::plan`] is the single place that decides the next
//! state and the counter deltas; storage backends apply the plan atomically.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::PostId;

/// Polarity of a reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    /// Storage/wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }

    /// The other polarity
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Like => Self::Dislike,
            Self::Dislike => Self::Like,
        }
    }

    /// Parse the storage representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "like" => Some(Self::Like),
            "dislike" => Some(Self::Dislike),
            _ => None,
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a `react` call did to the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionOutcome {
    /// No prior reaction; one was inserted
    Added,
    /// The same reaction was repeated and has been retracted
    Removed,
    /// The opposite reaction was replaced
    Switched,
}

impl ReactionOutcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Switched => "switched",
        }
    }
}

impl fmt::Display for ReactionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Planned change for one (post, user) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionTransition {
    /// Standing reaction before the action
    pub previous: Option<ReactionKind>,
    /// Standing reaction after the action
    pub next: Option<ReactionKind>,
    pub outcome: ReactionOutcome,
    pub like_delta: i64,
    pub dislike_delta: i64,
}

impl ReactionTransition {
    /// Decide the next state for `action` given the `current` standing reaction.
    ///
    /// Exactly one ledger row changes per plan. The counter deltas always sum the
    /// ledger change: +1 on insert, -1 on delete, -1/+1 on switch.
    pub fn plan(current: Option<ReactionKind>, action: ReactionKind) -> Self {
        let (next, outcome) = match current {
            None => (Some(action), ReactionOutcome::Added),
            Some(existing) if existing == action => (None, ReactionOutcome::Removed),
            Some(_) => (Some(action), ReactionOutcome::Switched),
        };

        let mut like_delta = 0;
        let mut dislike_delta = 0;
        for (kind, sign) in [(current, -1), (next, 1)] {
            match kind {
                Some(ReactionKind::Like) => like_delta += sign,
                Some(ReactionKind::Dislike) => dislike_delta += sign,
                None => {}
            }
        }

        Self {
            previous: current,
            next,
            outcome,
            like_delta,
            dislike_delta,
        }
    }
}

/// Like/dislike counters cached on a post
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounters {
    pub likes: i64,
    pub dislikes: i64,
}

impl ReactionCounters {
    pub const fn new(likes: i64, dislikes: i64) -> Self {
        Self { likes, dislikes }
    }

    pub fn count(&self, kind: ReactionKind) -> i64 {
        match kind {
            ReactionKind::Like => self.likes,
            ReactionKind::Dislike => self.dislikes,
        }
    }
}

/// Result of a committed `react` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionChange {
    pub outcome: ReactionOutcome,
    /// Standing reaction after the call
    pub current: Option<ReactionKind>,
    /// Counters as committed by the same transaction
    pub counters: ReactionCounters,
}

/// Cached counters compared with counts derived from the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAudit {
    pub post_id: PostId,
    pub cached: ReactionCounters,
    pub ledger: ReactionCounters,
}

impl CounterAudit {
    pub fn is_consistent(&self) -> bool {
        self.cached == self.ledger
    }
}
