//! Reaction service
//!
//! Like/dislike actions on posts. All state changes go through the
//! [`ReactionLedger`](wayfarer_core::traits::ReactionLedger), which keeps the
//! post counters equal to the ledger rows.

use tracing::{error, info, instrument};

use wayfarer_core::error::DomainError;
use wayfarer_core::value_objects::{PostId, ReactionKind, UserId};

use crate::dto::{CounterAuditResponse, ReactResponse, ReactionStateResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply a like or dislike
    ///
    /// Repeating the standing reaction retracts it; the opposite kind switches it.
    #[instrument(skip(self))]
    pub async fn react(
        &self,
        post_id: PostId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> ServiceResult<ReactResponse> {
        let change = self
            .ctx
            .reaction_ledger()
            .react(post_id, user_id, kind)
            .await
            .inspect_err(|e| {
                if !e.is_not_found() {
                    error!(error = %e, "Reaction failed");
                }
            })?;

        info!(
            post_id = %post_id,
            user_id = %user_id,
            kind = %kind,
            outcome = %change.outcome,
            likes = change.counters.likes,
            dislikes = change.counters.dislikes,
            "Reaction applied"
        );

        Ok(ReactResponse::from(change))
    }

    /// Standing reaction of a user on a post
    #[instrument(skip(self))]
    pub async fn get_reaction(
        &self,
        post_id: PostId,
        user_id: UserId,
    ) -> ServiceResult<ReactionStateResponse> {
        let ledger = self.ctx.reaction_ledger();

        if ledger.counters(post_id).await?.is_none() {
            return Err(DomainError::PostNotFound(post_id).into());
        }

        let reaction = ledger.find(post_id, user_id).await?;

        Ok(ReactionStateResponse {
            reaction: reaction.map(|r| r.kind),
        })
    }

    /// Compare a post's cached counters with its ledger rows
    #[instrument(skip(self))]
    pub async fn audit(&self, post_id: PostId) -> ServiceResult<CounterAuditResponse> {
        let audit = self
            .ctx
            .reaction_ledger()
            .audit(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        if !audit.is_consistent() {
            error!(?audit, "Reaction counters drifted from ledger");
        }

        Ok(CounterAuditResponse::from(audit))
    }
}
