//! # REST API Handler
//!
//! Per-entity operations behind the HTTP routes. Each call validates its
//! payload, issues exactly one query against the injected store and wraps the
//! result in an [`Envelope`].

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info};

use crate::planner::{FieldUpdate, NewRecord, QueryPlanner, TallyAggregator};
use crate::schema::{
    CandidatePartyUpdate, Entity, NewCandidate, NewParty, NewVote, NewVoter, Payload,
    VoterEmailUpdate,
};
use crate::store::{DataStore, Query, QueryOutput};

use super::errors::RestResult;
use super::response::Envelope;

/// Voting operations over an injected [`DataStore`]
#[derive(Clone)]
pub struct VotingHandler {
    store: Arc<dyn DataStore>,
}

impl VotingHandler {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    // ==================
    // Candidates
    // ==================

    /// All candidates, each with its party's `party_name`
    pub async fn list_candidates(&self) -> RestResult<Envelope> {
        self.list(Entity::Candidate).await
    }

    pub async fn get_candidate(&self, id: i64) -> RestResult<Envelope> {
        self.get(Entity::Candidate, id).await
    }

    /// Requires `first_name`, `last_name` and `industry_connected`
    pub async fn create_candidate(&self, payload: Value) -> RestResult<Envelope> {
        let candidate = NewCandidate::from_payload(&payload)?;
        let output = self.insert(NewRecord::Candidate(&candidate)).await?;
        Ok(Envelope::success(payload).with_id(output.last_insert_id))
    }

    /// Move a candidate to another party (`party_id: null` clears it)
    pub async fn update_candidate_party(&self, id: i64, payload: Value) -> RestResult<Envelope> {
        let update = CandidatePartyUpdate::from_payload(&payload)?;
        self.update(id, FieldUpdate::CandidateParty(update.party_id), payload)
            .await
    }

    pub async fn delete_candidate(&self, id: i64) -> RestResult<Envelope> {
        self.delete(Entity::Candidate, id).await
    }

    // ==================
    // Parties
    // ==================

    pub async fn list_parties(&self) -> RestResult<Envelope> {
        self.list(Entity::Party).await
    }

    pub async fn get_party(&self, id: i64) -> RestResult<Envelope> {
        self.get(Entity::Party, id).await
    }

    pub async fn create_party(&self, payload: Value) -> RestResult<Envelope> {
        let party = NewParty::from_payload(&payload)?;
        let output = self.insert(NewRecord::Party(&party)).await?;
        Ok(Envelope::success(payload).with_id(output.last_insert_id))
    }

    pub async fn delete_party(&self, id: i64) -> RestResult<Envelope> {
        self.delete(Entity::Party, id).await
    }

    // ==================
    // Voters
    // ==================

    /// All voters, ordered by last name
    pub async fn list_voters(&self) -> RestResult<Envelope> {
        self.list(Entity::Voter).await
    }

    pub async fn get_voter(&self, id: i64) -> RestResult<Envelope> {
        self.get(Entity::Voter, id).await
    }

    pub async fn create_voter(&self, payload: Value) -> RestResult<Envelope> {
        let voter = NewVoter::from_payload(&payload)?;
        let output = self.insert(NewRecord::Voter(&voter)).await?;
        Ok(Envelope::success(payload).with_id(output.last_insert_id))
    }

    pub async fn update_voter_email(&self, id: i64, payload: Value) -> RestResult<Envelope> {
        let update = VoterEmailUpdate::from_payload(&payload)?;
        self.update(id, FieldUpdate::VoterEmail(&update.email), payload)
            .await
    }

    pub async fn delete_voter(&self, id: i64) -> RestResult<Envelope> {
        self.delete(Entity::Voter, id).await
    }

    // ==================
    // Votes
    // ==================

    /// Vote counts per candidate, highest first
    pub async fn tally(&self) -> RestResult<Envelope> {
        let output = self.execute(TallyAggregator::query()).await?;
        Ok(Envelope::rows(TallyAggregator::shape(output.rows)))
    }

    /// Record one vote. One vote per voter is not checked here.
    pub async fn create_vote(&self, payload: Value) -> RestResult<Envelope> {
        let vote = NewVote::from_payload(&payload)?;
        let output = self.insert(NewRecord::Vote(&vote)).await?;
        Ok(Envelope::success(payload)
            .with_changes(output.affected_rows)
            .with_id(output.last_insert_id))
    }

    // ==================
    // Shared operations
    // ==================

    async fn list(&self, entity: Entity) -> RestResult<Envelope> {
        let output = self.execute(QueryPlanner::list(entity)).await?;
        Ok(Envelope::rows(output.rows))
    }

    async fn get(&self, entity: Entity, id: i64) -> RestResult<Envelope> {
        let output = self.execute(QueryPlanner::get(entity, id)).await?;
        Ok(Envelope::row(output.rows.into_iter().next()))
    }

    async fn insert(&self, record: NewRecord<'_>) -> RestResult<QueryOutput> {
        let output = self.execute(QueryPlanner::insert(record)).await?;
        info!(table = record.table(), id = ?output.last_insert_id, "record created");
        Ok(output)
    }

    async fn update(
        &self,
        id: i64,
        field: FieldUpdate<'_>,
        payload: Value,
    ) -> RestResult<Envelope> {
        let output = self.execute(QueryPlanner::update(id, field)).await?;
        Ok(Envelope::updated(field.entity(), payload, output.affected_rows))
    }

    async fn delete(&self, entity: Entity, id: i64) -> RestResult<Envelope> {
        let output = self.execute(QueryPlanner::delete(entity, id)).await?;
        if output.affected_rows > 0 {
            info!(entity = %entity, id, "record deleted");
        }
        Ok(Envelope::deleted(entity, id, output.affected_rows))
    }

    async fn execute(&self, query: Query) -> RestResult<QueryOutput> {
        self.store.execute(&query).await.map_err(|e| {
            error!(error = %e, sql = query.sql(), "query failed");
            e.into()
        })
    }
}
