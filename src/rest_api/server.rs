//! # REST API HTTP Server
//!
//! Axum routes for candidates, parties, voters and votes.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};

use super::body::RequestBody;
use super::errors::{RestError, RestResult};
use super::handler::VotingHandler;
use super::response::Envelope;

/// REST API server state
pub struct RestServer {
    handler: Arc<VotingHandler>,
}

impl RestServer {
    pub fn new(handler: VotingHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Build the Axum router (mounted under `/api` by the HTTP server)
    pub fn router(self) -> Router {
        Router::new()
            .route("/candidates", get(list_candidates))
            .route("/candidate", post(create_candidate))
            .route(
                "/candidate/:id",
                get(get_candidate)
                    .put(update_candidate)
                    .delete(delete_candidate),
            )
            .route("/parties", get(list_parties))
            .route("/party", post(create_party))
            .route("/party/:id", get(get_party).delete(delete_party))
            .route("/voters", get(list_voters))
            .route("/voter", post(create_voter))
            .route(
                "/voter/:id",
                get(get_voter).put(update_voter).delete(delete_voter),
            )
            .route("/vote", get(tally).post(create_vote))
            .with_state(self.handler)
    }
}

/// Shared state type
type ServerState = Arc<VotingHandler>;

/// Path identifiers must be integers
fn parse_id(raw: &str) -> RestResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| RestError::InvalidId(raw.to_string()))
}

// ==================
// Candidates
// ==================

async fn list_candidates(State(handler): State<ServerState>) -> RestResult<Envelope> {
    handler.list_candidates().await
}

async fn get_candidate(
    State(handler): State<ServerState>,
    Path(id): Path<String>,
) -> RestResult<Envelope> {
    handler.get_candidate(parse_id(&id)?).await
}

async fn create_candidate(
    State(handler): State<ServerState>,
    RequestBody(payload): RequestBody,
) -> RestResult<Envelope> {
    handler.create_candidate(payload).await
}

async fn update_candidate(
    State(handler): State<ServerState>,
    Path(id): Path<String>,
    RequestBody(payload): RequestBody,
) -> RestResult<Envelope> {
    let id = parse_id(&id)?;
    handler.update_candidate_party(id, payload).await
}

async fn delete_candidate(
    State(handler): State<ServerState>,
    Path(id): Path<String>,
) -> RestResult<Envelope> {
    handler.delete_candidate(parse_id(&id)?).await
}

// ==================
// Parties
// ==================

async fn list_parties(State(handler): State<ServerState>) -> RestResult<Envelope> {
    handler.list_parties().await
}

async fn get_party(
    State(handler): State<ServerState>,
    Path(id): Path<String>,
) -> RestResult<Envelope> {
    handler.get_party(parse_id(&id)?).await
}

async fn create_party(
    State(handler): State<ServerState>,
    RequestBody(payload): RequestBody,
) -> RestResult<Envelope> {
    handler.create_party(payload).await
}

async fn delete_party(
    State(handler): State<ServerState>,
    Path(id): Path<String>,
) -> RestResult<Envelope> {
    handler.delete_party(parse_id(&id)?).await
}

// ==================
// Voters
// ==================

async fn list_voters(State(handler): State<ServerState>) -> RestResult<Envelope> {
    handler.list_voters().await
}

async fn get_voter(
    State(handler): State<ServerState>,
    Path(id): Path<String>,
) -> RestResult<Envelope> {
    handler.get_voter(parse_id(&id)?).await
}

async fn create_voter(
    State(handler): State<ServerState>,
    RequestBody(payload): RequestBody,
) -> RestResult<Envelope> {
    handler.create_voter(payload).await
}

async fn update_voter(
    State(handler): State<ServerState>,
    Path(id): Path<String>,
    RequestBody(payload): RequestBody,
) -> RestResult<Envelope> {
    let id = parse_id(&id)?;
    handler.update_voter_email(id, payload).await
}

async fn delete_voter(
    State(handler): State<ServerState>,
    Path(id): Path<String>,
) -> RestResult<Envelope> {
    handler.delete_voter(parse_id(&id)?).await
}

// ==================
// Votes
// ==================

async fn tally(State(handler): State<ServerState>) -> RestResult<Envelope> {
    handler.tally().await
}

async fn create_vote(
    State(handler): State<ServerState>,
    RequestBody(payload): RequestBody,
) -> RestResult<Envelope> {
    handler.create_vote(payload).await
}
