//! # Voting REST API Module
//!
//! HTTP endpoints for candidates, parties, voters and the vote tally.
//! Every route maps to a single parameterized query and answers with the
//! uniform JSON envelope.

pub mod body;
pub mod errors;
pub mod handler;
pub mod response;
pub mod server;

pub use body::RequestBody;
pub use errors::{ErrorResponse, RestError, RestResult};
pub use handler::VotingHandler;
pub use response::Envelope;
pub use server::RestServer;
