//! Record shapes and write-payload validation
//!
//! Every create/update passes through [`validate`] before a query is built,
//! so an incomplete payload never costs a round trip to the store.

mod errors;
mod types;
mod validator;

pub use errors::ValidationError;
pub use types::{
    CandidatePartyUpdate, Entity, NewCandidate, NewParty, NewVote, NewVoter, Payload,
    VoterEmailUpdate,
};
pub use validator::{validate, ValidationResult};
