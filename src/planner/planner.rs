//! Query planner
//!
//! Maps (entity, operation) to a single parameterized statement. SQL text is
//! fixed per entity; only bound parameters vary between calls.

use crate::schema::{Entity, NewCandidate, NewParty, NewVote, NewVoter};
use crate::store::Query;

/// A validated record ready to be inserted
#[derive(Debug, Clone, Copy)]
pub enum NewRecord<'a> {
    Candidate(&'a NewCandidate),
    Party(&'a NewParty),
    Voter(&'a NewVoter),
    Vote(&'a NewVote),
}

impl NewRecord<'_> {
    /// Table the record is inserted into
    pub fn table(&self) -> &'static str {
        match self {
            NewRecord::Candidate(_) => "candidates",
            NewRecord::Party(_) => "parties",
            NewRecord::Voter(_) => "voters",
            NewRecord::Vote(_) => "votes",
        }
    }
}

/// The whitelisted post-creation changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate<'a> {
    /// `candidates.party_id`; `None` clears the affiliation
    CandidateParty(Option<i64>),
    /// `voters.email`
    VoterEmail(&'a str),
}

impl FieldUpdate<'_> {
    pub fn entity(&self) -> Entity {
        match self {
            FieldUpdate::CandidateParty(_) => Entity::Candidate,
            FieldUpdate::VoterEmail(_) => Entity::Voter,
        }
    }
}

/// Stateless builder of per-operation queries
pub struct QueryPlanner;

impl QueryPlanner {
    /// All rows of `entity`.
    ///
    /// Candidates carry their party's name as `party_name`; voters come back
    /// ordered by last name.
    pub fn list(entity: Entity) -> Query {
        Query::fetch(match entity {
            Entity::Candidate => {
                "SELECT candidates.*, parties.name AS party_name \
                 FROM candidates \
                 LEFT JOIN parties ON candidates.party_id = parties.id \
                 ORDER BY candidates.id"
            }
            Entity::Party => "SELECT * FROM parties ORDER BY id",
            Entity::Voter => "SELECT * FROM voters ORDER BY last_name, id",
        })
    }

    /// The row with identifier `id`, if any
    pub fn get(entity: Entity, id: i64) -> Query {
        Query::fetch(match entity {
            Entity::Candidate => {
                "SELECT candidates.*, parties.name AS party_name \
                 FROM candidates \
                 LEFT JOIN parties ON candidates.party_id = parties.id \
                 WHERE candidates.id = ?"
            }
            Entity::Party => "SELECT * FROM parties WHERE id = ?",
            Entity::Voter => "SELECT * FROM voters WHERE id = ?",
        })
        .bind(id)
    }

    /// Insert a record; the store assigns the identifier
    pub fn insert(record: NewRecord<'_>) -> Query {
        match record {
            NewRecord::Candidate(c) => Query::write(
                "INSERT INTO candidates (first_name, last_name, industry_connected) \
                 VALUES (?, ?, ?)",
            )
            .bind(c.first_name.as_str())
            .bind(c.last_name.as_str())
            .bind(c.industry_connected),
            NewRecord::Party(p) => {
                Query::write("INSERT INTO parties (name, description) VALUES (?, ?)")
                    .bind(p.name.as_str())
                    .bind(p.description.as_deref())
            }
            NewRecord::Voter(v) => {
                Query::write("INSERT INTO voters (first_name, last_name, email) VALUES (?, ?, ?)")
                    .bind(v.first_name.as_str())
                    .bind(v.last_name.as_str())
                    .bind(v.email.as_str())
            }
            NewRecord::Vote(v) => {
                Query::write("INSERT INTO votes (voter_id, candidate_id) VALUES (?, ?)")
                    .bind(v.voter_id)
                    .bind(v.candidate_id)
            }
        }
    }

    /// Apply a whitelisted field change to the row with identifier `id`
    pub fn update(id: i64, update: FieldUpdate<'_>) -> Query {
        match update {
            FieldUpdate::CandidateParty(party_id) => {
                Query::write("UPDATE candidates SET party_id = ? WHERE id = ?")
                    .bind(party_id)
                    .bind(id)
            }
            FieldUpdate::VoterEmail(email) => {
                Query::write("UPDATE voters SET email = ? WHERE id = ?")
                    .bind(email)
                    .bind(id)
            }
        }
    }

    /// Remove the row with identifier `id`
    pub fn delete(entity: Entity, id: i64) -> Query {
        Query::write(match entity {
            Entity::Candidate => "DELETE FROM candidates WHERE id = ?",
            Entity::Party => "DELETE FROM parties WHERE id = ?",
            Entity::Voter => "DELETE FROM voters WHERE id = ?",
        })
        .bind(id)
    }
}
