//! Vote tally aggregation
//!
//! Counts votes per candidate and joins the candidate and party names for
//! display. Only candidates with at least one vote appear. Results are ordered
//! by count descending, ties broken by candidate id ascending.

use std::cmp::Reverse;

use crate::store::{Query, Row};

/// Builds the tally query and shapes its rows
pub struct TallyAggregator;

impl TallyAggregator {
    /// Grouped count over existing vote rows.
    ///
    /// `votes` is inner-joined to `candidates`, so votes for a deleted
    /// candidate are not counted.
    pub fn query() -> Query {
        Query::fetch(
            "SELECT candidates.id, candidates.first_name, candidates.last_name, \
                    candidates.industry_connected, candidates.party_id, \
                    parties.name AS party_name, COUNT(votes.id) AS count \
             FROM votes \
             INNER JOIN candidates ON votes.candidate_id = candidates.id \
             LEFT JOIN parties ON candidates.party_id = parties.id \
             GROUP BY candidates.id, candidates.first_name, candidates.last_name, \
                      candidates.industry_connected, candidates.party_id, parties.name \
             ORDER BY count DESC, candidates.id ASC",
        )
    }

    /// Enforce the tally ordering on decoded rows and drop zero counts.
    ///
    /// The sort is stable, so rows the store already ordered stay put.
    pub fn shape(rows: Vec<Row>) -> Vec<Row> {
        let mut rows: Vec<Row> = rows.into_iter().filter(|r| vote_count(r) > 0).collect();
        rows.sort_by_key(|r| (Reverse(vote_count(r)), candidate_id(r)));
        rows
    }
}

fn vote_count(row: &Row) -> i64 {
    row.get("count").and_then(|v| v.as_i64()).unwrap_or(0)
}

fn candidate_id(row: &Row) -> i64 {
    row.get("id").and_then(|v| v.as_i64()).unwrap_or(i64::MAX)
}
