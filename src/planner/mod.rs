//! Query planning for the voting API
//!
//! Turns logical operations into parameterized [`Query`](crate::store::Query)
//! values and shapes the rows that come back.

mod planner;
mod tally;

pub use planner::{FieldUpdate, NewRecord, QueryPlanner};
pub use tally::TallyAggregator;
