//! votetally - REST API over candidates, parties, voters and vote tallies
//!
//! Request flow: route dispatch, payload validation, one parameterized query
//! against the injected store, JSON envelope.

pub mod cli;
pub mod http_server;
pub mod planner;
pub mod rest_api;
pub mod schema;
pub mod store;
