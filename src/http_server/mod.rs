//! # HTTP Server Module
//!
//! Serves the voting API over HTTP.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/*` - Candidates, parties, voters and votes
//!
//! Any other path answers 404 with an empty body.

pub mod config;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
