//! # HTTP Server
//!
//! Combines the health check and the voting API into one Axum server.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use crate::rest_api::{RestServer, VotingHandler};

/// HTTP server for the voting API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving `handler`
    pub fn with_config(config: HttpServerConfig, handler: VotingHandler) -> Self {
        let router = Self::build_router(&config, handler);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, handler: VotingHandler) -> Router {
        let cors = if config.allows_any_origin() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .nest("/api", RestServer::new(handler).router())
            // Unknown paths get a bare 404
            .fallback(|| async { StatusCode::NOT_FOUND })
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "votetally API listening");
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
