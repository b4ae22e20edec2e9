//! # Data Store
//!
//! The boundary between the voting core and the relational database. The
//! service only ever sees the [`DataStore`] trait, so the pool is injected at
//! boot and tests can swap in doubles.

pub mod errors;
pub mod mysql;
pub mod query;
mod rows;
pub mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;

pub use errors::{StoreError, StoreResult};
pub use mysql::MySqlStore;
pub use query::{Param, Query, QueryKind, QueryOutput, Row};
pub use sqlite::SqliteStore;

/// Executes one parameterized statement per call
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Run `query` and return its rows (fetch) or affected-row count (write)
    async fn execute(&self, query: &Query) -> StoreResult<QueryOutput>;
}

/// Open the store matching the URL scheme (`mysql://` or `sqlite:`)
pub async fn connect(
    database_url: &str,
    max_connections: u32,
) -> StoreResult<Arc<dyn DataStore>> {
    match backend(database_url) {
        Some(Backend::MySql) => {
            let store = MySqlStore::connect(database_url, max_connections).await?;
            Ok(Arc::new(store))
        }
        Some(Backend::Sqlite) => {
            let store = SqliteStore::connect(database_url, max_connections).await?;
            Ok(Arc::new(store))
        }
        None => Err(StoreError::Connect(format!(
            "unsupported database URL scheme in '{}'",
            database_url.split(':').next().unwrap_or_default()
        ))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    MySql,
    Sqlite,
}

fn backend(database_url: &str) -> Option<Backend> {
    if database_url.starts_with("mysql:") || database_url.starts_with("mariadb:") {
        Some(Backend::MySql)
    } else if database_url.starts_with("sqlite:") {
        Some(Backend::Sqlite)
    } else {
        None
    }
}
