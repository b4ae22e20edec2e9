//! # SQLite Store
//!
//! [`DataStore`] over a `sqlx` SQLite pool. Used for local runs with a
//! `sqlite:` URL and by the integration tests.

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;
use tracing::{debug, info};

use super::errors::{StoreError, StoreResult};
use super::query::{Param, Query, QueryKind, QueryOutput};
use super::rows::decode_row;
use super::DataStore;

type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, <Sqlite as sqlx::Database>::Arguments<'q>>;

#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open a pool against a `sqlite:` URL.
    ///
    /// Every connection to `sqlite::memory:` gets its own database, so
    /// callers sharing one in-memory database should use [`Self::from_pool`]
    /// with a single connection.
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| StoreError::Connect(e.to_string()))?;

        info!(max_connections, "connected to SQLite");
        Ok(Self { pool })
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DataStore for SqliteStore {
    async fn execute(&self, query: &Query) -> StoreResult<QueryOutput> {
        debug!(sql = query.sql(), params = query.params().len(), "executing query");
        let prepared = bind_params(query);

        match query.kind() {
            QueryKind::Fetch => {
                let rows = prepared.fetch_all(&self.pool).await?;
                let rows = rows.iter().map(decode_row).collect::<StoreResult<Vec<_>>>()?;
                Ok(QueryOutput::from_rows(rows))
            }
            QueryKind::Write => {
                let result = prepared.execute(&self.pool).await?;
                let last_insert_id = Some(result.last_insert_rowid()).filter(|id| *id > 0);
                Ok(QueryOutput::from_write(result.rows_affected(), last_insert_id))
            }
        }
    }
}

fn bind_params(query: &Query) -> SqliteQuery<'_> {
    query
        .params()
        .iter()
        .fold(sqlx::query(query.sql()), |prepared, param| match param {
            Param::Int(v) => prepared.bind(*v),
            Param::Bool(v) => prepared.bind(*v),
            Param::Text(v) => prepared.bind(v.clone()),
            Param::Null => prepared.bind(None::<i64>),
        })
}
