//! # MySQL Store
//!
//! Production [`DataStore`] over a `sqlx` MySQL pool.

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use sqlx::MySql;
use tracing::{debug, info};

use super::errors::{StoreError, StoreResult};
use super::query::{Param, Query, QueryKind, QueryOutput};
use super::rows::decode_row;
use super::DataStore;

type MySqlQuery<'q> = sqlx::query::Query<'q, MySql, <MySql as sqlx::Database>::Arguments<'q>>;

#[derive(Clone, Debug)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Open a pool against a `mysql://` URL
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| StoreError::Connect(e.to_string()))?;

        info!(max_connections, "connected to MySQL");
        Ok(Self { pool })
    }
}

#[async_trait]
impl DataStore for MySqlStore {
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
                // MySQL reports 0 when the statement assigned no id
                let last_insert_id = i64::try_from(result.last_insert_id())
                    .ok()
                    .filter(|id| *id > 0);
                Ok(QueryOutput::from_write(result.rows_affected(), last_insert_id))
            }
        }
    }
}

fn bind_params(query: &Query) -> MySqlQuery<'_> {
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
