//! Shared helpers for integration tests
//!
//! Each helper call opens its own in-memory SQLite database, so tests never
//! share rows.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use votetally::rest_api::VotingHandler;
use votetally::store::{DataStore, Query, QueryOutput, SqliteStore, StoreError, StoreResult};

const SCHEMA: &str = include_str!("../fixtures/schema.sqlite.sql");

/// A fresh store with the schema applied.
///
/// One pooled connection that never expires, so the in-memory database lives
/// as long as the pool.
pub async fn sqlite_store() -> SqliteStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    for statement in SCHEMA.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        sqlx::query(statement).execute(&pool).await.unwrap();
    }

    SqliteStore::from_pool(pool)
}

pub async fn sqlite_handler() -> VotingHandler {
    VotingHandler::new(Arc::new(sqlite_store().await))
}

/// Store that counts calls and returns nothing
#[derive(Default)]
pub struct RecordingStore {
    calls: AtomicUsize,
}

impl RecordingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataStore for RecordingStore {
    async fn execute(&self, _query: &Query) -> StoreResult<QueryOutput> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(QueryOutput::default())
    }
}

/// Store whose every query fails
pub struct FailingStore;

#[async_trait]
impl DataStore for FailingStore {
    async fn execute(&self, _query: &Query) -> StoreResult<QueryOutput> {
        Err(StoreError::Query("connection refused".to_string()))
    }
}
