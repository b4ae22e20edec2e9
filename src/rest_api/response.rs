//! # Response Formatting
//!
//! The uniform success envelope returned by every route.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::schema::Entity;
use crate::store::Row;

pub const MESSAGE_SUCCESS: &str = "success";
pub const MESSAGE_DELETED: &str = "deleted";

/// Success body: `{ message, data?, changes?, id? }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl Envelope {
    fn message(message: &'static str) -> Self {
        Self {
            message,
            data: None,
            changes: None,
            id: None,
        }
    }

    /// `"success"` carrying `data`
    pub fn success(data: Value) -> Self {
        Self {
            data: Some(data),
            ..Self::message(MESSAGE_SUCCESS)
        }
    }

    /// `"success"` carrying a row set
    pub fn rows(rows: Vec<Row>) -> Self {
        Self::success(Value::Array(rows.into_iter().map(Value::Object).collect()))
    }

    /// `"success"` carrying a single row, or `null` when nothing matched
    pub fn row(row: Option<Row>) -> Self {
        Self::success(row.map(Value::Object).unwrap_or(Value::Null))
    }

    /// `"<Entity> not found"` with no data
    pub fn not_found(entity: Entity) -> Self {
        Self::message(entity.not_found_message())
    }

    /// Update outcome: the echoed payload, or not-found when no row changed
    pub fn updated(entity: Entity, payload: Value, changes: u64) -> Self {
        if changes == 0 {
            return Self::not_found(entity);
        }
        Self::success(payload).with_changes(changes)
    }

    /// Delete outcome: the removed id, or not-found when no row matched
    pub fn deleted(entity: Entity, id: i64, changes: u64) -> Self {
        if changes == 0 {
            return Self::not_found(entity);
        }
        Self {
            changes: Some(changes),
            id: Some(id),
            ..Self::message(MESSAGE_DELETED)
        }
    }

    pub fn with_changes(mut self, changes: u64) -> Self {
        self.changes = Some(changes);
        self
    }

    pub fn with_id(mut self, id: Option<i64>) -> Self {
        self.id = id;
        self
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
