//! # Parameterized Queries
//!
//! SQL text is always a `'static` string; caller-supplied values only ever
//! travel as positionally bound [`Param`]s.

use serde_json::{Map, Value};

/// A single result row, keyed by column name
pub type Row = Map<String, Value>;

/// A positionally bound query parameter
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Int(i64),
    Bool(bool),
    Text(String),
    Null,
}

impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Param::Int(v)
    }
}

impl From<bool> for Param {
    fn from(v: bool) -> Self {
        Param::Bool(v)
    }
}

impl From<String> for Param {
    fn from(v: String) -> Self {
        Param::Text(v)
    }
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Param::Text(v.to_string())
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Param::Null)
    }
}

/// Whether the statement returns rows or only an affected-row count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Fetch,
    Write,
}

/// A prepared statement: SQL with `?` placeholders plus its parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    sql: &'static str,
    params: Vec<Param>,
    kind: QueryKind,
}

impl Query {
    /// A statement whose rows are read back
    pub fn fetch(sql: &'static str) -> Self {
        Self {
            sql,
            params: Vec::new(),
            kind: QueryKind::Fetch,
        }
    }

    /// An INSERT/UPDATE/DELETE statement
    pub fn write(sql: &'static str) -> Self {
        Self {
            sql,
            params: Vec::new(),
            kind: QueryKind::Write,
        }
    }

    /// Bind the next positional parameter
    pub fn bind(mut self, param: impl Into<Param>) -> Self {
        self.params.push(param.into());
        self
    }

    pub fn sql(&self) -> &'static str {
        self.sql
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }
}

/// What a store hands back for one executed query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOutput {
    pub rows: Vec<Row>,
    pub affected_rows: u64,
    /// Identifier assigned by an INSERT, when the driver reports one
    pub last_insert_id: Option<i64>,
}

impl QueryOutput {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    pub fn from_write(affected_rows: u64, last_insert_id: Option<i64>) -> Self {
        Self {
            rows: Vec::new(),
            affected_rows,
            last_insert_id,
        }
    }
}
