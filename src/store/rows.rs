//! Row decoding shared by the SQL stores
//!
//! Columns are mapped to JSON by probing the driver's compatible Rust types.
//! `BOOLEAN` columns (MySQL `TINYINT(1)`, SQLite declared `BOOLEAN`) come back
//! as JSON booleans on both drivers.

use serde_json::Value;
use sqlx::{Column, ColumnIndex, Decode, Type, TypeInfo};

use super::errors::{StoreError, StoreResult};
use super::query::Row;

/// Convert a driver row into a JSON object keyed by column name
pub(crate) fn decode_row<R>(row: &R) -> StoreResult<Row>
where
    R: sqlx::Row,
    usize: ColumnIndex<R>,
    for<'r> i64: Decode<'r, R::Database> + Type<R::Database>,
    for<'r> f64: Decode<'r, R::Database> + Type<R::Database>,
    for<'r> String: Decode<'r, R::Database> + Type<R::Database>,
    for<'r> bool: Decode<'r, R::Database> + Type<R::Database>,
{
    let mut decoded = Row::new();
    for column in row.columns() {
        let is_flag = column.type_info().name().eq_ignore_ascii_case("BOOLEAN");
        let value = decode_value(row, column.ordinal(), is_flag)
            .ok_or_else(|| StoreError::Decode(column.name().to_string()))?;
        decoded.insert(column.name().to_string(), value);
    }
    Ok(decoded)
}

// NULL skips the type check, so it lands in the first probe.
fn decode_value<R>(row: &R, index: usize, is_flag: bool) -> Option<Value>
where
    R: sqlx::Row,
    usize: ColumnIndex<R>,
    for<'r> i64: Decode<'r, R::Database> + Type<R::Database>,
    for<'r> f64: Decode<'r, R::Database> + Type<R::Database>,
    for<'r> String: Decode<'r, R::Database> + Type<R::Database>,
    for<'r> bool: Decode<'r, R::Database> + Type<R::Database>,
{
    if is_flag {
        if let Ok(v) = row.try_get::<Option<bool>, _>(index) {
            return Some(v.map(Value::from).unwrap_or(Value::Null));
        }
    }
    if let Ok(v) = row.try_get::<Option<i64>, _>(index) {
        return Some(v.map(Value::from).unwrap_or(Value::Null));
    }
    if let Ok(v) = row.try_get::<Option<f64>, _>(index) {
        return Some(v.map(Value::from).unwrap_or(Value::Null));
    }
    if let Ok(v) = row.try_get::<Option<String>, _>(index) {
        return Some(v.map(Value::from).unwrap_or(Value::Null));
    }
    if let Ok(v) = row.try_get::<Option<bool>, _>(index) {
        return Some(v.map(Value::from).unwrap_or(Value::Null));
    }
    None
}
