//! # Request Bodies
//!
//! Write routes accept JSON or `application/x-www-form-urlencoded` bodies.
//! Form fields arrive as strings; the typed payloads read numeric and flag
//! strings the same way as their JSON counterparts.

use std::collections::HashMap;

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::{Form, Json};
use serde_json::{Map, Value};

use super::errors::RestError;

/// A write payload as a JSON value, whichever encoding it was sent in
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for RequestBody
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(req.headers()) {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|rejection| RestError::InvalidBody(rejection.body_text()))?;
            return Ok(Self(form_to_value(fields)));
        }

        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| RestError::InvalidBody(rejection.body_text()))?;
        Ok(Self(value))
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

fn form_to_value(fields: HashMap<String, String>) -> Value {
    Value::Object(
        fields
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect::<Map<String, Value>>(),
    )
}
