//! Helpers for reading loosely-typed JSON request bodies.
//!
//! Handlers take the body as `serde_json::Value` so that "not JSON", "empty
//! object" and "field missing" can each be reported with their own message.

use axum::{extract::rejection::JsonRejection, Json};
use serde_json::{Map, Value};

use crate::api::error::ApiError;

pub type JsonPayload = Result<Json<Value>, JsonRejection>;

/// Unwraps the body into a JSON object; anything else is a bad request.
/// `limit` is the configured body cap, reported back on 413.
pub fn json_object(payload: JsonPayload, limit: usize) -> Result<Map<String, Value>, ApiError> {
    let Json(value) = payload.map_err(|r| ApiError::from_json_rejection(r, limit))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ApiError::bad_request("Request body must be a JSON object")),
    }
}

/// Reads an optional string field. `null` counts as absent.
pub fn string_field(body: &Map<String, Value>, name: &str) -> Result<Option<String>, ApiError> {
    match body.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ApiError::bad_request(format!(
            "Field '{name}' must be a string"
        ))),
    }
}

pub fn required_string_field(body: &Map<String, Value>, name: &str) -> Result<String, ApiError> {
    string_field(body, name)?.ok_or_else(|| {
        ApiError::bad_request(format!("Missing '{name}' field in request body"))
    })
}
