//! Response envelope normalization.
//!
//! The backend wraps payloads inconsistently: a list may arrive as
//! `{"data":{"books":[...]}}` or as a bare array, an item as
//! `{"data":{"book":{...}}}` or a bare object. These helpers pattern-match
//! the known shapes and normalize them into one result, failing loudly with
//! [`ApiError::MalformedResponse`] on anything unrecognized instead of
//! silently falling through.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::models::{Page, PageMeta};

/// Extract a human-readable error message from a failure response body.
///
/// Falls back to `fallback` when the body is absent, unparseable, or has no
/// `message` field.
pub fn error_message(body: &[u8], fallback: &str) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Normalize a list response into a [`Page`].
///
/// Accepted shapes:
/// - a bare array `[...]`
/// - `{"data": [...]}`
/// - `{"data": {"<key>": [...]}}`, with optional pagination meta under
///   `data.meta` or at the top level
pub fn normalize_list<T: DeserializeOwned>(body: &[u8], key: &str) -> Result<Page<T>, ApiError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    if value.is_array() {
        let items = parse_items(&value)?;
        return Ok(Page { items, meta: None });
    }

    let Some(data) = value.get("data") else {
        return Err(ApiError::MalformedResponse(format!(
            "expected array or 'data' envelope, got {}",
            kind_of(&value)
        )));
    };

    if data.is_array() {
        let items = parse_items(data)?;
        let meta = parse_meta(value.get("meta"));
        return Ok(Page { items, meta });
    }

    if let Some(nested) = data.get(key) {
        let items = parse_items(nested)?;
        let meta = parse_meta(data.get("meta")).or_else(|| parse_meta(value.get("meta")));
        return Ok(Page { items, meta });
    }

    Err(ApiError::MalformedResponse(format!(
        "'data' envelope has no '{}' list",
        key
    )))
}

/// Normalize an item response.
///
/// Accepted shapes:
/// - a bare object
/// - `{"data": {"<key>": {...}}}`
/// - `{"data": {...}}`
pub fn normalize_item<T: DeserializeOwned>(body: &[u8], key: &str) -> Result<T, ApiError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    let payload = match value.get("data") {
        Some(data) => data.get(key).unwrap_or(data),
        None => &value,
    };

    serde_json::from_value(payload.clone())
        .map_err(|e| ApiError::MalformedResponse(format!("unexpected '{}' shape: {}", key, e)))
}

/// Normalize a response whose payload sits directly under `data` (or is the
/// whole body). Used for login and register, whose payloads have no nested
/// key.
pub fn normalize_data<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    let payload = value.get("data").unwrap_or(&value);

    serde_json::from_value(payload.clone())
        .map_err(|e| ApiError::MalformedResponse(format!("unexpected payload shape: {}", e)))
}

fn parse_items<T: DeserializeOwned>(value: &Value) -> Result<Vec<T>, ApiError> {
    if !value.is_array() {
        return Err(ApiError::MalformedResponse(format!(
            "expected a list, got {}",
            kind_of(value)
        )));
    }
    serde_json::from_value(value.clone())
        .map_err(|e| ApiError::MalformedResponse(format!("unexpected list item shape: {}", e)))
}

fn parse_meta(value: Option<&Value>) -> Option<PageMeta> {
    value.and_then(|v| serde_json::from_value(v.clone()).ok())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
