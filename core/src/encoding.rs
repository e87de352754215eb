//! Conversions between request options, wire bodies and typed responses.
//!
//! Options travel through the client as `serde_json::Value` so that typed
//! option structs and caller-supplied property maps share one encoder.

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::form_urlencoded;

use crate::error::{KnockError, Result};

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Key whose nested object must reach the server as a JSON string.
pub const TRIGGER_DATA_KEY: &str = "trigger_data";

/// Encode the top-level entries of an options object as a query string.
///
/// Nulls are omitted, arrays become repeated `key[]` pairs and nested objects
/// are JSON-encoded into a single value. An array with nothing to send still
/// yields one empty `key[]=` pair so the key reaches the server. Returns `None` when `options` is not
/// an object or nothing is left to encode.
pub fn query_string(options: &Value) -> Option<String> {
    let map = options.as_object()?;
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut written = false;

    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                let array_key = format!("{key}[]");
                let mut any = false;
                for item in items {
                    if let Some(scalar) = scalar_text(item) {
                        serializer.append_pair(&array_key, &scalar);
                        any = true;
                    }
                }
                if !any {
                    serializer.append_pair(&array_key, "");
                }
                written = true;
            }
            other => {
                if let Some(scalar) = scalar_text(other) {
                    serializer.append_pair(key, &scalar);
                    written = true;
                }
            }
        }
    }

    written.then(|| serializer.finish())
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Encode options as a JSON request body.
pub fn json_body(options: &Value) -> Result<String> {
    Ok(serde_json::to_string(options)?)
}

/// Encode options for a descriptor that opted out of JSON.
///
/// Strings are sent verbatim; anything else is form-encoded with the same
/// rules as the query string.
pub fn raw_body(options: &Value) -> (String, &'static str) {
    match options {
        Value::String(s) => (s.clone(), TEXT_CONTENT_TYPE),
        other => (query_string(other).unwrap_or_default(), FORM_CONTENT_TYPE),
    }
}

/// Decode a response body into `T`. An empty body decodes as JSON `null`.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    let text = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(text).map_err(|source| KnockError::Deserialization {
        source,
        body: body.to_string(),
    })
}

/// Replace a structured `trigger_data` option with its JSON text.
///
/// The server expects `trigger_data` as a serialized blob even though it is
/// structurally an object. Values that are already strings are left alone.
pub fn encode_trigger_data(options: &mut Value) {
    let Some(map) = options.as_object_mut() else {
        return;
    };
    if let Some(entry) = map.get_mut(TRIGGER_DATA_KEY) {
        if !entry.is_string() && !entry.is_null() {
            *entry = Value::String(entry.to_string());
        }
    }
}
