//! Request descriptor: everything needed to build one Knock API call.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::http::HttpMethod;

/// Describes a single API call before it is turned into an `HttpRequest`.
///
/// `options` becomes the query string for non-POST methods and the body for
/// non-GET methods. Created per call and consumed once.
#[derive(Debug, Clone, PartialEq)]
pub struct KnockRequest {
    pub method: HttpMethod,
    pub path: String,
    pub options: Option<Value>,
    pub headers: Vec<(String, String)>,
    /// Bearer token to use instead of the client's API key.
    pub access_token: Option<String>,
    pub json_content_type: bool,
}

impl KnockRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            options: None,
            headers: Vec::new(),
            access_token: None,
            json_content_type: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Attach serialized options. Options that serialize to `null` are dropped.
    pub fn options<T: Serialize + ?Sized>(self, options: &T) -> Result<Self> {
        let value = serde_json::to_value(options)?;
        Ok(self.options_value(value))
    }

    pub fn options_value(mut self, value: Value) -> Self {
        self.options = if value.is_null() { None } else { Some(value) };
        self
    }

    /// Add a custom header. Later headers win over earlier ones with the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Send options as a raw body instead of JSON.
    pub fn raw_body(mut self) -> Self {
        self.json_content_type = false;
        self
    }
}
