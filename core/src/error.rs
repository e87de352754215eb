//! Error types for the Knock API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `Api` with the raw status code
//! and body; `api_error_body` decodes Knock's error envelope on demand.
//! Transport failures keep the transport's own error as the source so callers
//! can downcast to e.g. `ureq::Error` when they need the detail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boxed error produced by a `Transport` implementation.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for every client operation.
pub type Result<T> = std::result::Result<T, KnockError>;

/// Errors returned by `KnockClient` and the resource facades.
#[derive(Debug, Error)]
pub enum KnockError {
    /// The client was constructed with invalid settings (e.g. an empty API key).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The transport failed to complete the round-trip (network, TLS, timeout).
    #[error("transport failed: {0}")]
    Transport(#[source] TransportError),

    /// The call observed a cancelled `CancellationToken`.
    #[error("request cancelled")]
    Cancelled,

    /// Request options could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {source}")]
    Deserialization {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The server returned 404.
    #[error("resource not found")]
    NotFound { body: String },

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },
}

/// Error envelope Knock returns alongside non-2xx statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

impl KnockError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        KnockError::Config(msg.into())
    }

    /// HTTP status carried by the error, if it came from a server response.
    pub fn status(&self) -> Option<u16> {
        match self {
            KnockError::NotFound { .. } => Some(404),
            KnockError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, KnockError::NotFound { .. })
    }

    /// Decode the server's error envelope. Returns `None` for errors that did
    /// not come from a response, or when the body is not a Knock error object.
    pub fn api_error_body(&self) -> Option<ApiErrorBody> {
        match self {
            KnockError::NotFound { body } | KnockError::Api { body, .. } => {
                serde_json::from_str(body).ok()
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_reported_for_response_errors_only() {
        let not_found = KnockError::NotFound { body: String::new() };
        assert_eq!(not_found.status(), Some(404));
        assert!(not_found.is_not_found());

        let api = KnockError::Api {
            status: 422,
            body: "{}".to_string(),
        };
        assert_eq!(api.status(), Some(422));
        assert!(!api.is_not_found());

        assert_eq!(KnockError::Cancelled.status(), None);
    }

    #[test]
    fn api_error_body_decodes_knock_envelope() {
        let err = KnockError::Api {
            status: 422,
            body: r#"{"code":"invalid_params","message":"recipients is required","status":422,"type":"api_error"}"#
                .to_string(),
        };
        let body = err.api_error_body().unwrap();
        assert_eq!(body.code.as_deref(), Some("invalid_params"));
        assert_eq!(body.message.as_deref(), Some("recipients is required"));
        assert_eq!(body.status, Some(422));
        assert_eq!(body.error_type.as_deref(), Some("api_error"));
    }

    #[test]
    fn api_error_body_is_none_for_plain_text() {
        let err = KnockError::Api {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert!(err.api_error_body().is_none());
        assert!(KnockError::Cancelled.api_error_body().is_none());
    }

    #[test]
    fn display_includes_status_and_body() {
        let err = KnockError::Api {
            status: 500,
            body: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: internal error");
        assert_eq!(
            KnockError::config("API key is required").to_string(),
            "invalid configuration: API key is required"
        );
    }
}
