//! Authenticated request builder, dispatcher and response parser.
//!
//! # Design
//! `KnockClient` carries no mutable state between calls. Each call is split
//! into `build_request` (descriptor → `HttpRequest`), a hand-off to the
//! configured `Transport`, and `parse_response` (`HttpResponse` → typed
//! value). Building and parsing are pure, so they can be exercised without a
//! network; the transport is the only place I/O happens.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, debug_span, trace};

use crate::cancel::CancellationToken;
use crate::config::ClientConfig;
use crate::encoding::{self, JSON_CONTENT_TYPE};
use crate::error::{KnockError, Result};
use crate::http::{set_header, HttpMethod, HttpRequest, HttpResponse};
use crate::request::KnockRequest;
use crate::resources::{BulkOperations, Messages, Objects, Preferences, Tenants, Users, Workflows};
use crate::transport::Transport;

struct Shared {
    base_url: String,
    api_key: String,
    user_agent: String,
    transport: Arc<dyn Transport>,
}

/// Client for the Knock API.
///
/// Cloning is cheap and clones share configuration and transport, so one
/// client can serve concurrent callers on several threads.
#[derive(Clone)]
pub struct KnockClient {
    shared: Arc<Shared>,
    cancellation: Option<CancellationToken>,
}

impl KnockClient {
    /// Client for the public API with the default transport.
    ///
    /// # Errors
    ///
    /// Returns `KnockError::Config` if `api_key` is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// # Errors
    ///
    /// Returns `KnockError::Config` if the configuration fails validation.
    /// No request is attempted.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = config.validate()?;
        let transport = config.build_transport();
        Ok(Self {
            shared: Arc::new(Shared {
                base_url,
                api_key: config.api_key,
                user_agent: config.user_agent,
                transport,
            }),
            cancellation: None,
        })
    }

    /// Handle whose calls abort with `KnockError::Cancelled` once `token` is
    /// cancelled. Configuration and transport are shared with `self`.
    pub fn with_cancellation(&self, token: &CancellationToken) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            cancellation: Some(token.clone()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.shared.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.shared.user_agent
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    pub fn workflows(&self) -> Workflows<'_> {
        Workflows::new(self)
    }

    pub fn objects(&self) -> Objects<'_> {
        Objects::new(self)
    }

    pub fn tenants(&self) -> Tenants<'_> {
        Tenants::new(self)
    }

    pub fn messages(&self) -> Messages<'_> {
        Messages::new(self)
    }

    pub fn bulk_operations(&self) -> BulkOperations<'_> {
        BulkOperations::new(self)
    }

    /// Preference methods under their old names. Deprecated: use
    /// [`KnockClient::users`] instead.
    pub fn preferences(&self) -> Preferences<'_> {
        Preferences::new(self)
    }

    /// Turn a descriptor into an absolute, authenticated `HttpRequest`.
    ///
    /// Options become the query string unless the method is POST, and the
    /// body unless the method is GET.
    pub fn build_request(&self, request: &KnockRequest) -> Result<HttpRequest> {
        let mut url = format!("{}{}", self.shared.base_url, request.path);
        let options = request.options.as_ref();

        if request.method != HttpMethod::Post {
            if let Some(query) = options.and_then(encoding::query_string) {
                url.push('?');
                url.push_str(&query);
            }
        }

        let token = request.access_token.as_deref().unwrap_or(&self.shared.api_key);
        let mut headers = vec![
            ("Accept-Encoding".to_string(), "utf-8".to_string()),
            ("Authorization".to_string(), format!("Bearer {token}")),
            ("User-Agent".to_string(), self.shared.user_agent.clone()),
        ];

        let mut body = None;
        if request.method != HttpMethod::Get {
            if let Some(options) = options {
                let (encoded, content_type) = if request.json_content_type {
                    (encoding::json_body(options)?, JSON_CONTENT_TYPE)
                } else {
                    encoding::raw_body(options)
                };
                headers.push(("Content-Type".to_string(), content_type.to_string()));
                body = Some(encoded);
            }
        }

        for (name, value) in &request.headers {
            set_header(&mut headers, name, value);
        }

        Ok(HttpRequest {
            method: request.method,
            url,
            headers,
            body,
        })
    }

    /// Check the status and decode the body into `T`.
    ///
    /// 2xx bodies are decoded; 404 maps to `NotFound` and every other status
    /// to `Api`, both carrying the raw body.
    pub fn parse_response<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T> {
        check_status(&response)?;
        encoding::decode(&response.body)
    }

    /// Build and dispatch `request` without interpreting the status.
    pub fn send_raw(&self, request: &KnockRequest) -> Result<HttpResponse> {
        let http_request = self.build_request(request)?;
        let span = debug_span!("knock_request", method = %request.method, path = %request.path);
        let _guard = span.enter();

        self.check_cancelled()?;
        debug!(url = %http_request.url, "sending request");
        if let Some(body) = &http_request.body {
            trace!(%body, "request body");
        }

        let response = self
            .shared
            .transport
            .send(&http_request)
            .map_err(KnockError::Transport)?;

        debug!(status = response.status, bytes = response.body.len(), "response received");
        self.check_cancelled()?;
        Ok(response)
    }

    /// Dispatch `request` and decode a successful response into `T`.
    pub fn send<T: DeserializeOwned>(&self, request: &KnockRequest) -> Result<T> {
        let response = self.send_raw(request)?;
        self.parse_response(response)
    }

    /// Dispatch `request` and discard the body of a successful response.
    pub fn send_empty(&self, request: &KnockRequest) -> Result<()> {
        let response = self.send_raw(request)?;
        check_status(&response)
    }

    fn check_cancelled(&self) -> Result<()> {
        match &self.cancellation {
            Some(token) if token.is_cancelled() => Err(KnockError::Cancelled),
            _ => Ok(()),
        }
    }
}

impl fmt::Debug for KnockClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KnockClient")
            .field("base_url", &self.shared.base_url)
            .field("api_key", &"<redacted>")
            .field("user_agent", &self.shared.user_agent)
            .field("cancellable", &self.cancellation.is_some())
            .finish()
    }
}

/// Map non-success status codes to the appropriate `KnockError` variant.
fn check_status(response: &HttpResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(KnockError::NotFound {
            body: response.body.clone(),
        });
    }
    Err(KnockError::Api {
        status: response.status,
        body: response.body.clone(),
    })
}
