//! Pluggable execution of `HttpRequest` values.
//!
//! # Design
//! The client core never touches the network; it hands a fully built
//! `HttpRequest` to a `Transport` and parses whatever `HttpResponse` comes
//! back. `UreqTransport` is the default. Callers can inject their own
//! implementation (proxying, recording, a different HTTP stack) through
//! `ClientConfig::with_transport`.
//!
//! Non-2xx statuses are data, not transport errors: status interpretation
//! belongs to the client core.

use std::time::Duration;

use ureq::{Agent, RequestBuilder};

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round-trip. Implementations must be safe to share across
/// threads; one client instance may issue concurrent calls.
pub trait Transport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport backed by a ureq agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
    timeout: Option<Duration>,
}

impl UreqTransport {
    /// Agent with a global per-call timeout that returns 4xx/5xx as responses.
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            timeout: Some(timeout),
        }
    }

    /// Wrap an agent the caller configured. It should be built with
    /// `http_status_as_error(false)` so error statuses reach the client core.
    pub fn with_agent(agent: Agent) -> Self {
        Self {
            agent,
            timeout: None,
        }
    }

    /// Timeout this transport was built with; `None` for caller-supplied agents.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url.as_str();
        let headers = request.headers.as_slice();
        let body = request.body.as_deref();

        let result = match (request.method, body) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(url), headers).call(),
            (HttpMethod::Delete, None) => with_headers(self.agent.delete(url), headers).call(),
            (HttpMethod::Delete, Some(body)) => with_headers(self.agent.delete(url), headers)
                .force_send_body()
                .send(body),
            (HttpMethod::Post, Some(body)) => with_headers(self.agent.post(url), headers).send(body),
            (HttpMethod::Post, None) => with_headers(self.agent.post(url), headers).send_empty(),
            (HttpMethod::Put, Some(body)) => with_headers(self.agent.put(url), headers).send(body),
            (HttpMethod::Put, None) => with_headers(self.agent.put(url), headers).send_empty(),
        };
        let mut response = result?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string()?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
