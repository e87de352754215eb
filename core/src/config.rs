//! Construction-time settings for `KnockClient`.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{KnockError, Result};
use crate::transport::{Transport, UreqTransport};

/// Version reported in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Knock's public v1 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.knock.app/v1";

/// Timeout applied by the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub fn default_user_agent() -> String {
    format!("knock-rust/{SDK_VERSION}")
}

/// Settings for a `KnockClient`.
///
/// Only the API key is required. `timeout` configures the default transport
/// and is ignored when a custom transport is supplied.
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub transport: Option<Arc<dyn Transport>>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
            transport: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Check the settings and normalize the base URL.
    ///
    /// # Errors
    ///
    /// Returns `KnockError::Config` for an empty API key or a base URL that
    /// is not http(s).
    pub fn validate(&self) -> Result<String> {
        if self.api_key.trim().is_empty() {
            return Err(KnockError::config("API key is required"));
        }
        let base_url = self.base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(KnockError::config(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        Ok(base_url.to_string())
    }

    pub(crate) fn build_transport(&self) -> Arc<dyn Transport> {
        match &self.transport {
            Some(transport) => Arc::clone(transport),
            None => Arc::new(UreqTransport::new(self.timeout)),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}
