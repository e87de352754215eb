//! Synchronous client for the Knock notification API.
//!
//! # Overview
//! Resource facades (`users()`, `workflows()`, `objects()`, ...) turn typed
//! options into a `KnockRequest`. The client core builds an authenticated
//! `HttpRequest` from it, hands that to a `Transport` and decodes the
//! `HttpResponse` into a typed record.
//!
//! # Design
//! - Building and parsing are pure functions of data; only the transport does
//!   I/O, so everything above it is deterministic and testable with a
//!   recording transport.
//! - `KnockClient` is immutable after construction and cheap to clone.
//!   Cancellation is cooperative through `CancellationToken`.
//! - Non-2xx responses become `KnockError::NotFound` / `KnockError::Api`
//!   carrying the raw body; `send_raw` leaves the status uninterpreted.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.
//!
//! ```no_run
//! use knock_core::{EntityRef, KnockClient, TriggerWorkflow};
//!
//! # fn main() -> knock_core::Result<()> {
//! let client = KnockClient::new("sk_test_12345")?;
//! let user = client.users().get("chris")?;
//! let run = client.workflows().trigger(
//!     "new-comment",
//!     &TriggerWorkflow {
//!         recipients: vec![EntityRef::from(user.id.as_str())],
//!         ..Default::default()
//!     },
//!     None,
//! )?;
//! println!("{}", run.workflow_run_id);
//! # Ok(())
//! # }
//! ```

pub mod cancel;
pub mod client;
pub mod config;
pub mod encoding;
pub mod error;
pub mod http;
pub mod request;
pub mod resources;
pub mod transport;
pub mod types;

pub use cancel::CancellationToken;
pub use client::KnockClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, SDK_VERSION};
pub use error::{ApiErrorBody, KnockError, Result, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use request::KnockRequest;
pub use resources::{BulkOperations, Messages, Objects, Preferences, Tenants, Users, Workflows};
pub use transport::{Transport, UreqTransport};
pub use types::*;
