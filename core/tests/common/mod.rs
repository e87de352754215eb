//! Shared helpers for the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use knock_core::{ClientConfig, HttpRequest, HttpResponse, KnockClient, Transport, TransportError};
use mock_server::{RecordedRequest, Stub};
use serde_json::Value;

pub const API_KEY: &str = "sk_test_12345";

/// Captures every request and replays queued responses in order. With
/// nothing queued it answers `200 {}`.
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<HttpResponse>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond_with(&self, status: u16, body: Value) {
        let body = if body.is_null() {
            String::new()
        } else {
            body.to_string()
        };
        self.responses
            .lock()
            .unwrap()
            .push_back(HttpResponse::new(status, body));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| HttpResponse::new(200, "{}")))
    }
}

/// Client pointed at `https://api.knock.app/v1` that never leaves the process.
pub fn recording_client() -> (KnockClient, Arc<RecordingTransport>) {
    let transport = RecordingTransport::new();
    let config = ClientConfig::new(API_KEY).with_transport(transport.clone());
    let client = KnockClient::with_config(config).unwrap();
    (client, transport)
}

/// Handle on a mock server running on a random local port.
pub struct MockServer {
    pub origin: String,
    agent: ureq::Agent,
}

impl MockServer {
    pub fn base_url(&self) -> String {
        format!("{}/v1", self.origin)
    }

    pub fn client(&self) -> KnockClient {
        KnockClient::with_config(ClientConfig::new(API_KEY).with_base_url(self.base_url())).unwrap()
    }

    pub fn stub(&self, method: &str, path: &str, status: u16, body: Value) {
        let stub = serde_json::to_string(&Stub::new(method, path, status, body)).unwrap();
        let resp = self
            .agent
            .post(&format!("{}/__mock/stubs", self.origin))
            .header("Content-Type", "application/json")
            .send(stub.as_str())
            .unwrap();
        assert_eq!(resp.status().as_u16(), 204);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        let mut resp = self
            .agent
            .get(&format!("{}/__mock/requests", self.origin))
            .call()
            .unwrap();
        let body = resp.body_mut().read_to_string().unwrap();
        serde_json::from_str(&body).unwrap()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("mock recorded no requests")
    }
}

/// Start the mock server on a random port in a background thread.
pub fn start_mock() -> MockServer {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    MockServer {
        origin: format!("http://{addr}"),
        agent: ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent(),
    }
}
