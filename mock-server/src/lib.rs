//! Recording mock of the Knock HTTP API.
//!
//! Every request under `/v1` is recorded and answered from a table of stubs
//! keyed by method and path. Unstubbed paths answer `404` with a Knock-style
//! error envelope. Tests drive the mock through the control routes:
//!
//! - `POST /__mock/stubs` registers (or replaces) a stub
//! - `GET /__mock/requests` lists recorded requests, oldest first
//! - `DELETE /__mock/requests` forgets them

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

pub const API_PREFIX: &str = "/v1";

/// A canned response for one method + path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stub {
    pub method: String,
    /// Full request path including the `/v1` prefix. The query string is
    /// not part of the match.
    pub path: String,
    #[serde(default = "default_status")]
    pub status: u16,
    #[serde(default)]
    pub body: Value,
}

fn default_status() -> u16 {
    200
}

impl Stub {
    pub fn new(method: &str, path: &str, status: u16, body: Value) -> Self {
        Self {
            method: method.to_ascii_uppercase(),
            path: path.to_string(),
            status,
            body,
        }
    }

    fn key(&self) -> (String, String) {
        (self.method.to_ascii_uppercase(), self.path.clone())
    }
}

/// A request as the mock saw it. Header names are lowercase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Body parsed as JSON, if there is one and it parses.
    pub fn json_body(&self) -> Option<Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

#[derive(Default)]
struct Inner {
    stubs: HashMap<(String, String), Stub>,
    requests: Vec<RecordedRequest>,
}

/// Shared stub table and request log.
#[derive(Clone, Default)]
pub struct MockState {
    inner: Arc<RwLock<Inner>>,
}

impl MockState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stubs(stubs: impl IntoIterator<Item = Stub>) -> Self {
        let inner = Inner {
            stubs: stubs.into_iter().map(|stub| (stub.key(), stub)).collect(),
            requests: Vec::new(),
        };
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    pub async fn add_stub(&self, stub: Stub) {
        debug!(method = %stub.method, path = %stub.path, status = stub.status, "stub registered");
        self.inner.write().await.stubs.insert(stub.key(), stub);
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.read().await.requests.clone()
    }

    pub async fn clear_requests(&self) {
        self.inner.write().await.requests.clear();
    }

    async fn record(&self, request: RecordedRequest) -> Option<Stub> {
        let key = (request.method.clone(), request.path.clone());
        let mut inner = self.inner.write().await;
        inner.requests.push(request);
        inner.stubs.get(&key).cloned()
    }
}

pub fn app() -> Router {
    app_with_state(MockState::new())
}

pub fn app_with_state(state: MockState) -> Router {
    Router::new()
        .route("/__mock/stubs", post(add_stub))
        .route("/__mock/requests", get(list_requests).delete(clear_requests))
        .fallback(handle_api)
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_state(listener, MockState::new()).await
}

pub async fn run_with_state(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

async fn add_stub(State(state): State<MockState>, Json(stub): Json<Stub>) -> StatusCode {
    state.add_stub(stub).await;
    StatusCode::NO_CONTENT
}

async fn list_requests(State(state): State<MockState>) -> Json<Vec<RecordedRequest>> {
    Json(state.requests().await)
}

async fn clear_requests(State(state): State<MockState>) -> StatusCode {
    state.clear_requests().await;
    StatusCode::NO_CONTENT
}

async fn handle_api(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri.path().to_string();
    if !path.starts_with(API_PREFIX) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let request = RecordedRequest {
        method: method.as_str().to_string(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        headers: headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect(),
        body: (!body.is_empty()).then_some(body),
    };
    info!(method = %request.method, path = %request.path, query = ?request.query, "recorded request");

    match state.record(request).await {
        Some(stub) => stub_response(&stub),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "code": "resource_missing",
                "message": format!("no stub for {method} {path}"),
                "status": 404,
                "type": "api_error",
            })),
        )
            .into_response(),
    }
}

fn stub_response(stub: &Stub) -> Response {
    let status = StatusCode::from_u16(stub.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status == StatusCode::NO_CONTENT || stub.body.is_null() {
        return status.into_response();
    }
    (status, Json(stub.body.clone())).into_response()
}
