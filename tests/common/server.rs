//! Fake Wafrn API server lifecycle management
//!
//! Each test gets its own server on a random port, serving the fixture pages
//! and recording every request it receives.

use super::constants::*;
use super::fixtures;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use wafrn_notifications::WafrnClient;

/// How the fake server answers `/v3/notificationsScroll`
#[derive(Clone, Debug)]
pub enum V3Behavior {
    Pages,
    Fail(StatusCode),
    Garbage,
}

/// A request as seen by the fake server
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
}

/// Configuration and request log of the fake server
pub struct FakeWafrn {
    pub v2_pages: Vec<Value>,
    pub v3_pages: Vec<Value>,
    pub badges: Value,
    pub v3_behavior: V3Behavior,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeWafrn {
    /// Serves the fixture pages from `fixtures.rs`
    pub fn with_fixtures() -> Self {
        Self {
            v2_pages: fixtures::v2_pages(),
            v3_pages: fixtures::v3_pages(),
            badges: fixtures::badges(),
            v3_behavior: V3Behavior::Pages,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_v3_behavior(mut self, behavior: V3Behavior) -> Self {
        self.v3_behavior = behavior;
        self
    }

    fn record(&self, path: &str, query: &HashMap<String, String>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            path: path.to_string(),
            query: query.clone(),
        });
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", TEST_TOKEN))
        .unwrap_or(false)
}

fn page_at(pages: &[Value], query: &HashMap<String, String>) -> Value {
    query
        .get("page")
        .and_then(|p| p.parse::<usize>().ok())
        .and_then(|p| pages.get(p).cloned())
        .unwrap_or_else(|| json!({}))
}

async fn notifications_v2(
    State(state): State<Arc<FakeWafrn>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.record("/v2/notificationsScroll", &query);
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(page_at(&state.v2_pages, &query)).into_response()
}

async fn notifications_v3(
    State(state): State<Arc<FakeWafrn>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.record("/v3/notificationsScroll", &query);
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    match &state.v3_behavior {
        V3Behavior::Pages => Json(page_at(&state.v3_pages, &query)).into_response(),
        V3Behavior::Fail(status) => (*status, "upstream exploded").into_response(),
        V3Behavior::Garbage => (
            [(header::CONTENT_TYPE, "application/json")],
            "{\"notifications\": [",
        )
            .into_response(),
    }
}

async fn notifications_count(
    State(state): State<Arc<FakeWafrn>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.record("/v2/notificationsCount", &query);
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(state.badges.clone()).into_response()
}

/// Fake API instance bound to a random local port
///
/// When dropped, the server shuts down.
pub struct TestServer {
    /// API root for clients (e.g., "http://127.0.0.1:12345/api")
    pub base_url: String,

    state: Arc<FakeWafrn>,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns the fake server in a background task
    ///
    /// # Panics
    ///
    /// Panics if the port cannot be bound.
    pub async fn spawn(fake: FakeWafrn) -> Self {
        let state = Arc::new(fake);

        let api = Router::new()
            .route("/v2/notificationsScroll", get(notifications_v2))
            .route("/v3/notificationsScroll", get(notifications_v3))
            .route("/v2/notificationsCount", get(notifications_count))
            .with_state(state.clone());
        let app = Router::new().nest("/api", api);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        Self {
            base_url: format!("http://127.0.0.1:{}/api", port),
            state,
            _shutdown_tx: Some(shutdown_tx),
        }
    }

    /// A real client authenticated with the accepted token
    pub fn client(&self) -> WafrnClient {
        self.client_with_token(TEST_TOKEN)
    }

    pub fn client_with_token(&self, token: &str) -> WafrnClient {
        WafrnClient::new(
            self.base_url.clone(),
            token.to_string(),
            REQUEST_TIMEOUT_SECS,
        )
        .expect("Failed to build client")
    }

    /// Requests received so far, optionally filtered by path
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }
}
