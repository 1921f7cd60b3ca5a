#![allow(dead_code)]

// Shared helpers for spinning up the gateway and a fake Graph API per test.
use actions_server::{GatewayConfig, InstagramConfig, InstagramMode};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde_json::Value;
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

pub const API_TOKEN: &str = "integration-secret";
pub const IG_USER_ID: &str = "17841400000000000";
pub const IG_ACCESS_TOKEN: &str = "graph-access-token";

// One captured upstream request: path segments plus query pairs.
#[derive(Debug, Clone)]
pub struct UpstreamCall {
    pub version: String,
    pub user_id: String,
    pub query: HashMap<String, String>,
}

// Canned reply of the fake Graph API.
#[derive(Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Value,
    pub delay: Option<Duration>,
}

#[derive(Clone)]
struct FakeGraph {
    reply: UpstreamReply,
    calls: Arc<Mutex<Vec<UpstreamCall>>>,
}

// Handle to a running fake Graph API.
pub struct FakeUpstream {
    pub base_url: String,
    calls: Arc<Mutex<Vec<UpstreamCall>>>,
}

impl FakeUpstream {
    pub fn calls(&self) -> Vec<UpstreamCall> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

async fn graph_handler(
    State(fake): State<FakeGraph>,
    Path((version, user_id)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    fake.calls
        .lock()
        .expect("calls mutex poisoned")
        .push(UpstreamCall {
            version,
            user_id,
            query,
        });

    if let Some(delay) = fake.reply.delay {
        tokio::time::sleep(delay).await;
    }

    (fake.reply.status, Json(fake.reply.body.clone()))
}

// Start a fake Graph API on an ephemeral port in the current runtime.
pub async fn spawn_upstream(reply: UpstreamReply) -> FakeUpstream {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/{version}/{user_id}", get(graph_handler))
        .with_state(FakeGraph {
            reply,
            calls: calls.clone(),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral upstream port");
    let addr = listener.local_addr().expect("get upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake upstream failed");
    });

    FakeUpstream {
        base_url: format!("http://{addr}"),
        calls,
    }
}

// Gateway config pointing at `graph_base_url`, with credentials set.
pub fn live_config(graph_base_url: &str) -> GatewayConfig {
    GatewayConfig {
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        api_token: Some(API_TOKEN.to_string()),
        instagram: InstagramConfig {
            mode: InstagramMode::Live,
            user_id: Some(IG_USER_ID.to_string()),
            access_token: Some(IG_ACCESS_TOKEN.to_string()),
            graph_base_url: graph_base_url.to_string(),
            graph_version: "v19.0".to_string(),
            timeout: None,
        },
    }
}

// Start the gateway on an ephemeral port and return its base URL.
pub async fn spawn_gateway(config: GatewayConfig) -> String {
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("bind ephemeral gateway port");
    let addr = listener.local_addr().expect("get gateway addr");
    tokio::spawn(async move {
        actions_server::run(listener, config)
            .await
            .expect("gateway failed");
    });

    format!("http://{addr}")
}

// POST a JSON body to the gateway with the shared bearer token.
pub async fn post_authorized(base_url: &str, path: &str, body: Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{base_url}{path}"))
        .bearer_auth(API_TOKEN)
        .json(&body)
        .send()
        .await
        .expect("request should succeed")
}
