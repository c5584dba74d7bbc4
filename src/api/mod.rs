use crate::editor::Editor;
use crate::engine::{BlockingResponse, RequestDetails, RequestGate};
use crate::messaging::{Messenger, RuntimeMessage};
use anyhow::{Context, Result};
use axum::{
    extract::{Json as AxumJson, Path, State},
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(RustEmbed)]
#[folder = "$OUT_DIR/ui"]
struct Asset;

pub struct ApiState {
    gate: RequestGate,
    editor: Mutex<Editor>,
    messenger: Messenger,
}

impl ApiState {
    pub fn new(gate: RequestGate, editor: Editor, messenger: Messenger) -> Arc<Self> {
        Arc::new(Self {
            gate,
            editor: Mutex::new(editor),
            messenger,
        })
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DomainsResponse {
    pub domains: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed: Option<usize>,
}

#[derive(Deserialize)]
struct AddDomainRequest {
    domain: String,
}

pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/api/domains", get(list_domains).post(add_domain))
        .route("/api/domains/:domain", delete(remove_domain))
        .route("/api/intercept", post(intercept))
        .route("/api/messages", post(post_message))
        .route("/api/status", get(get_status))
        .fallback(static_handler)
        .with_state(state)
}

pub async fn start_api_server(state: Arc<ApiState>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind API server on {}", addr))?;
    tracing::info!("Editor listening on http://{}", addr);

    axum::serve(listener, router(state))
        .await
        .context("API server stopped unexpectedly")
}

async fn list_domains(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    let mut editor = state.editor.lock().await;
    editor.mount().await;
    Json(DomainsResponse {
        domains: editor.domains().to_vec(),
        added: None,
        removed: None,
    })
}

async fn add_domain(
    State(state): State<Arc<ApiState>>,
    AxumJson(payload): AxumJson<AddDomainRequest>,
) -> impl IntoResponse {
    let mut editor = state.editor.lock().await;
    let added = editor.add_domain(&payload.domain).await;
    Json(DomainsResponse {
        domains: editor.domains().to_vec(),
        added,
        removed: None,
    })
}

async fn remove_domain(
    State(state): State<Arc<ApiState>>,
    Path(domain): Path<String>,
) -> impl IntoResponse {
    let mut editor = state.editor.lock().await;
    let removed = editor.remove_domain(&domain).await;
    Json(DomainsResponse {
        domains: editor.domains().to_vec(),
        added: None,
        removed: Some(removed),
    })
}

async fn intercept(
    State(state): State<Arc<ApiState>>,
    AxumJson(details): AxumJson<RequestDetails>,
) -> Json<BlockingResponse> {
    Json(state.gate.on_before_request(&details))
}

async fn post_message(
    State(state): State<Arc<ApiState>>,
    AxumJson(payload): AxumJson<Value>,
) -> impl IntoResponse {
    let messages = RuntimeMessage::from_payload(&payload);
    for message in &messages {
        state.messenger.send(*message);
    }
    Json(serde_json::json!({ "accepted": messages.len() }))
}

async fn get_status(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "blocked_domains": state.gate.len()
    }))
}

async fn static_handler(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    match Asset::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
