// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP API surface
//!
//! Thin axum layer over the engine: health probe plus the single run
//! endpoint. Every failure is scoped to one request; nothing here is fatal
//! to the process.

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::descriptor;
use crate::error::Error;
use crate::exec::{execute_http, ReqwestTransport, Transport};

/// Inbound request size ceiling
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Port used when `PORT` is unset or unusable
pub const DEFAULT_PORT: u16 = 4000;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    transport: Arc<dyn Transport>,
}

impl AppState {
    /// State backed by the production transport
    pub fn new() -> crate::error::Result<Self> {
        Ok(Self {
            transport: Arc::new(ReqwestTransport::new()?),
        })
    }

    /// State with a caller-supplied transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/http/run", post(run))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// Resolve the listen port from the `PORT` environment variable
///
/// Unset, unparseable or non-positive values fall back to the default.
pub fn resolve_port() -> u16 {
    match std::env::var("PORT") {
        Ok(raw) => raw
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|p| (1..=i64::from(u16::MAX)).contains(p))
            .map(|p| p as u16)
            .unwrap_or(DEFAULT_PORT),
        Err(_) => DEFAULT_PORT,
    }
}

/// Bind and serve until the process is stopped
pub async fn serve(port: u16) -> anyhow::Result<()> {
    let state = AppState::new()?;
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

async fn run(State(state): State<AppState>, Json(payload): Json<Value>) -> Response {
    let descriptor = match descriptor::validate(&payload) {
        Ok(descriptor) => descriptor,
        Err(err) => return error_response(err),
    };

    debug!(method = descriptor.method.as_str(), url = %descriptor.url, "running request");
    match execute_http(&descriptor, state.transport.as_ref()).await {
        Ok(result) => (StatusCode::OK, Json(json!({ "data": result }))).into_response(),
        Err(err) => error_response(err),
    }
}

/// Render a failure as the API error envelope
///
/// Status failures keep the upstream status and attach their payload so the
/// frontend can render the actual response.
fn error_response(err: Error) -> Response {
    let status =
        StatusCode::from_u16(err.http_equivalent()).unwrap_or(StatusCode::BAD_GATEWAY);
    let message = err.to_string();
    let body = match err.into_payload() {
        Some(result) => json!({ "error": { "message": message }, "data": result }),
        None => json!({ "error": { "message": message } }),
    };
    (status, Json(body)).into_response()
}
