use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;

use crate::forward::ForwardState;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub upstream: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// Health check handler. Does not call the classifier; only reports
/// whether one is configured.
pub async fn health_check(State(state): State<ForwardState>) -> Json<HealthResponse> {
    let upstream = if state.upstream().is_some() {
        "configured"
    } else {
        "not_configured"
    };

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    Json(HealthResponse {
        status: "ok".to_string(),
        upstream: upstream.to_string(),
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
