use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use shared_types::PredictConfig;

use crate::forward::{forward_predict, ForwardState};
use crate::health::health_check;

/// Routes served next to the Dioxus app: the prediction endpoint and
/// `/health`. The body limit only applies to the prediction endpoint.
pub fn api_router(config: &PredictConfig) -> Router {
    api_router_with_state(ForwardState::from_config(config), config)
}

pub fn api_router_with_state(state: ForwardState, config: &PredictConfig) -> Router {
    Router::new()
        .route(
            &config.endpoint,
            post(forward_predict).layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
        .route("/health", get(health_check))
        .with_state(state)
}
