use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};
use shared_types::{AppError, PredictConfig};

use crate::error_convert::UpstreamErrorExt;

/// Shared state for the forwarding route.
#[derive(Clone)]
pub struct ForwardState {
    client: reqwest::Client,
    upstream: Option<String>,
}

impl ForwardState {
    pub fn new(upstream: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            upstream,
        }
    }

    pub fn from_config(config: &PredictConfig) -> Self {
        Self::new(config.upstream_url.clone())
    }

    pub fn upstream(&self) -> Option<&str> {
        self.upstream.as_deref()
    }
}

/// Relay a prediction request to the upstream classifier.
///
/// The multipart body and its `content-type` (which carries the boundary)
/// are passed through untouched. The upstream's status, content type and
/// body are returned as-is, so a `400 No file part` from the classifier
/// reaches the page unchanged.
#[tracing::instrument(skip(state, headers, body), fields(body_bytes = body.len()))]
pub async fn forward_predict(
    State(state): State<ForwardState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let upstream = state
        .upstream()
        .ok_or_else(|| AppError::bad_gateway("Prediction service is not configured"))?;

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .filter(|v| {
            v.to_str()
                .map(|ct| ct.starts_with("multipart/form-data"))
                .unwrap_or(false)
        })
        .cloned()
        .ok_or_else(|| AppError::bad_request("Expected a multipart/form-data body"))?;

    let upstream_response = state
        .client
        .post(upstream)
        .header(header::CONTENT_TYPE, content_type)
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, upstream, "Prediction upstream request failed");
            e.into_app_error()
        })?;

    let status = upstream_response.status();
    let upstream_type = upstream_response.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream_response
        .bytes()
        .await
        .map_err(|e| e.into_app_error())?;

    if status.is_success() {
        tracing::info!(status = status.as_u16(), "Prediction forwarded");
    } else {
        tracing::warn!(status = status.as_u16(), "Prediction upstream returned an error");
    }

    let mut response = (status, bytes).into_response();
    if let Some(ct) = upstream_type {
        response.headers_mut().insert(header::CONTENT_TYPE, ct);
    }
    Ok(response)
}
