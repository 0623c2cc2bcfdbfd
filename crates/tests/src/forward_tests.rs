use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use server::predict_client::{HttpPredictor, PredictTransport};
use shared_types::PredictError;

use crate::common;

#[tokio::test]
async fn forwards_upload_and_relays_prediction() {
    let (upstream, seen) = common::stub_classifier();
    let upstream_addr = common::serve(upstream).await;
    let app = common::forwarding_app(Some(common::upstream_url(upstream_addr)));

    let body = common::multipart_file("XyZ", "file", "song.wav", b"RIFFdata");
    let (status, text) = common::post_raw(
        &app,
        "/predict",
        "multipart/form-data; boundary=XyZ",
        body,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["prediction"], "Rock");

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0][0].file_name.as_deref(), Some("song.wav"));
    assert_eq!(seen[0][0].bytes, b"RIFFdata".to_vec());
}

#[tokio::test]
async fn upstream_client_errors_pass_through_unchanged() {
    let (upstream, _seen) = common::stub_classifier();
    let upstream_addr = common::serve(upstream).await;
    let app = common::forwarding_app(Some(common::upstream_url(upstream_addr)));

    let body = common::multipart_file("b0", "image", "cat.png", b"png");
    let (status, text) =
        common::post_raw(&app, "/predict", "multipart/form-data; boundary=b0", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "No file part");
}

#[tokio::test]
async fn missing_upstream_is_bad_gateway() {
    let app = common::forwarding_app(None);

    let body = common::multipart_file("b1", "file", "song.wav", b"x");
    let (status, text) =
        common::post_raw(&app, "/predict", "multipart/form-data; boundary=b1", body).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["kind"], "BadGateway");
    assert_eq!(json["message"], "Prediction service is not configured");
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let dead = common::dead_addr().await;
    let app = common::forwarding_app(Some(common::upstream_url(dead)));

    let body = common::multipart_file("b2", "file", "song.wav", b"x");
    let (status, text) =
        common::post_raw(&app, "/predict", "multipart/form-data; boundary=b2", body).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["message"], "Prediction service is unreachable");
}

#[tokio::test]
async fn non_multipart_body_is_rejected_locally() {
    let (upstream, seen) = common::stub_classifier();
    let upstream_addr = common::serve(upstream).await;
    let app = common::forwarding_app(Some(common::upstream_url(upstream_addr)));

    let (status, text) = common::post_raw(
        &app,
        "/predict",
        "application/json",
        br#"{"file":"song.wav"}"#.to_vec(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["kind"], "BadRequest");
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let config = shared_types::PredictConfig {
        upstream_url: Some("http://127.0.0.1:9/predict".into()),
        max_upload_bytes: 16,
        ..shared_types::PredictConfig::default()
    };
    let app = server::router::api_router(&config);

    let body = common::multipart_file("b3", "file", "big.wav", &[0u8; 64]);
    let (status, _) =
        common::post_raw(&app, "/predict", "multipart/form-data; boundary=b3", body).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn health_reports_upstream_configuration() {
    let (status, json) = common::get_json(&common::forwarding_app(None), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["upstream"], "not_configured");

    let app = common::forwarding_app(Some("http://classifier:5000/predict".into()));
    let (_, json) = common::get_json(&app, "/health").await;
    assert_eq!(json["upstream"], "configured");
}

#[tokio::test]
async fn page_client_through_forwarding_route() {
    let (upstream, _seen) = common::stub_classifier();
    let upstream_addr = common::serve(upstream).await;
    let app_addr =
        common::serve(common::forwarding_app(Some(common::upstream_url(upstream_addr)))).await;

    let predictor = HttpPredictor::new(&format!("http://{app_addr}"), "/predict");
    let response = predictor.predict(common::audio_payload()).await.unwrap();
    assert_eq!(response.display_text("Gatunek"), "Gatunek: Rock");

    let no_upstream_addr = common::serve(common::forwarding_app(None)).await;
    let predictor = HttpPredictor::new(&format!("http://{no_upstream_addr}"), "/predict");
    let err = predictor.predict(common::audio_payload()).await.unwrap_err();
    assert_eq!(
        err,
        PredictError::Status {
            status: 502,
            body: "Prediction service is not configured".into()
        }
    );
}
