use pretty_assertions::assert_eq;
use server::predict_client::{HttpPredictor, PredictTransport};
use shared_types::{FilePart, FormPayload, PredictError};

use crate::common;

fn predictor_for(addr: std::net::SocketAddr) -> HttpPredictor {
    HttpPredictor::new(&format!("http://{addr}"), "/predict")
}

#[tokio::test]
async fn audio_upload_returns_prediction() {
    let (router, seen) = common::stub_classifier();
    let addr = common::serve(router).await;

    let response = predictor_for(addr)
        .predict(common::audio_payload())
        .await
        .expect("prediction should succeed");

    assert_eq!(response.prediction, "Rock");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let file = &seen[0][0];
    assert_eq!(file.name, "file");
    assert_eq!(file.file_name.as_deref(), Some("track01.wav"));
    assert_eq!(file.content_type.as_deref(), Some("audio/wav"));
    assert_eq!(file.bytes, common::audio_payload_bytes());
}

#[tokio::test]
async fn fields_arrive_in_form_order() {
    let (router, seen) = common::stub_classifier();
    let addr = common::serve(router).await;

    let payload = FormPayload::new()
        .with_text("comment", "live take")
        .with_file(
            "file",
            FilePart {
                file_name: "a.mp3".into(),
                content_type: None,
                bytes: vec![0xff, 0xfb],
            },
        )
        .with_text("source", "upload");

    predictor_for(addr).predict(payload).await.unwrap();

    let seen = seen.lock().unwrap();
    let names: Vec<&str> = seen[0].iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["comment", "file", "source"]);
    assert_eq!(seen[0][0].bytes, b"live take".to_vec());
    assert_eq!(seen[0][0].file_name, None);
}

#[tokio::test]
async fn missing_file_field_is_status_error_with_body() {
    let (router, _seen) = common::stub_classifier();
    let addr = common::serve(router).await;

    let payload = FormPayload::new().with_text("image", "not a file");
    let err = predictor_for(addr).predict(payload).await.unwrap_err();

    assert_eq!(
        err,
        PredictError::Status {
            status: 400,
            body: "No file part".into()
        }
    );
}

#[tokio::test]
async fn empty_file_selection_is_status_error() {
    let (router, _seen) = common::stub_classifier();
    let addr = common::serve(router).await;

    let payload = FormPayload::new().with_file(
        "file",
        FilePart {
            file_name: String::new(),
            content_type: None,
            bytes: Vec::new(),
        },
    );
    let err = predictor_for(addr).predict(payload).await.unwrap_err();

    assert_eq!(
        err,
        PredictError::Status {
            status: 400,
            body: "No selected file".into()
        }
    );
}

#[tokio::test]
async fn server_error_is_status_error() {
    let addr = common::serve(common::fixed_upstream(
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        "text/html",
        "could not load model",
    ))
    .await;

    let err = predictor_for(addr)
        .predict(common::audio_payload())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        PredictError::Status {
            status: 500,
            body: "could not load model".into()
        }
    );
}

#[tokio::test]
async fn non_json_success_body_is_decode_error() {
    let addr = common::serve(common::fixed_upstream(
        axum::http::StatusCode::OK,
        "text/html",
        "<html>maintenance</html>",
    ))
    .await;

    let err = predictor_for(addr)
        .predict(common::audio_payload())
        .await
        .unwrap_err();

    assert!(matches!(err, PredictError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn json_without_prediction_is_decode_error() {
    let addr = common::serve(common::fixed_upstream(
        axum::http::StatusCode::OK,
        "application/json",
        r#"{"genre":"Rock"}"#,
    ))
    .await;

    let err = predictor_for(addr)
        .predict(common::audio_payload())
        .await
        .unwrap_err();

    assert!(matches!(err, PredictError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn cat_image_scenario() {
    let addr = common::serve(common::fixed_upstream(
        axum::http::StatusCode::OK,
        "application/json",
        r#"{"prediction":"kot"}"#,
    ))
    .await;

    let payload = FormPayload::new().with_file(
        "image",
        FilePart {
            file_name: "cat.png".into(),
            content_type: Some("image/png".into()),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        },
    );
    let response = predictor_for(addr).predict(payload).await.unwrap();

    assert_eq!(response.display_text("Gatunek"), "Gatunek: kot");
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let addr = common::dead_addr().await;

    let err = predictor_for(addr)
        .predict(common::audio_payload())
        .await
        .unwrap_err();

    assert!(matches!(err, PredictError::Transport(_)), "got {err:?}");
}
