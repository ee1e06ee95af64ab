use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use httpmock::prelude::*;
use review_seo::adapters::ReqwestTransport;
use review_seo::core::render::{Dashboard, SentimentKind};
use review_seo::domain::model::SelectedFile;
use review_seo::{AppError, FormState, SubmissionPipeline, SubmissionState};
use serde_json::json;

const WEBHOOK_PATH: &str = "/webhook/review-ingest";

fn analysis_response() -> serde_json::Value {
    json!({
        "success": true,
        "analysis": {
            "themes": [["battery_life", 14], ["build_quality", 9]],
            "sentiments": { "positive": 3, "negative": 1, "neutral": 0 },
            "topKeywords": [{ "keyword": "durable", "frequency": 12 }]
        },
        "seoContent": {
            "title": "Durable Wireless Earbuds",
            "bullets": ["All-day battery", "Sweat resistant"],
            "description": "Built to last.\nShips fast."
        }
    })
}

#[tokio::test]
async fn test_asin_submission_posts_exact_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(WEBHOOK_PATH)
                .header("content-type", "application/json")
                .json_body(json!({ "asin": "B08N5WRWNW" }));
            then.status(200).json_body(analysis_response());
        })
        .await;

    let transport = ReqwestTransport::new().unwrap();
    let mut form = FormState::new();
    form.set_asin("B08N5WRWNW");
    let mut pipeline = SubmissionPipeline::new();

    let state = pipeline
        .submit(&mut form, &transport, &server.url(WEBHOOK_PATH))
        .await;

    mock.assert_async().await;
    assert_eq!(state, SubmissionState::Succeeded);

    let dashboard = Dashboard::from_result(pipeline.result().unwrap()).unwrap();
    assert_eq!(dashboard.keywords[0].to_string(), "durable (12)");
    assert_eq!(dashboard.sentiments[0].kind, SentimentKind::Positive);
    assert_eq!(dashboard.sentiments[0].share, Some(0.75));
    assert_eq!(dashboard.themes[0].label, "battery life");
}

#[tokio::test]
async fn test_csv_submission_sends_plain_base64() {
    let content = b"rating,review\n5,Great sound\n2,\"Broke, after a week\"\n".to_vec();
    let expected = STANDARD.encode(&content);

    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(WEBHOOK_PATH).json_body(json!({
                "fileType": "csv",
                "fileContentBase64": expected,
                "filename": "reviews.csv"
            }));
            then.status(200).json_body(analysis_response());
        })
        .await;

    let transport = ReqwestTransport::new().unwrap();
    let mut form = FormState::new();
    form.select_file(SelectedFile::new(content, "text/csv", "reviews.csv"))
        .unwrap();
    let mut pipeline = SubmissionPipeline::new();

    let state = pipeline
        .submit(&mut form, &transport, &server.url(WEBHOOK_PATH))
        .await;

    mock.assert_async().await;
    assert_eq!(state, SubmissionState::Succeeded);
}

#[tokio::test]
async fn test_http_500_ends_failed_without_result() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(WEBHOOK_PATH);
            then.status(500);
        })
        .await;

    let transport = ReqwestTransport::new().unwrap();
    let mut form = FormState::new();
    form.set_asin("B08N5WRWNW");
    let mut pipeline = SubmissionPipeline::new();

    let state = pipeline
        .submit(&mut form, &transport, &server.url(WEBHOOK_PATH))
        .await;

    mock.assert_async().await;
    assert_eq!(state, SubmissionState::Failed);
    assert!(pipeline.error_message().unwrap().contains("500"));
    assert!(matches!(
        pipeline.error(),
        Some(AppError::HttpStatusError { status: 500 })
    ));
    assert!(pipeline.result().is_none());
    assert!(!pipeline.is_submitting());
}

#[tokio::test]
async fn test_empty_form_never_calls_webhook() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(WEBHOOK_PATH);
            then.status(200).json_body(analysis_response());
        })
        .await;

    let transport = ReqwestTransport::new().unwrap();
    let mut form = FormState::new();
    let mut pipeline = SubmissionPipeline::new();

    let state = pipeline
        .submit(&mut form, &transport, &server.url(WEBHOOK_PATH))
        .await;

    assert_eq!(state, SubmissionState::Failed);
    assert!(matches!(
        pipeline.error(),
        Some(AppError::ValidationError { .. })
    ));
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_unsuccessful_response_is_stored_but_not_rendered() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(WEBHOOK_PATH);
            then.status(200)
                .json_body(json!({ "success": false, "message": "ASIN not found" }));
        })
        .await;

    let transport = ReqwestTransport::new().unwrap();
    let mut form = FormState::new();
    form.set_asin("B000000000");
    let mut pipeline = SubmissionPipeline::new();

    let state = pipeline
        .submit(&mut form, &transport, &server.url(WEBHOOK_PATH))
        .await;

    assert_eq!(state, SubmissionState::Succeeded);
    let result = pipeline.result().unwrap();
    assert!(!result.success);
    assert_eq!(result.server_message(), Some("ASIN not found"));
    assert!(Dashboard::from_result(result).is_none());
}

#[tokio::test]
async fn test_non_json_body_fails_with_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(WEBHOOK_PATH);
            then.status(200).body("Workflow was started");
        })
        .await;

    let transport = ReqwestTransport::new().unwrap();
    let mut form = FormState::new();
    form.set_asin("B08N5WRWNW");
    let mut pipeline = SubmissionPipeline::new();

    let state = pipeline
        .submit(&mut form, &transport, &server.url(WEBHOOK_PATH))
        .await;

    assert_eq!(state, SubmissionState::Failed);
    assert!(matches!(pipeline.error(), Some(AppError::DecodeError(_))));
    assert!(!pipeline.error_message().unwrap().is_empty());
    assert!(pipeline.result().is_none());
}

#[tokio::test]
async fn test_wrong_json_shape_is_reported_separately() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(WEBHOOK_PATH);
            then.status(200)
                .json_body(json!({ "success": true, "analysis": { "themes": [] } }));
        })
        .await;

    let transport = ReqwestTransport::new().unwrap();
    let mut form = FormState::new();
    form.set_asin("B08N5WRWNW");
    let mut pipeline = SubmissionPipeline::new();

    let state = pipeline
        .submit(&mut form, &transport, &server.url(WEBHOOK_PATH))
        .await;

    assert_eq!(state, SubmissionState::Failed);
    assert!(matches!(
        pipeline.error(),
        Some(AppError::ResponseShapeError { .. })
    ));
}

#[tokio::test]
async fn test_unreachable_endpoint_reports_transport_error() {
    let transport = ReqwestTransport::new().unwrap();
    let mut form = FormState::new();
    form.set_asin("B08N5WRWNW");
    let mut pipeline = SubmissionPipeline::new();

    let state = pipeline
        .submit(&mut form, &transport, "http://127.0.0.1:1/webhook/review-ingest")
        .await;

    assert_eq!(state, SubmissionState::Failed);
    assert!(matches!(pipeline.error(), Some(AppError::TransportError(_))));
    assert!(!pipeline.error_message().unwrap().is_empty());
}
