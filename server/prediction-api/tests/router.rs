//! Router tests for the prediction API.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use prediction_api::{router, AppState};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> axum::Router {
  router(Arc::new(AppState::default()))
}

async fn post_json(body: &str) -> (StatusCode, serde_json::Value) {
  let req = Request::builder()
    .method(Method::POST)
    .uri("/generate-prediction")
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(body.to_string()))
    .unwrap();
  let resp = app().oneshot(req).await.unwrap();
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_returns_ok() {
  let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
  let resp = app().oneshot(req).await.unwrap();
  assert_eq!(resp.status(), StatusCode::OK);
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn valid_request_returns_prediction() {
  let (status, v) = post_json(
    r#"{"sleep": 7, "stress": 3, "mood": 4, "energy": 4,
        "symptoms": [], "quickInputs": ["Exercise", "Healthy Diet"], "stressReason": ""}"#,
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(v["finalScore"], 0.86);
  assert_eq!(v["riskLevel"], "Excellent / Balanced");
  assert!(v.get("stressInsight").is_none());
}

#[tokio::test]
async fn optional_fields_default() {
  let (status, v) = post_json(r#"{"sleep": 5, "stress": 8, "mood": 2, "energy": 2}"#).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(v["penalties"].as_array().unwrap().len(), 2);
  assert!(v["stressInsight"].as_str().unwrap().starts_with("Take a moment"));
}

#[tokio::test]
async fn missing_field_is_bad_request() {
  let (status, v) = post_json(r#"{"sleep": 7, "stress": 3, "mood": 4}"#).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(v["field"], "energy");
  assert!(v["error"].as_str().unwrap().starts_with("Invalid input"));
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
  let (status, v) = post_json("{oops").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(v["error"].as_str().unwrap().starts_with("json:"));
  assert!(v.get("field").is_none());
}

#[tokio::test]
async fn cors_preflight_is_allowed() {
  let req = Request::builder()
    .method(Method::OPTIONS)
    .uri("/generate-prediction")
    .header(header::ORIGIN, "http://localhost:5173")
    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
    .body(Body::empty())
    .unwrap();
  let resp = app().oneshot(req).await.unwrap();
  assert_eq!(resp.status(), StatusCode::OK);
  assert!(resp
    .headers()
    .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
