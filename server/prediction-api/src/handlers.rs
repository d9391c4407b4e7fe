//! HTTP handlers for the prediction API.

use axum::{
  body::Bytes,
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use prediction_engine::ErrorOutput;
use std::sync::Arc;
use tracing::{info, warn};

use crate::state::AppState;

pub async fn health() -> &'static str {
  "ok"
}

/// Score one day's biomarkers. Invalid or malformed bodies get 400 + ErrorOutput.
pub async fn generate_prediction(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
  let raw = match std::str::from_utf8(&body) {
    Ok(s) => s,
    Err(_) => {
      warn!("generate-prediction: body is not UTF-8");
      return (
        StatusCode::BAD_REQUEST,
        Json(ErrorOutput::new("request body must be UTF-8 JSON")),
      )
        .into_response();
    }
  };

  match state.engine.evaluate(raw) {
    Ok(result) => {
      info!(
        final_score = result.final_score,
        risk_level = %result.risk_level,
        "generate-prediction: ok"
      );
      (StatusCode::OK, Json(result)).into_response()
    }
    Err(e) => {
      warn!("generate-prediction: rejected: {}", e);
      (StatusCode::BAD_REQUEST, Json(ErrorOutput::from(&e))).into_response()
    }
  }
}
