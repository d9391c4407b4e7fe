//! GutSync Prediction API
//!
//! Stateless HTTP service around the prediction engine.
//! Bind to 127.0.0.1 by default (internal only).

mod handlers;
mod state;

pub use handlers::{generate_prediction, health};
pub use state::{AppState, ConfigError, ServerConfig};

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Build the router with permissive CORS (browser clients call it directly).
pub fn router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(health))
    .route("/generate-prediction", post(generate_prediction))
    .layer(CorsLayer::permissive())
    .with_state(state)
}
