//! Binary entrypoint for the prediction API.

use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use prediction_api::{router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = ServerConfig::from_env()?;
  let state = Arc::new(AppState::default());
  let app = router(state);

  let addr = config.addr();
  info!("prediction-api listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
