//! Binary entrypoint: read one JSON request from stdin, write one JSON object
//! to stdout.
//!
//! On success the object is a PredictionResult; on invalid input it is an
//! ErrorOutput and the process exits with status 1. Logs go to stderr.

use prediction_engine::{Engine, ErrorOutput};
use std::io::{self, Read, Write};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .init();

  if let Err(e) = run_binary() {
    error!("prediction-engine error: {}", e);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), Box<dyn std::error::Error>> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;

  let engine = Engine::with_defaults();
  let mut out = io::stdout().lock();
  match engine.evaluate(&raw) {
    Ok(result) => {
      serde_json::to_writer(&mut out, &result)?;
      writeln!(out)?;
      Ok(())
    }
    Err(e) => {
      serde_json::to_writer(&mut out, &ErrorOutput::from(&e))?;
      writeln!(out)?;
      out.flush()?;
      Err(e.into())
    }
  }
}
