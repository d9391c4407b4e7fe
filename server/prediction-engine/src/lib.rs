//! GutSync Prediction Engine: deterministic, rule-based wellness scoring.
//!
//! Normalizes daily biomarkers into sub-scores, applies fixed penalty and
//! warning rules, aggregates a weighted score, classifies a risk band, and
//! composes recommendation and stress insight text.
//!
//! No AI, no DB, no network; a pure function of its input.

pub mod config;
pub mod engine;
pub mod error;
pub mod insight;
pub mod normalize;
pub mod recommend;
pub mod risk;
pub mod rules;
pub mod score;
pub mod types;
pub mod validate;

pub use config::{ScoringConfig, Weights};
pub use engine::Engine;
pub use error::EngineError;
pub use types::{ErrorOutput, PredictionInput, PredictionRequest, PredictionResult, RiskLevel};
pub use validate::parse_input;

/// Run the engine with default configuration (no I/O).
pub fn run(input: &PredictionInput) -> PredictionResult {
  Engine::with_defaults().predict(input)
}
