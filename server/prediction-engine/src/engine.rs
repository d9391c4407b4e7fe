//! Core engine: wires normalizers, rules, scoring, risk, and text together.

use tracing::debug;

use crate::config::ScoringConfig;
use crate::error::EngineError;
use crate::insight;
use crate::normalize;
use crate::recommend;
use crate::risk;
use crate::rules;
use crate::score;
use crate::types::*;
use crate::validate;

/// The prediction engine. Holds only configuration; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Engine {
  config: ScoringConfig,
}

impl Engine {
  pub fn new(config: ScoringConfig) -> Result<Self, EngineError> {
    config.validate()?;
    Ok(Self { config })
  }

  pub fn with_defaults() -> Self {
    Self::default()
  }

  pub fn config(&self) -> &ScoringConfig {
    &self.config
  }

  /// Parse, validate and score a raw JSON request body.
  pub fn evaluate(&self, raw: &str) -> Result<PredictionResult, EngineError> {
    let input = validate::parse_input(raw)?;
    Ok(self.predict(&input))
  }

  /// Score a validated input.
  pub fn predict(&self, input: &PredictionInput) -> PredictionResult {
    let scores = normalize::sub_scores(input);
    let outcome = rules::evaluate(input, &self.config);

    let weighted = score::weighted(&scores, &self.config.weights);
    let final_score = score::final_score(weighted, outcome.deduction, input, &self.config);

    // Classification and advice use the unrounded score.
    let risk_level = risk::classify(final_score);
    let recommendation = recommend::compose(input, final_score);
    let stress_insight = insight::generate(&input.stress_reason, input.stress);

    debug!(
      ?scores,
      weighted,
      deduction = outcome.deduction,
      final_score,
      risk_level = %risk_level,
      penalties = outcome.penalties.len(),
      warnings = outcome.warnings.len(),
      has_insight = stress_insight.is_some(),
      "prediction generated"
    );

    PredictionResult {
      final_score: score::round2(final_score),
      risk_level,
      recommendation,
      warnings: outcome.warnings,
      penalties: outcome.penalties,
      stress_insight,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::Weights;

  fn input() -> PredictionInput {
    PredictionInput {
      sleep: 8.0,
      stress: 1.0,
      mood: 5.0,
      energy: 5.0,
      symptoms: Vec::new(),
      quick_inputs: Vec::new(),
      stress_reason: String::new(),
    }
  }

  #[test]
  fn perfect_day_scores_one() {
    let out = Engine::with_defaults().predict(&input());
    assert_eq!(out.final_score, 1.0);
    assert_eq!(out.risk_level, RiskLevel::Excellent);
    assert!(out.warnings.is_empty());
    assert!(out.penalties.is_empty());
    assert_eq!(out.stress_insight, None);
  }

  #[test]
  fn rejects_invalid_config() {
    let cfg = ScoringConfig {
      weights: Weights {
        mood: 1.0,
        ..Weights::default()
      },
      ..ScoringConfig::default()
    };
    assert!(Engine::new(cfg).is_err());
  }

  #[test]
  fn custom_weights_change_score() {
    // All weight on mood: mood 3 → 0.5.
    let cfg = ScoringConfig {
      weights: Weights {
        mood: 1.0,
        stress: 0.0,
        energy: 0.0,
        sleep: 0.0,
        symptom: 0.0,
      },
      ..ScoringConfig::default()
    };
    let engine = Engine::new(cfg).unwrap();
    let mut inp = input();
    inp.mood = 3.0;
    let out = engine.predict(&inp);
    assert_eq!(out.final_score, 0.5);
    assert_eq!(out.risk_level, RiskLevel::NeedsRecovery);
  }

  #[test]
  fn classification_uses_unrounded_score() {
    // Mood-only weights: mood 4.196 → 0.799, rounds to 0.80 yet stays "Stable".
    let cfg = ScoringConfig {
      weights: Weights {
        mood: 1.0,
        stress: 0.0,
        energy: 0.0,
        sleep: 0.0,
        symptom: 0.0,
      },
      ..ScoringConfig::default()
    };
    let engine = Engine::new(cfg).unwrap();
    let mut inp = input();
    inp.mood = 4.196;
    let out = engine.predict(&inp);
    assert_eq!(out.final_score, 0.8);
    assert_eq!(out.risk_level, RiskLevel::Stable);
    assert!(out.recommendation.starts_with("You're doing well overall"));
  }

  #[test]
  fn evaluate_surfaces_validation_error() {
    let err = Engine::with_defaults()
      .evaluate(r#"{"sleep": 7, "stress": 3, "mood": 4}"#)
      .unwrap_err();
    assert!(err.to_string().contains("energy"));
  }
}
