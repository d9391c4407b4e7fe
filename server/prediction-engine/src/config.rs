//! Scoring configuration with the production defaults.

use crate::error::EngineError;

/// Sub-score weights. Must be non-negative and sum to 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct Weights {
  pub mood: f64,
  pub stress: f64,
  pub energy: f64,
  pub sleep: f64,
  pub symptom: f64,
}

impl Default for Weights {
  fn default() -> Self {
    Self {
      mood: 0.3,
      stress: 0.3,
      energy: 0.2,
      sleep: 0.1,
      symptom: 0.1,
    }
  }
}

impl Weights {
  pub fn sum(&self) -> f64 {
    self.mood + self.stress + self.energy + self.sleep + self.symptom
  }
}

/// Tunable weights, deductions and bonuses for the scoring pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
  pub weights: Weights,
  /// Deduction when sleep < 6 hours.
  pub fatigue_penalty: f64,
  /// Deduction when stress > 7.
  pub cortisol_penalty: f64,
  /// Deduction when 4 or more symptoms are reported.
  pub strong_symptom_penalty: f64,
  /// Deduction for Bloating with energy <= 2.
  pub gut_imbalance_penalty: f64,
  /// Deduction for Anxiety with sleep < 6 hours.
  pub mood_decline_penalty: f64,
  pub exercise_bonus: f64,
  pub healthy_diet_bonus: f64,
}

impl Default for ScoringConfig {
  fn default() -> Self {
    Self {
      weights: Weights::default(),
      fatigue_penalty: 0.10,
      cortisol_penalty: 0.10,
      strong_symptom_penalty: 0.05,
      gut_imbalance_penalty: 0.05,
      mood_decline_penalty: 0.05,
      exercise_bonus: 0.03,
      healthy_diet_bonus: 0.02,
    }
  }
}

impl ScoringConfig {
  /// Reject weight sets that are negative or do not sum to 1.0.
  pub fn validate(&self) -> Result<(), EngineError> {
    let w = &self.weights;
    for (name, value) in [
      ("mood", w.mood),
      ("stress", w.stress),
      ("energy", w.energy),
      ("sleep", w.sleep),
      ("symptom", w.symptom),
    ] {
      if !value.is_finite() || value < 0.0 {
        return Err(EngineError::config(format!(
          "weight {} must be a non-negative number, got {}",
          name, value
        )));
      }
    }
    let sum = w.sum();
    if (sum - 1.0).abs() > 1e-9 {
      return Err(EngineError::config(format!(
        "weights must sum to 1.0, got {}",
        sum
      )));
    }
    Ok(())
  }
}
