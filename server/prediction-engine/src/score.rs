//! Weighted score, penalty deduction, habit bonuses and rounding.

use crate::config::{ScoringConfig, Weights};
use crate::types::{PredictionInput, SubScores};

/// Weighted sum of sub-scores, before penalties.
pub fn weighted(scores: &SubScores, weights: &Weights) -> f64 {
  scores.mood * weights.mood
    + scores.stress * weights.stress
    + scores.energy * weights.energy
    + scores.sleep * weights.sleep
    + scores.symptom * weights.symptom
}

/// Unrounded final score: deduct penalties (floored at 0), then add the
/// exercise and healthy diet bonuses, each capped at 1.
///
/// Out-of-range inputs (e.g. mood 9) can push the score above 1 when no
/// bonus applies; only the bonus steps cap it.
pub fn final_score(weighted: f64, deduction: f64, input: &PredictionInput, config: &ScoringConfig) -> f64 {
  let mut score = (weighted - deduction).max(0.0);
  if input.has_quick_input("Exercise") {
    score = (score + config.exercise_bonus).min(1.0);
  }
  if input.has_quick_input("Healthy Diet") {
    score = (score + config.healthy_diet_bonus).min(1.0);
  }
  score
}

/// Round to 2 decimals (half away from zero, i.e. half-up for scores >= 0).
pub fn round2(score: f64) -> f64 {
  (score * 100.0).round() / 100.0
}
