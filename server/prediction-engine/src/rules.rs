//! Penalty and warning rules, evaluated in a fixed order.

use crate::config::ScoringConfig;
use crate::types::{PredictionInput, RuleOutcome};

pub const FATIGUE_PENALTY: &str = "Fatigue penalty: Low sleep duration detected";
pub const CORTISOL_PENALTY: &str = "Cortisol penalty: High stress levels detected";
pub const STRONG_SYMPTOM_WARNING: &str = "⚠️ Strong risk warning: 4+ symptoms reported";
pub const MILD_SYMPTOM_WARNING: &str = "⚠️ Mild risk warning: Multiple symptoms reported";
pub const GUT_IMBALANCE_WARNING: &str =
  "🔴 Gut imbalance detected: Bloating combined with low energy";
pub const MOOD_DECLINE_WARNING: &str = "🔴 Mood decline risk: Anxiety combined with poor sleep";

/// Run every rule; deductions are summed without a per-rule cap.
pub fn evaluate(input: &PredictionInput, config: &ScoringConfig) -> RuleOutcome {
  let mut warnings = Vec::new();
  let mut penalties = Vec::new();
  let mut deduction = 0.0;

  if input.sleep < 6.0 {
    penalties.push(FATIGUE_PENALTY.to_string());
    deduction += config.fatigue_penalty;
  }

  if input.stress > 7.0 {
    penalties.push(CORTISOL_PENALTY.to_string());
    deduction += config.cortisol_penalty;
  }

  let symptom_count = input.symptoms.len();
  if symptom_count >= 4 {
    warnings.push(STRONG_SYMPTOM_WARNING.to_string());
    deduction += config.strong_symptom_penalty;
  } else if symptom_count >= 2 {
    warnings.push(MILD_SYMPTOM_WARNING.to_string());
  }

  if input.has_symptom("Bloating") && input.energy <= 2.0 {
    warnings.push(GUT_IMBALANCE_WARNING.to_string());
    deduction += config.gut_imbalance_penalty;
  }

  if input.has_symptom("Anxiety") && input.sleep < 6.0 {
    warnings.push(MOOD_DECLINE_WARNING.to_string());
    deduction += config.mood_decline_penalty;
  }

  RuleOutcome {
    warnings,
    penalties,
    deduction,
  }
}
