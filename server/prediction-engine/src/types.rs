//! Core types for the prediction engine (JSON contracts + internal models).

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract: what the caller sends)
// ---------------------------------------------------------------------------

/// Raw request body. Unknown fields are silently ignored.
///
/// The numeric fields stay untyped here so a missing or non-numeric value is
/// reported against its field name instead of as a generic parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
  #[serde(default)]
  pub sleep: Option<serde_json::Value>,
  #[serde(default)]
  pub stress: Option<serde_json::Value>,
  #[serde(default)]
  pub mood: Option<serde_json::Value>,
  #[serde(default)]
  pub energy: Option<serde_json::Value>,
  #[serde(default)]
  pub symptoms: Option<Vec<String>>,
  #[serde(default)]
  pub quick_inputs: Option<Vec<String>>,
  #[serde(default)]
  pub stress_reason: Option<String>,
}

// ---------------------------------------------------------------------------
// Internal validated types
// ---------------------------------------------------------------------------

/// Validated daily biomarker entry. Values outside the nominal ranges are kept
/// as-is and flow through the same arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionInput {
  /// Hours slept, nominally 0–24.
  pub sleep: f64,
  /// Stress level, nominally 1–10.
  pub stress: f64,
  /// Mood, nominally 1–5.
  pub mood: f64,
  /// Energy, nominally 1–5.
  pub energy: f64,
  pub symptoms: Vec<String>,
  pub quick_inputs: Vec<String>,
  pub stress_reason: String,
}

impl PredictionInput {
  pub fn has_symptom(&self, name: &str) -> bool {
    self.symptoms.iter().any(|s| s == name)
  }

  pub fn has_quick_input(&self, name: &str) -> bool {
    self.quick_inputs.iter().any(|s| s == name)
  }
}

/// The five normalized sub-scores, each in [0, 1] for nominal inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
  pub mood: f64,
  pub stress: f64,
  pub energy: f64,
  pub sleep: f64,
  pub symptom: f64,
}

/// Warnings, penalties and total deduction from the rule pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleOutcome {
  pub warnings: Vec<String>,
  pub penalties: Vec<String>,
  pub deduction: f64,
}

// ---------------------------------------------------------------------------
// Risk bands
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
  #[serde(rename = "Excellent / Balanced")]
  Excellent,
  #[serde(rename = "Stable but Needs Monitoring")]
  Stable,
  #[serde(rename = "Needs Recovery / Mild Risk")]
  NeedsRecovery,
  #[serde(rename = "High Alert / Severe Fatigue or Stress")]
  HighAlert,
}

impl RiskLevel {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Excellent => "Excellent / Balanced",
      Self::Stable => "Stable but Needs Monitoring",
      Self::NeedsRecovery => "Needs Recovery / Mild Risk",
      Self::HighAlert => "High Alert / Severe Fatigue or Stress",
    }
  }
}

impl fmt::Display for RiskLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract: what we emit)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
  /// Final score, rounded to 2 decimals; in [0, 1] for nominal inputs.
  pub final_score: f64,
  pub risk_level: RiskLevel,
  pub recommendation: String,
  pub warnings: Vec<String>,
  pub penalties: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub stress_insight: Option<String>,
}

/// Structured error body for rejected requests.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}

impl From<&crate::error::EngineError> for ErrorOutput {
  fn from(e: &crate::error::EngineError) -> Self {
    match e {
      crate::error::EngineError::Validation { field, reason } => {
        ErrorOutput::new(format!("Invalid input: {}", reason)).with_field(field.clone())
      }
      _ => ErrorOutput::new(e.to_string()),
    }
  }
}
