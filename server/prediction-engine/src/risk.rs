//! Risk band from the unrounded final score.

use crate::types::RiskLevel;

/// Descending thresholds; first match wins.
pub fn classify(score: f64) -> RiskLevel {
  if score >= 0.8 {
    RiskLevel::Excellent
  } else if score >= 0.6 {
    RiskLevel::Stable
  } else if score >= 0.4 {
    RiskLevel::NeedsRecovery
  } else {
    RiskLevel::HighAlert
  }
}
