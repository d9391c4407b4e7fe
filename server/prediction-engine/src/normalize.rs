//! Map raw biomarkers onto [0, 1] sub-scores.
//!
//! All functions are total: out-of-range inputs go through the same formula
//! or branch table rather than being rejected.

use crate::types::{PredictionInput, SubScores};

/// Mood 1–5 → 0.0–1.0.
pub fn mood(mood: f64) -> f64 {
  (mood - 1.0) / 4.0
}

/// Stress 1–10 → 1.0–0.0 (lower stress scores higher).
pub fn stress(stress: f64) -> f64 {
  (10.0 - stress) / 9.0
}

/// Energy 1–5 → 0.0–1.0.
pub fn energy(energy: f64) -> f64 {
  (energy - 1.0) / 4.0
}

/// Step function around the 7–9 hour optimum. Branch order matters at the
/// band edges (6, 7, 9, 10, 5, 4).
pub fn sleep(hours: f64) -> f64 {
  if (7.0..=9.0).contains(&hours) {
    1.0
  } else if (6.0..7.0).contains(&hours) {
    0.7
  } else if hours > 9.0 && hours <= 10.0 {
    0.8
  } else if (5.0..6.0).contains(&hours) {
    0.5
  } else if hours > 10.0 {
    0.6
  } else if (4.0..5.0).contains(&hours) {
    0.3
  } else {
    0.1
  }
}

/// More symptoms, lower score; floors at 0.1 from four upward.
pub fn symptoms(count: usize) -> f64 {
  match count {
    0 => 1.0,
    1 => 0.8,
    2 => 0.6,
    3 => 0.4,
    n => (1.0 - n as f64 * 0.15).max(0.1),
  }
}

pub fn sub_scores(input: &PredictionInput) -> SubScores {
  SubScores {
    mood: mood(input.mood),
    stress: stress(input.stress),
    energy: energy(input.energy),
    sleep: sleep(input.sleep),
    symptom: symptoms(input.symptoms.len()),
  }
}
