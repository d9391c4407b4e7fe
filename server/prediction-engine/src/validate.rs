//! Validate raw requests into typed PredictionInput records.

use serde_json::Value;

use crate::error::EngineError;
use crate::types::{PredictionInput, PredictionRequest};

/// Parse a JSON body and validate it.
pub fn parse_input(raw: &str) -> Result<PredictionInput, EngineError> {
  let request: PredictionRequest = serde_json::from_str(raw)?;
  request.into_input()
}

impl PredictionRequest {
  /// Fail on the first missing or non-numeric required field (sleep, stress,
  /// mood, energy in that order). Collections and stress reason default to empty.
  pub fn into_input(self) -> Result<PredictionInput, EngineError> {
    let sleep = required_number("sleep", self.sleep.as_ref())?;
    let stress = required_number("stress", self.stress.as_ref())?;
    let mood = required_number("mood", self.mood.as_ref())?;
    let energy = required_number("energy", self.energy.as_ref())?;

    Ok(PredictionInput {
      sleep,
      stress,
      mood,
      energy,
      symptoms: self.symptoms.unwrap_or_default(),
      quick_inputs: self.quick_inputs.unwrap_or_default(),
      stress_reason: self.stress_reason.unwrap_or_default(),
    })
  }
}

fn required_number(field: &str, value: Option<&Value>) -> Result<f64, EngineError> {
  match value {
    None | Some(Value::Null) => Err(EngineError::validation(
      field,
      "missing required numeric field",
    )),
    Some(v) => v
      .as_f64()
      .ok_or_else(|| EngineError::validation(field, "expected a number")),
  }
}
