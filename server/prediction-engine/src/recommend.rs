//! Recommendation text: one band sentence plus per-condition advice.

use crate::types::PredictionInput;

/// Symptom-specific advice, appended in this order when the symptom is present.
const SYMPTOM_ADVICE: &[(&str, &str)] = &[
  (
    "Bloating",
    "🍃 For bloating: Stay hydrated, consider probiotics, and avoid processed foods.",
  ),
  (
    "Anxiety",
    "🌿 For anxiety: Limit caffeine, practice grounding techniques, and maintain regular sleep.",
  ),
  (
    "Brain Fog",
    "🧠 For brain fog: Ensure adequate hydration, take breaks, and consider omega-3 rich foods.",
  ),
  (
    "Insomnia",
    "🌙 For insomnia: Avoid screens before bed, keep a consistent sleep schedule, and reduce evening caffeine.",
  ),
];

/// Sentence for the score band (same thresholds as the risk classifier).
pub fn band_sentence(score: f64) -> &'static str {
  if score >= 0.8 {
    "Great job! Your biomarkers indicate excellent balance. Keep maintaining your current healthy habits."
  } else if score >= 0.6 {
    "You're doing well overall, but there's room for optimization."
  } else if score >= 0.4 {
    "Your body needs some recovery attention. Focus on rest and stress management."
  } else {
    "⚠️ Your readings indicate significant stress or fatigue. Prioritize immediate self-care."
  }
}

/// Space-joined recommendation; never empty.
pub fn compose(input: &PredictionInput, score: f64) -> String {
  let mut parts = vec![band_sentence(score)];

  if input.sleep < 6.0 {
    parts.push("💤 Prioritize getting 7-8 hours of sleep tonight. Consider a wind-down routine.");
  }
  if input.stress > 7.0 {
    parts.push("🧘 High stress detected. Try breathing exercises, meditation, or a short walk.");
  }
  if input.mood <= 2.0 {
    parts.push(
      "💚 Low mood noted. Connect with someone you trust or engage in an activity you enjoy.",
    );
  }
  if input.energy <= 2.0 {
    parts.push(
      "⚡ Low energy levels. Consider a power nap, light exercise, or checking your nutrition.",
    );
  }
  for (symptom, advice) in SYMPTOM_ADVICE {
    if input.has_symptom(symptom) {
      parts.push(*advice);
    }
  }

  parts.join(" ")
}

#[cfg(test)]
mod tests {
  use super::*;

  fn input() -> PredictionInput {
    PredictionInput {
      sleep: 8.0,
      stress: 3.0,
      mood: 4.0,
      energy: 4.0,
      symptoms: Vec::new(),
      quick_inputs: Vec::new(),
      stress_reason: String::new(),
    }
  }

  #[test]
  fn band_sentence_only_for_good_day() {
    let text = compose(&input(), 0.9);
    assert!(text.starts_with("Great job!"));
    assert_eq!(text, band_sentence(0.9));
  }

  #[test]
  fn each_band_has_distinct_sentence() {
    let sentences = [band_sentence(0.9), band_sentence(0.7), band_sentence(0.5), band_sentence(0.1)];
    for (i, a) in sentences.iter().enumerate() {
      for b in &sentences[i + 1..] {
        assert_ne!(a, b);
      }
    }
  }

  #[test]
  fn conditions_append_in_order() {
    let mut inp = input();
    inp.sleep = 5.0;
    inp.mood = 2.0;
    inp.symptoms = vec!["Insomnia".into(), "Bloating".into()];
    let text = compose(&inp, 0.5);

    let sleep = text.find("💤").unwrap();
    let mood = text.find("💚").unwrap();
    let bloating = text.find("🍃").unwrap();
    let insomnia = text.find("🌙").unwrap();
    assert!(text.starts_with("Your body needs some recovery attention."));
    assert!(sleep < mood && mood < bloating && bloating < insomnia);
    assert!(!text.contains("🧘"));
    assert!(!text.contains("⚡"));
  }

  #[test]
  fn low_mood_and_energy_advice_is_inclusive_at_two() {
    let mut inp = input();
    inp.mood = 2.0;
    inp.energy = 2.0;
    let text = compose(&inp, 0.5);
    assert!(text.contains("💚 Low mood noted."));
    assert!(text.contains("⚡ Low energy levels."));

    inp.mood = 2.01;
    inp.energy = 2.01;
    let text = compose(&inp, 0.5);
    assert!(!text.contains("💚"));
    assert!(!text.contains("⚡"));
  }
}
