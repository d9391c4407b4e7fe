//! Stress insight: keyword-matched response to the free-text stress reason.

/// One keyword group and its message.
struct InsightRule {
  keywords: &'static [&'static str],
  message: &'static str,
}

/// Evaluated top-down; first group with any keyword contained in the
/// lowercased reason wins.
const INSIGHT_RULES: &[InsightRule] = &[
  InsightRule {
    keywords: &["exam", "study", "test", "school", "assignment"],
    message: "Study stress can feel overwhelming. Try the Pomodoro technique — 25 minutes of focus, then a 5-minute break. You've got this! 📚",
  },
  InsightRule {
    keywords: &["work", "job", "deadline", "project", "boss", "workload"],
    message: "Work pressure building up? Step away for a 5-minute walk or stretch. A clear mind leads to better productivity. 💼",
  },
  InsightRule {
    keywords: &["relationship", "partner", "boyfriend", "girlfriend", "spouse"],
    message: "Relationship stress is tough. Try grounding yourself with slow, deep breaths. Consider journaling your feelings before any important conversations. 💙",
  },
  InsightRule {
    keywords: &["family", "parent", "mom", "dad", "sibling"],
    message: "Family matters can weigh heavily on us. A 4-7-8 breathing exercise can help calm your nervous system. Remember, it's okay to set boundaries. 🏠",
  },
  InsightRule {
    keywords: &["emotion", "feeling", "sad", "upset", "anxious", "worried"],
    message: "Your feelings are valid. Try a grounding exercise: name 5 things you see, 4 you hear, 3 you touch. This can help bring you back to the present. 🌸",
  },
  InsightRule {
    keywords: &["health", "sick", "pain", "doctor", "medical"],
    message: "Health concerns can be stressful. Focus on what you can control — stay hydrated, rest when needed, and reach out to healthcare providers when necessary. 🩺",
  },
  InsightRule {
    keywords: &["sleep", "tired", "fatigue", "exhausted", "insomnia"],
    message: "Sleep deprivation affects everything. Tonight, try a calming routine: no screens 30 mins before bed, dim lights, and a warm drink. Your body will thank you. 🌙",
  },
  InsightRule {
    keywords: &["money", "financial", "bill", "debt", "rent"],
    message: "Financial stress is real and valid. Take one small step today — even reviewing a single expense can give you back a sense of control. 💰",
  },
  InsightRule {
    keywords: &["friend", "social", "lonely", "alone", "isolated"],
    message: "Social connections matter. Even a short text to someone you trust can lift your spirits. You're not alone in feeling this way. 🤝",
  },
];

const NO_REASON_MESSAGE: &str =
  "Take a moment to breathe deeply. Even small breaks can help reset your mind and body.";

/// Characters of the reason echoed back by the fallback messages.
const ECHO_CHARS: usize = 30;

impl InsightRule {
  fn matches(&self, lowered: &str) -> bool {
    self.keywords.iter().any(|k| lowered.contains(k))
  }
}

/// Insight for the given reason and stress level, or None when there is no
/// reason and stress is 5 or below.
pub fn generate(stress_reason: &str, stress: f64) -> Option<String> {
  if stress_reason.trim().is_empty() {
    return (stress > 5.0).then(|| NO_REASON_MESSAGE.to_string());
  }

  let lowered = stress_reason.to_lowercase();
  if let Some(rule) = INSIGHT_RULES.iter().find(|r| r.matches(&lowered)) {
    return Some(rule.message.to_string());
  }

  let echo = echo(stress_reason);
  if stress >= 7.0 {
    Some(format!(
      "We hear you about \"{}\". High stress moments call for immediate relief — try box breathing: 4 counts in, hold 4, out 4, hold 4. 🧘",
      echo
    ))
  } else {
    Some(format!(
      "Thanks for sharing about \"{}\". Remember, acknowledging stress is the first step. Take things one moment at a time. 💚",
      echo
    ))
  }
}

/// First 30 characters of the reason, with "..." when truncated.
///
/// Counts Unicode scalar values, not UTF-16 units, so a cut never splits a
/// character; reasons with astral-plane emoji are cut later than in a
/// UTF-16 count.
fn echo(reason: &str) -> String {
  let mut out: String = reason.chars().take(ECHO_CHARS).collect();
  if reason.chars().count() > ECHO_CHARS {
    out.push_str("...");
  }
  out
}
