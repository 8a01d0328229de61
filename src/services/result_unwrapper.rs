use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// First `{` to last `}`, non-recursive. Leading and trailing prose is ignored.
static JSON_OBJECT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON_OBJECT_REGEX is a valid regex pattern"));

/// Envelope keys a backend may wrap the quiz text in, in priority order.
const ENVELOPE_KEYS: [&str; 2] = ["result", "content"];

pub fn find_json_object(text: &str) -> Option<&str> {
    JSON_OBJECT_REGEX.find(text).map(|m| m.as_str())
}

/// Recovers the quiz payload from sanitized backend output.
pub fn extract_quiz_json(sanitized: &str) -> AppResult<Value> {
    let matched = find_json_object(sanitized).ok_or(AppError::NoJsonFound)?;
    let envelope: Value = serde_json::from_str(matched)?;
    let working = unwrap_envelope(&envelope, matched);

    // The wrapped text is sometimes itself JSON encoded inside prose.
    let quiz_json = find_json_object(&working).unwrap_or(working.as_str());
    let quiz: Value = serde_json::from_str(quiz_json)?;
    Ok(quiz)
}

/// Picks the text that should hold the quiz out of a parsed envelope.
pub fn unwrap_envelope(envelope: &Value, matched: &str) -> String {
    for key in ENVELOPE_KEYS {
        if let Some(text) = envelope.get(key).and_then(Value::as_str) {
            return text.to_string();
        }
    }
    if envelope.get("questions").is_some() {
        return envelope.to_string();
    }
    matched.to_string()
}
