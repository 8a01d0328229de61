use serde_json::{Map, Value};

use crate::models::domain::QuestionKind;

/// Transient fields a backend may use to describe matching pairs.
const PAIR_FIELDS: [&str; 2] = ["pairs", "matching"];

/// Rewrites backend answer encodings into the canonical shape for each question kind.
///
/// Never fails: anything that does not look like a recognised encoding is left
/// untouched, and input without a `questions` array is returned unchanged.
pub fn normalize(quiz: Value) -> Value {
    let Value::Object(mut root) = quiz else {
        return quiz;
    };

    if let Some(Value::Array(questions)) = root.get_mut("questions") {
        for question in questions.iter_mut() {
            if let Value::Object(fields) = question {
                normalize_question(fields);
            }
        }
    }

    Value::Object(root)
}

pub fn normalize_question(fields: &mut Map<String, Value>) {
    let explicit = fields
        .get("type")
        .and_then(Value::as_str)
        .and_then(QuestionKind::from_tag);

    normalize_true_or_false(fields, explicit);
    if explicit != Some(QuestionKind::TrueOrFalse) {
        normalize_option_answer(fields);
    }
    normalize_matching(fields);
}

/// Turns string answers into booleans for true/false questions.
///
/// Untagged option-less answers are coerced only when they read literally
/// `true` or `false`. Other strings stay text, so an untagged short answer is
/// not flattened to `false` the way a blanket string comparison would.
fn normalize_true_or_false(fields: &mut Map<String, Value>, explicit: Option<QuestionKind>) {
    let has_options = matches!(fields.get("options"), Some(Value::Array(_)));
    let Some(Value::String(text)) = fields.get("answer") else {
        return;
    };
    let text = text.trim();

    let coerced = match explicit {
        Some(QuestionKind::TrueOrFalse) => text.eq_ignore_ascii_case("true"),
        // Without a tag only a literal true/false answer on an option-less
        // question is treated as a boolean, so free-text answers survive.
        None if !has_options => {
            if text.eq_ignore_ascii_case("true") {
                true
            } else if text.eq_ignore_ascii_case("false") {
                false
            } else {
                return;
            }
        }
        _ => return,
    };

    fields.insert("answer".to_string(), Value::Bool(coerced));
}

fn normalize_option_answer(fields: &mut Map<String, Value>) {
    let Some(Value::Array(options)) = fields.get("options") else {
        return;
    };
    let options = options.clone();

    let replacement = match fields.get("answer") {
        Some(Value::String(text)) => match index_of(&options, text) {
            Some(index) => Value::from(index),
            None => return,
        },
        Some(Value::Array(answers)) if answers.first().is_some_and(Value::is_string) => {
            let indexes = answers.iter().filter_map(|answer| match answer {
                Value::String(text) => index_of(&options, text),
                other => valid_index(other, options.len()),
            });
            Value::from(unique(indexes))
        }
        Some(Value::Array(answers)) if !answers.is_empty() && answers.iter().all(Value::is_u64) => {
            let indexes = answers.iter().filter_map(Value::as_u64).map(|i| i as usize);
            Value::from(unique(indexes))
        }
        _ => return,
    };

    fields.insert("answer".to_string(), replacement);
}

fn normalize_matching(fields: &mut Map<String, Value>) {
    let answer_missing = fields.get("answer").map_or(true, Value::is_null);

    if answer_missing {
        let pairs = PAIR_FIELDS
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_array))
            .map(|pairs| pairs.iter().filter_map(canonical_pair).collect::<Vec<_>>());

        if let Some(pairs) = pairs {
            fields.insert("answer".to_string(), Value::Array(pairs));
        }
    } else if let Some(Value::Array(answers)) = fields.get_mut("answer") {
        // Matching answers that use the short left/right naming.
        if answers.iter().any(has_short_pair_keys) {
            for answer in answers.iter_mut() {
                if has_short_pair_keys(answer) {
                    if let Some(pair) = canonical_pair(answer) {
                        *answer = pair;
                    }
                }
            }
        }
    }

    if fields.contains_key("answer") {
        for key in PAIR_FIELDS {
            fields.remove(key);
        }
    }
}

fn canonical_pair(pair: &Value) -> Option<Value> {
    let pair = pair.as_object()?;
    let mut canonical = Map::new();
    if let Some(left) = first_string(pair, &["left", "leftOption"]) {
        canonical.insert("leftOption".to_string(), Value::from(left));
    }
    if let Some(right) = first_string(pair, &["right", "rightOption"]) {
        canonical.insert("rightOption".to_string(), Value::from(right));
    }
    Some(Value::Object(canonical))
}

fn has_short_pair_keys(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|pair| pair.contains_key("left") || pair.contains_key("right"))
}

fn first_string<'a>(pair: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| pair.get(*key).and_then(Value::as_str))
        .find(|text| !text.is_empty())
}

fn index_of(options: &[Value], text: &str) -> Option<usize> {
    options.iter().position(|option| option.as_str() == Some(text))
}

fn valid_index(value: &Value, len: usize) -> Option<usize> {
    value
        .as_u64()
        .map(|i| i as usize)
        .filter(|index| *index < len)
}

fn unique(indexes: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut seen = Vec::new();
    for index in indexes {
        if !seen.contains(&index) {
            seen.push(index);
        }
    }
    seen
}
