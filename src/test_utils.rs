#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    /// CLI output with colour codes, leading chatter and the quiz double-encoded under `result`.
    pub const WRAPPED_CLI_OUTPUT: &str = concat!(
        "\x1b[1mSure! Here you go:\x1b[0m\n",
        r#"{"type":"result","is_error":false,"result":"{\"questions\":["#,
        r#"{\"question\":\"Sky is blue\",\"answer\":\"True\"},"#,
        r#"{\"question\":\"2+2?\",\"options\":[\"3\",\"4\",\"5\"],\"answer\":\"4\"},"#,
        r#"{\"question\":\"Vowels\",\"options\":[\"a\",\"b\",\"c\"],\"answer\":[\"a\",\"c\"]},"#,
        r#"{\"question\":\"Match\",\"pairs\":[{\"left\":\"X\",\"right\":\"1\"},{\"left\":\"Y\",\"right\":\"2\"}]}"#,
        r#"]}"}"#,
        "\n\x1b[?25h"
    );

    pub fn wrapped_cli_expected_quiz() -> Value {
        json!({
            "questions": [
                {"question": "Sky is blue", "answer": true},
                {"question": "2+2?", "options": ["3", "4", "5"], "answer": 1},
                {"question": "Vowels", "options": ["a", "b", "c"], "answer": [0, 2]},
                {
                    "question": "Match",
                    "answer": [
                        {"leftOption": "X", "rightOption": "1"},
                        {"leftOption": "Y", "rightOption": "2"}
                    ]
                }
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::{output_sanitizer::sanitize, result_unwrapper::extract_quiz_json};

    #[test]
    fn test_fixture_output_is_noisy() {
        assert!(WRAPPED_CLI_OUTPUT.contains('\x1b'));
        assert!(WRAPPED_CLI_OUTPUT.starts_with("\x1b[1mSure!"));
    }

    #[test]
    fn test_fixture_output_unwraps_to_four_questions() {
        let quiz = extract_quiz_json(&sanitize(WRAPPED_CLI_OUTPUT)).expect("fixture should parse");
        assert_eq!(quiz["questions"].as_array().map(Vec::len), Some(4));
    }
}
