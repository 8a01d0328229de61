use once_cell::sync::Lazy;
use regex::Regex;

/// ECMA-48 CSI (`ESC [` or 0x9b, parameter bytes, intermediate bytes, final byte),
/// then charset selection and other short escapes.
static ANSI_ESCAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?:\x1b\[|\x{9b})[0-?]*[ -/]*[@-~]",
        r"|[\x1b\x{9b}][\[()#;?]*(?:[0-9]{1,4}(?:;[0-9]{0,4})*)?[0-9A-ORZcf-nqry=><]",
    ))
    .expect("ANSI_ESCAPE_REGEX is a valid regex pattern")
});

/// Strips terminal control sequences and surrounding whitespace.
pub fn sanitize(raw: &str) -> String {
    let mut text = raw.to_string();
    // Removing one sequence can splice a stray ESC onto the following bytes, so
    // repeat until nothing matches.
    while ANSI_ESCAPE_REGEX.is_match(&text) {
        text = ANSI_ESCAPE_REGEX.replace_all(&text, "").into_owned();
    }
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_color_codes() {
        assert_eq!(sanitize("\x1b[32m{\"a\":1}\x1b[0m"), "{\"a\":1}");
    }

    #[test]
    fn strips_cursor_and_mode_sequences() {
        let raw = "\x1b[?25l\x1b[2K\x1b[1;31mhello\x1b(B\x1b[?25h";
        assert_eq!(sanitize(raw), "hello");
    }

    #[test]
    fn strips_single_byte_csi() {
        assert_eq!(sanitize("\u{9b}31mred"), "red");
    }

    #[test]
    fn strips_private_parameter_sequences() {
        assert_eq!(sanitize("\x1b[>4;2mok"), "ok");
        assert_eq!(sanitize("\x1b[>1uok"), "ok");
        assert_eq!(sanitize("\x1b[?1049hok"), "ok");
    }

    #[test]
    fn strips_sequences_with_intermediate_bytes() {
        assert_eq!(sanitize("\x1b[1 qok"), "ok");
        assert_eq!(sanitize("\x1b[!pok"), "ok");
        assert_eq!(sanitize("\u{9b}0 qok"), "ok");
    }

    #[test]
    fn sequence_inside_json_no_longer_breaks_extraction() {
        use crate::services::result_unwrapper::extract_quiz_json;

        let raw = "{\"questions\":[\x1b[>4;2m{\"question\":\"q\",\"answer\":true}\x1b[1 q]}";
        let quiz = extract_quiz_json(&sanitize(raw)).expect("quiz should extract");
        assert_eq!(quiz["questions"][0]["answer"], serde_json::json!(true));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(sanitize("\n\t  {\"a\":1}  \r\n"), "{\"a\":1}");
    }

    #[test]
    fn leaves_json_content_alone() {
        let json = r#"{"questions":[{"question":"Is $x^2 \geq 0$?","answer":true}]}"#;
        assert_eq!(sanitize(json), json);
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            "",
            "   ",
            "plain text",
            "\x1b[0m  padded \x1b[1m ",
            "\x1b\x1b[0mA{\"x\":1}",
            "\x1b[\x1b[31mm",
        ];

        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "for {:?}", input);
        }
    }
}
