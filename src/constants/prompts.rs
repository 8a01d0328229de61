/// Passed through the instruction flag. The bulk of the prompt goes over stdin.
pub const CLI_INSTRUCTION: &str = "Generate the quiz as JSON based on the provided text. Do not be conversational. Output ONLY JSON following the requested schema exactly.";

pub const OUTPUT_RULES: &str = r#"You are a quiz generator.
CRITICAL: Your response MUST be a single JSON object and NOTHING ELSE.
Do not include any conversational text, markdown formatting, or explanations.
The JSON object must have a "questions" property which is an array of questions."#;

pub const ANSWER_SCHEMA_RULES: &str = r#"IMPORTANT SCHEMA RULES:
1. True/False: "answer" must be a BOOLEAN (true or false), not a string.
2. Multiple Choice: "answer" must be the INDEX (number) of the correct option, not the text.
3. Select All That Apply: "answer" must be an ARRAY OF INDEXES (numbers), not text.
4. Matching: "answer" must be an array of objects with "leftOption" and "rightOption" keys."#;

pub const LATEX_RULE: &str =
    "If the text contains LaTeX, you should use $...$ (inline math mode) for mathematical symbols.";

pub const FOCUS_RULE: &str =
    "The overall focus should be on assessing understanding and critical thinking.";

pub const SOURCE_HEADER: &str = "TEXT TO GENERATE FROM:";

pub const SYSTEM_PROMPT_INTRO: &str = "You are an assistant specialized in generating exam-style questions and answers. Your response must only be a JSON object with the following property:
\"questions\": An array of JSON objects, where each JSON object represents a question and answer pair. Each question type has a different JSON object format.";

pub const TRUE_OR_FALSE_FORMAT: &str = r#"For true or false questions, the JSON object should be in the format { "question": string, "answer": boolean }."#;

pub const MULTIPLE_CHOICE_FORMAT: &str = r#"For multiple choice questions, the JSON object should be in the format { "question": string, "options": array of strings, "answer": number }. The "answer" is the zero-based index of the correct option."#;

pub const SELECT_ALL_FORMAT: &str = r#"For select all that apply questions, the JSON object should be in the format { "question": string, "options": array of strings, "answer": array of numbers }. The "answer" holds the zero-based indexes of every correct option."#;

pub const MATCHING_FORMAT: &str = r#"For matching questions, the JSON object should be in the format { "question": string, "answer": array of { "leftOption": string, "rightOption": string } }."#;

pub const SHORT_ANSWER_FORMAT: &str = r#"For short answer questions, the JSON object should be in the format { "question": string, "answer": string }. The answer should be one or two sentences."#;

pub const LONG_ANSWER_FORMAT: &str = r#"For long answer questions, the JSON object should be in the format { "question": string, "answer": string }. The answer should be a paragraph."#;
