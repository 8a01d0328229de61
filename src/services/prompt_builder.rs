use crate::{
    constants::prompts::{
        ANSWER_SCHEMA_RULES, FOCUS_RULE, LATEX_RULE, LONG_ANSWER_FORMAT, MATCHING_FORMAT,
        MULTIPLE_CHOICE_FORMAT, OUTPUT_RULES, SELECT_ALL_FORMAT, SHORT_ANSWER_FORMAT,
        SOURCE_HEADER, SYSTEM_PROMPT_INTRO, TRUE_OR_FALSE_FORMAT,
    },
    models::{domain::QuestionKind, settings::QuizSettings},
};

/// Full instruction payload delivered to the backend over stdin.
pub fn build_instructions(contents: &[String], settings: &QuizSettings) -> String {
    format!(
        "{OUTPUT_RULES}\n\n{ANSWER_SCHEMA_RULES}\n\nGenerate {} about the provided text.\n{LATEX_RULE}\n{FOCUS_RULE}\n\n{SOURCE_HEADER}\n{}",
        requested_questions(settings),
        contents.join("\n\n")
    )
}

pub fn build_system_prompt(settings: &QuizSettings) -> String {
    let tags: Vec<&str> = settings
        .requested()
        .iter()
        .map(|(kind, _)| kind.tag())
        .collect();

    let mut prompt = format!(
        "{SYSTEM_PROMPT_INTRO} Every question object must also have a \"type\" property set to one of: {}.",
        tags.join(", ")
    );
    for (kind, _) in settings.requested() {
        prompt.push('\n');
        prompt.push_str(format_for(kind));
    }
    prompt.push_str(&format!(
        "\nFor example, if 2 true or false questions are requested, the \"questions\" array should contain 2 true or false objects.\nThe questions and answers must be written in {}.",
        settings.language
    ));
    prompt
}

/// Phrases the per-kind counts, e.g. "2 true or false questions and 1 matching question".
pub fn requested_questions(settings: &QuizSettings) -> String {
    let parts: Vec<String> = settings
        .requested()
        .into_iter()
        .map(|(kind, count)| {
            let noun = if count == 1 { "question" } else { "questions" };
            format!("{} {} {}", count, kind.label(), noun)
        })
        .collect();

    match parts.as_slice() {
        [] => "questions".to_string(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}

fn format_for(kind: QuestionKind) -> &'static str {
    match kind {
        QuestionKind::TrueOrFalse => TRUE_OR_FALSE_FORMAT,
        QuestionKind::MultipleChoice => MULTIPLE_CHOICE_FORMAT,
        QuestionKind::SelectAll => SELECT_ALL_FORMAT,
        QuestionKind::Matching => MATCHING_FORMAT,
        QuestionKind::ShortAnswer => SHORT_ANSWER_FORMAT,
        QuestionKind::LongAnswer => LONG_ANSWER_FORMAT,
    }
}
