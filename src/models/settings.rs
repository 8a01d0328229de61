use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::quiz_question::QuestionKind;

pub const MAX_QUESTIONS_PER_KIND: u32 = 20;

/// What the backend is asked to produce.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_requested_questions"))]
pub struct QuizSettings {
    #[validate(length(min = 1, max = 50))]
    pub language: String,

    #[validate(range(max = MAX_QUESTIONS_PER_KIND))]
    pub true_or_false: u32,

    #[validate(range(max = MAX_QUESTIONS_PER_KIND))]
    pub multiple_choice: u32,

    #[validate(range(max = MAX_QUESTIONS_PER_KIND))]
    pub select_all: u32,

    #[validate(range(max = MAX_QUESTIONS_PER_KIND))]
    pub matching: u32,

    #[validate(range(max = MAX_QUESTIONS_PER_KIND))]
    pub short_answer: u32,

    #[validate(range(max = MAX_QUESTIONS_PER_KIND))]
    pub long_answer: u32,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            language: "English".to_string(),
            true_or_false: 1,
            multiple_choice: 1,
            select_all: 1,
            matching: 0,
            short_answer: 0,
            long_answer: 0,
        }
    }
}

impl QuizSettings {
    pub fn count_for(&self, kind: QuestionKind) -> u32 {
        match kind {
            QuestionKind::TrueOrFalse => self.true_or_false,
            QuestionKind::MultipleChoice => self.multiple_choice,
            QuestionKind::SelectAll => self.select_all,
            QuestionKind::Matching => self.matching,
            QuestionKind::ShortAnswer => self.short_answer,
            QuestionKind::LongAnswer => self.long_answer,
        }
    }

    /// Enabled kinds with their counts, in a fixed order.
    pub fn requested(&self) -> Vec<(QuestionKind, u32)> {
        QuestionKind::ALL
            .into_iter()
            .map(|kind| (kind, self.count_for(kind)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    pub fn total_questions(&self) -> u32 {
        self.requested().iter().map(|(_, count)| count).sum()
    }
}

fn validate_requested_questions(settings: &QuizSettings) -> Result<(), ValidationError> {
    if settings.total_questions() == 0 {
        return Err(ValidationError::new("no_questions_requested"));
    }
    Ok(())
}
