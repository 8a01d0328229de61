use serde::{Deserialize, Serialize};

use crate::{
    errors::{AppError, AppResult},
    models::domain::quiz_question::Question,
};

/// Canonical quiz handed back to the host once normalization has run.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn from_json(json: &str) -> AppResult<Self> {
        let quiz: Quiz = serde_json::from_str(json)?;
        if quiz.questions.is_empty() {
            return Err(AppError::ValidationError(
                "Quiz must contain at least one question".to_string(),
            ));
        }
        Ok(quiz)
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
