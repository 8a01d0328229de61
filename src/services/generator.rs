use std::{fmt, str::FromStr, sync::Arc, time::Duration};

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    services::{
        answer_normalizer::normalize, claude_code_generator::ClaudeCodeGenerator,
        openai_generator::OpenAiGenerator, process_invoker::SubprocessRunner,
        result_unwrapper::extract_quiz_json,
    },
};

/// Contract every backend integration satisfies, so callers stay backend-agnostic.
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    /// Returns the canonical quiz serialized as JSON.
    async fn generate_quiz(&self, contents: &[String]) -> AppResult<String>;

    /// Scores a free-text answer against the reference answer.
    async fn short_or_long_answer_similarity(
        &self,
        user_answer: &str,
        answer: &str,
    ) -> AppResult<f64>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Google,
    Anthropic,
    Perplexity,
    Mistral,
    Cohere,
    Ollama,
    ClaudeCode,
}

impl Provider {
    pub const ALL: [Provider; 8] = [
        Provider::OpenAi,
        Provider::Google,
        Provider::Anthropic,
        Provider::Perplexity,
        Provider::Mistral,
        Provider::Cohere,
        Provider::Ollama,
        Provider::ClaudeCode,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OPENAI",
            Provider::Google => "GOOGLE",
            Provider::Anthropic => "ANTHROPIC",
            Provider::Perplexity => "PERPLEXITY",
            Provider::Mistral => "MISTRAL",
            Provider::Cohere => "COHERE",
            Provider::Ollama => "OLLAMA",
            Provider::ClaudeCode => "CLAUDE_CODE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OpenAI",
            Provider::Google => "Google",
            Provider::Anthropic => "Anthropic",
            Provider::Perplexity => "Perplexity",
            Provider::Mistral => "Mistral",
            Provider::Cohere => "Cohere",
            Provider::Ollama => "Ollama",
            Provider::ClaudeCode => "Claude Code CLI",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Provider {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|provider| provider.key() == key)
            .ok_or_else(|| AppError::ValidationError(format!("Unknown provider '{}'", s)))
    }
}

/// Selects the integration for the configured provider.
pub fn build_generator(config: &Config) -> AppResult<Arc<dyn QuizGenerator>> {
    match config.provider {
        Provider::ClaudeCode => {
            let timeout = Duration::from_secs(config.generation_timeout_seconds);
            let runner = Arc::new(SubprocessRunner::new(Some(timeout)));
            Ok(Arc::new(ClaudeCodeGenerator::new(config, runner)))
        }
        Provider::OpenAi => Ok(Arc::new(OpenAiGenerator::new(config))),
        other => Err(AppError::UnsupportedOperation(format!(
            "{} is not available in this build",
            other
        ))),
    }
}

/// Unwraps, normalizes and checks backend text; shared by every integration.
pub fn canonical_quiz_from_text(text: &str) -> AppResult<String> {
    let quiz = normalize(extract_quiz_json(text)?);
    let count = question_count(&quiz);
    if count == 0 {
        return Err(AppError::ValidationError(
            "Backend returned a quiz without questions".to_string(),
        ));
    }
    log::info!("Normalized quiz with {} question(s)", count);
    Ok(serde_json::to_string(&quiz)?)
}

fn question_count(quiz: &Value) -> usize {
    quiz.get("questions")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}
