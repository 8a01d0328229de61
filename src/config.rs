use std::env;

use secrecy::{ExposeSecret, SecretString};
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::settings::QuizSettings,
    services::generator::Provider,
};

#[derive(Clone, Debug)]
pub struct Config {
    pub provider: Provider,
    pub claude_code_path: String,
    pub claude_code_max_turns: u32,
    pub generation_timeout_seconds: u64,
    pub openai_api_key: SecretString,
    pub openai_model: String,
    pub openai_base_url: String,
    pub quiz_settings: QuizSettings,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = QuizSettings::default();

        Self {
            provider: env::var("QUIZ_PROVIDER")
                .ok()
                .and_then(|p| match p.parse() {
                    Ok(provider) => Some(provider),
                    Err(e) => {
                        log::warn!("Ignoring QUIZ_PROVIDER: {}", e);
                        None
                    }
                })
                .unwrap_or(Provider::ClaudeCode),
            claude_code_path: env::var("CLAUDE_CODE_PATH")
                .map(|p| p.trim().to_string())
                .unwrap_or_else(|_| "claude".to_string()),
            claude_code_max_turns: parse_var("CLAUDE_CODE_MAX_TURNS").unwrap_or(2),
            generation_timeout_seconds: parse_var("GENERATION_TIMEOUT_SECONDS").unwrap_or(300),
            openai_api_key: SecretString::from(env::var("OPENAI_API_KEY").unwrap_or_default()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            quiz_settings: QuizSettings {
                language: env::var("QUIZ_LANGUAGE").unwrap_or(defaults.language),
                true_or_false: parse_var("QUIZ_TRUE_OR_FALSE_COUNT")
                    .unwrap_or(defaults.true_or_false),
                multiple_choice: parse_var("QUIZ_MULTIPLE_CHOICE_COUNT")
                    .unwrap_or(defaults.multiple_choice),
                select_all: parse_var("QUIZ_SELECT_ALL_COUNT").unwrap_or(defaults.select_all),
                matching: parse_var("QUIZ_MATCHING_COUNT").unwrap_or(defaults.matching),
                short_answer: parse_var("QUIZ_SHORT_ANSWER_COUNT")
                    .unwrap_or(defaults.short_answer),
                long_answer: parse_var("QUIZ_LONG_ANSWER_COUNT").unwrap_or(defaults.long_answer),
            },
        }
    }

    /// Checks the settings before any backend is contacted.
    pub fn validate(&self) -> AppResult<()> {
        self.quiz_settings.validate()?;

        if self.generation_timeout_seconds == 0 {
            return Err(AppError::ValidationError(
                "GENERATION_TIMEOUT_SECONDS must be greater than zero".to_string(),
            ));
        }

        match self.provider {
            Provider::ClaudeCode if self.claude_code_path.is_empty() => {
                Err(AppError::ValidationError(
                    "CLAUDE_CODE_PATH must not be empty".to_string(),
                ))
            }
            Provider::OpenAi if self.openai_api_key.expose_secret().is_empty() => {
                Err(AppError::ValidationError(
                    "OPENAI_API_KEY must be set to use the OpenAI provider".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            provider: Provider::ClaudeCode,
            claude_code_path: "claude".to_string(),
            claude_code_max_turns: 2,
            generation_timeout_seconds: 30,
            openai_api_key: SecretString::from("test_openai_key".to_string()),
            openai_model: "gpt-4o-mini".to_string(),
            openai_base_url: "http://localhost:9".to_string(),
            quiz_settings: QuizSettings::default(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
