use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::{json, Value};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::settings::QuizSettings,
    services::{
        generator::{canonical_quiz_from_text, QuizGenerator},
        output_sanitizer::sanitize,
        prompt_builder::{build_instructions, build_system_prompt},
    },
};

/// Hosted chat-completions integration. Same contract as the subprocess generator.
pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    settings: QuizSettings,
}

impl OpenAiGenerator {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.openai_api_key.expose_secret())
            .with_api_base(config.openai_base_url.as_str());

        Self {
            client: Client::with_config(openai_config),
            model: config.openai_model.clone(),
            settings: config.quiz_settings.clone(),
        }
    }

    fn request_body(&self, contents: &[String]) -> Value {
        json!({
            "model": self.model,
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "system", "content": build_system_prompt(&self.settings) },
                { "role": "user", "content": build_instructions(contents, &self.settings) }
            ]
        })
    }
}

#[async_trait]
impl QuizGenerator for OpenAiGenerator {
    async fn generate_quiz(&self, contents: &[String]) -> AppResult<String> {
        let response: Value = self
            .client
            .chat()
            .create_byot(self.request_body(contents))
            .await?;

        let content = response["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                AppError::ProviderError(format!("Invalid response from model:\n{response}"))
            })?;
        log::debug!("OpenAI content: {}", content);

        canonical_quiz_from_text(&sanitize(content))
    }

    async fn short_or_long_answer_similarity(
        &self,
        _user_answer: &str,
        _answer: &str,
    ) -> AppResult<f64> {
        Err(AppError::UnsupportedOperation(
            "Answer similarity scoring is not available for OpenAI in this build".to_string(),
        ))
    }
}
