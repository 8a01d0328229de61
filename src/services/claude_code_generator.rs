use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::Config,
    constants::prompts::CLI_INSTRUCTION,
    errors::{AppError, AppResult},
    models::settings::QuizSettings,
    services::{
        generator::{canonical_quiz_from_text, QuizGenerator},
        output_sanitizer::sanitize,
        process_invoker::{CommandRunner, Invocation},
        prompt_builder::{build_instructions, build_system_prompt},
    },
};

pub const NON_INTERACTIVE_ENV: &str = "CLAUDE_CODE_NON_INTERACTIVE";

/// Generates quizzes by running the Claude Code CLI as a subprocess.
pub struct ClaudeCodeGenerator {
    program: String,
    max_turns: u32,
    settings: QuizSettings,
    runner: Arc<dyn CommandRunner>,
}

impl ClaudeCodeGenerator {
    pub fn new(config: &Config, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            program: config.claude_code_path.clone(),
            max_turns: config.claude_code_max_turns,
            settings: config.quiz_settings.clone(),
            runner,
        }
    }

    /// Only fixed flags go on the command line; the instructions travel over stdin.
    pub fn invocation(&self, contents: &[String]) -> Invocation {
        Invocation::new(&self.program)
            .arg("-p")
            .arg(CLI_INSTRUCTION)
            .arg("--output-format")
            .arg("json")
            .arg("--system-prompt")
            .arg(build_system_prompt(&self.settings))
            .arg("--max-turns")
            .arg(self.max_turns.to_string())
            .env(NON_INTERACTIVE_ENV, "true")
            .stdin(build_instructions(contents, &self.settings))
    }
}

#[async_trait]
impl QuizGenerator for ClaudeCodeGenerator {
    async fn generate_quiz(&self, contents: &[String]) -> AppResult<String> {
        let output = self
            .runner
            .run(self.invocation(contents))
            .await
            .inspect_err(|e| log::warn!("Claude Code CLI failed: {}", e))?;

        log::debug!("Claude Code stdout: {}", output.stdout);
        log::debug!("Claude Code stderr: {}", output.stderr);

        canonical_quiz_from_text(&sanitize(&output.stdout))
            .inspect_err(|e| log::warn!("Could not read quiz from Claude Code output: {}", e))
    }

    async fn short_or_long_answer_similarity(
        &self,
        _user_answer: &str,
        _answer: &str,
    ) -> AppResult<f64> {
        Err(AppError::UnsupportedOperation(
            "Claude Code CLI does not support grading short and long answer questions yet"
                .to_string(),
        ))
    }
}
