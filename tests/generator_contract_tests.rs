use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::{json, Value};

use quizgen::{
    config::Config,
    errors::{AppError, AppResult},
    models::settings::QuizSettings,
    services::{
        claude_code_generator::{ClaudeCodeGenerator, NON_INTERACTIVE_ENV},
        generator::{build_generator, Provider, QuizGenerator},
        process_invoker::{CommandRunner, Invocation, ProcessOutput},
    },
};

/// Replays a canned result and records every invocation it receives.
struct RecordingRunner {
    response: Box<dyn Fn() -> AppResult<ProcessOutput> + Send + Sync>,
    calls: Arc<Mutex<Vec<Invocation>>>,
}

impl RecordingRunner {
    fn new(response: impl Fn() -> AppResult<ProcessOutput> + Send + Sync + 'static) -> Self {
        Self {
            response: Box::new(response),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn stdout(stdout: &'static str) -> Self {
        Self::new(move || {
            Ok(ProcessOutput {
                stdout: stdout.to_string(),
                stderr: String::new(),
            })
        })
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, invocation: Invocation) -> AppResult<ProcessOutput> {
        self.calls.lock().unwrap().push(invocation);
        (self.response)()
    }
}

fn config() -> Config {
    Config {
        provider: Provider::ClaudeCode,
        claude_code_path: "/opt/bin/claude".to_string(),
        claude_code_max_turns: 3,
        generation_timeout_seconds: 10,
        openai_api_key: SecretString::from(String::new()),
        openai_model: "gpt-4o-mini".to_string(),
        openai_base_url: "http://localhost:9".to_string(),
        quiz_settings: QuizSettings {
            language: "German".to_string(),
            matching: 2,
            ..QuizSettings::default()
        },
    }
}

#[tokio::test]
async fn test_generate_quiz_spawns_one_process_per_call() {
    let runner = Arc::new(RecordingRunner::stdout(
        r#"{"questions":[{"question":"q","answer":"false"}]}"#,
    ));
    let calls = runner.calls.clone();
    let generator = ClaudeCodeGenerator::new(&config(), runner);
    let contents = vec!["Photosynthesis converts light.".to_string()];

    generator.generate_quiz(&contents).await.unwrap();
    generator.generate_quiz(&contents).await.unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 2);

    let invocation = &calls[0];
    assert_eq!(invocation.program, "/opt/bin/claude");
    assert_eq!(invocation.args.last().map(String::as_str), Some("3"));
    assert!(invocation.args.iter().any(|a| a.contains("written in German")));
    assert!(invocation
        .stdin
        .contains("Generate 1 true or false question, 1 multiple choice question, 1 select all that apply question and 2 matching questions"));
    assert!(invocation.stdin.ends_with("Photosynthesis converts light."));
    assert!(invocation
        .env
        .contains(&(NON_INTERACTIVE_ENV.to_string(), "true".to_string())));
}

#[tokio::test]
async fn test_non_zero_exit_skips_parsing() {
    let runner = Arc::new(RecordingRunner::new(|| {
        Err(AppError::NonZeroExit {
            code: 1,
            stderr: "auth error".to_string(),
        })
    }));
    let generator = ClaudeCodeGenerator::new(&config(), runner);

    let err = generator
        .generate_quiz(&["text".to_string()])
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NonZeroExit { code: 1, .. }));
    let message = err.to_string();
    assert!(message.contains("code 1"));
    assert!(message.contains("auth error"));
}

#[tokio::test]
async fn test_result_is_backend_agnostic_json() {
    let runner = Arc::new(RecordingRunner::stdout(
        "Sure!\n{\"result\":\"{\\\"questions\\\":[{\\\"question\\\":\\\"Pick\\\",\\\"options\\\":[\\\"a\\\",\\\"b\\\",\\\"c\\\"],\\\"answer\\\":[\\\"a\\\",\\\"c\\\"]}]}\"}\n",
    ));
    let generator: Arc<dyn QuizGenerator> = Arc::new(ClaudeCodeGenerator::new(&config(), runner));

    let quiz = generator.generate_quiz(&["text".to_string()]).await.unwrap();

    assert_eq!(
        serde_json::from_str::<Value>(&quiz).unwrap(),
        json!({"questions": [{"question": "Pick", "options": ["a", "b", "c"], "answer": [0, 2]}]})
    );
}

#[tokio::test]
async fn test_empty_quiz_is_a_failure() {
    let runner = Arc::new(RecordingRunner::stdout(r#"{"questions":[]}"#));
    let generator = ClaudeCodeGenerator::new(&config(), runner);

    let err = generator
        .generate_quiz(&["text".to_string()])
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ValidationError(_)));
}

#[tokio::test]
async fn test_similarity_is_unsupported_for_subprocess_backend() {
    let generator = build_generator(&config()).unwrap();

    let err = generator
        .short_or_long_answer_similarity("mitochondria", "the mitochondria")
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "UNSUPPORTED_OPERATION");
}

#[test]
fn test_unintegrated_provider_is_rejected_at_selection() {
    let config = Config {
        provider: Provider::Ollama,
        ..config()
    };

    assert!(matches!(
        build_generator(&config),
        Err(AppError::UnsupportedOperation(_))
    ));
}
