use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, ValueHint};
use quizgen::{
    config::Config,
    errors::AppResult,
    services::generator::{build_generator, Provider},
};

#[derive(Parser, Debug)]
#[command(
    name = "quizgen",
    version,
    about = "Generate a quiz from source documents",
    long_about = None,
    arg_required_else_help = true
)]
struct Cli {
    /// Source documents the quiz is generated from.
    #[arg(value_name = "PATHS", required = true, value_hint = ValueHint::FilePath)]
    paths: Vec<PathBuf>,

    /// Backend to use instead of QUIZ_PROVIDER, e.g. claude_code or openai.
    #[arg(short, long, value_name = "PROVIDER")]
    provider: Option<Provider>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(quiz) => {
            println!("{}", quiz);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("[{}] {}", e.error_code(), e);
            eprintln!("quizgen: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<String> {
    let mut config = Config::from_env();
    if let Some(provider) = cli.provider {
        config.provider = provider;
    }
    config.validate()?;

    let mut contents = Vec::with_capacity(cli.paths.len());
    for path in &cli.paths {
        contents.push(tokio::fs::read_to_string(path).await?);
    }

    log::info!(
        "Generating quiz from {} source(s) with {}",
        contents.len(),
        config.provider
    );
    let generator = build_generator(&config)?;
    generator.generate_quiz(&contents).await
}
