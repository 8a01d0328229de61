use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to start backend '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Backend exited with code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },

    #[error("Backend did not finish within {0:?}")]
    Timeout(std::time::Duration),

    #[error("No JSON found in backend output. Check the debug log for the captured stdout/stderr")]
    NoJsonFound,

    #[error("Failed to parse backend output as JSON: {0}")]
    MalformedJson(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::SpawnFailed { .. } => "SPAWN_FAILED",
            AppError::NonZeroExit { .. } => "NON_ZERO_EXIT",
            AppError::Timeout(_) => "TIMEOUT",
            AppError::NoJsonFound => "NO_JSON_FOUND",
            AppError::MalformedJson(_) => "MALFORMED_JSON",
            AppError::UnsupportedOperation(_) => "UNSUPPORTED_OPERATION",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::ProviderError(_) => "PROVIDER_ERROR",
            AppError::Io(_) => "IO_ERROR",
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedJson(err.to_string())
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::ProviderError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
