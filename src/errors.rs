use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrieflyError {
    #[error("Input text is empty.")]
    EmptyInput,

    #[error("Summarization model unavailable: {0}")]
    CapabilityUnavailable(String),

    #[error("Summarization failed: {0}")]
    SummarizationFailed(String),

    /// Carries a ready-to-print usage message.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Invalid summarization config: {0}")]
    InvalidConfig(String),

    #[error("File I/O error: {0}")]
    FileIo(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for BrieflyError {
    fn from(error: reqwest::Error) -> Self {
        BrieflyError::SummarizationFailed(error.to_string())
    }
}

impl From<serde_json::Error> for BrieflyError {
    fn from(error: serde_json::Error) -> Self {
        BrieflyError::SummarizationFailed(format!("Malformed inference response: {}", error))
    }
}

impl From<std::io::Error> for BrieflyError {
    fn from(error: std::io::Error) -> Self {
        BrieflyError::FileIo(error.to_string())
    }
}
