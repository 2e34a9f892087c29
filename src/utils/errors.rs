use thiserror::Error;

/// Failure raised by a speechlet back to its host
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpeechletError {
    /// The intent is missing or its name is not one this skill handles
    #[error("Invalid Intent: {}", name.as_deref().unwrap_or("<none>"))]
    UnrecognizedIntent { name: Option<String> },
}

/// Main error type for the skill host
#[derive(Error, Debug)]
pub enum SkillError {
    #[error("Speechlet error: {0}")]
    Speechlet(#[from] SpeechletError),

    #[error("Malformed request envelope: {0}")]
    Envelope(#[from] serde_json::Error),

    #[error("Application id {} is not supported by this skill", .0.as_deref().unwrap_or("<none>"))]
    UnsupportedApplication(Option<String>),

    #[error("Script error on line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
