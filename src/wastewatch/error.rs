use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("No report found for {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Validation(String),

    #[error("Could not find a free report id after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
