use thiserror::Error;

/// Errors raised outside the in-memory collaborators: loading configuration,
/// reading and writing files.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TallyError>;
