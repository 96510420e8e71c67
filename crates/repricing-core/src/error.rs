use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("summary shape mismatch: {0}")]
    Shape(String),

    #[error("missing column: {0}")]
    MissingColumn(String),

    #[error("invalid chart image: {0}")]
    InvalidImage(String),

    #[error("statistics engine failed: {0}")]
    Statistics(String),
}
