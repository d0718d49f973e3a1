use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostinstallError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid platform table: {0}")]
    Table(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PostinstallError>;
