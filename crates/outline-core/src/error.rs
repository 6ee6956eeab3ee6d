use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutlineError {
    #[error("Invalid section path: {0:?}")]
    InvalidPath(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, OutlineError>;
