use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Unresolvable map reference: {0}")]
    UnresolvableReference(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
