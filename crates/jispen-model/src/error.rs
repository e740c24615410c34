use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid calendar date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
