use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
}
