use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("element count mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
