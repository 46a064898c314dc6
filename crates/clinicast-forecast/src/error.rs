use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LinalgError {
    #[error("matrix is singular")]
    Singular,

    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
}

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("step interval must be a positive number of hours, got {0}")]
    InvalidInterval(f64),

    #[error("linear algebra error: {0}")]
    Linalg(#[from] LinalgError),

    #[error("timestamp arithmetic failed: {0}")]
    Timestamp(#[from] jiff::Error),
}
