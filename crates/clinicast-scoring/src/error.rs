use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown scoring standard: {0}")]
    UnknownStandard(String),
}
