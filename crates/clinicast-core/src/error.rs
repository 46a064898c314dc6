use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown signal type: {0}")]
    UnknownSignal(String),

    #[error("malformed reading window: {0}")]
    MalformedReadings(String),
}
