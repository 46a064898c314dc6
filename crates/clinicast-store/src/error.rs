use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),

    #[error("store backend error: {0}")]
    Backend(String),
}
