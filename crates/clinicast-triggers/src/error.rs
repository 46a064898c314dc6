use clinicast_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriggerError {
    #[error(transparent)]
    Core(#[from] CoreError),
}
