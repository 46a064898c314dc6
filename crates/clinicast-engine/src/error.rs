use clinicast_core::error::CoreError;
use clinicast_forecast::error::ForecastError;
use clinicast_scoring::error::ScoringError;
use clinicast_store::error::StoreError;
use clinicast_triggers::error::TriggerError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("insufficient history: {found} distinct days, at least {required} required")]
    InsufficientHistory { required: usize, found: usize },

    #[error("no trained model for subject {0}")]
    NoModel(Uuid),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Trigger(#[from] TriggerError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("config is not a JSON object")]
    NotAnObject,
}
