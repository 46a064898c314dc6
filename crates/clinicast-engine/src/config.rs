use std::path::Path;

use clinicast_core::models::forecast::ConfidenceLevel;
use clinicast_triggers::thresholds::ThresholdTable;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const DEFAULT_ACCURACY_CAPACITY: usize = 100;
const DEFAULT_MIN_HISTORY_DAYS: usize = 7;
const DEFAULT_MAX_OPTIMIZER_HISTORY: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Schema version. Missing means the current version.
    #[serde(default = "current_version")]
    pub config_version: u32,
    /// Coverage of forecast bands.
    #[serde(default)]
    pub confidence_level: ConfidenceLevel,
    /// Samples kept per (key, method) by the accuracy tracker.
    #[serde(default = "default_accuracy_capacity")]
    pub accuracy_capacity: usize,
    /// Distinct days of pain history required before regression training.
    #[serde(default = "default_min_history_days")]
    pub min_history_days: usize,
    /// Most recent values fed to the parameter search.
    #[serde(default = "default_max_optimizer_history")]
    pub max_optimizer_history: usize,
    #[serde(default)]
    pub threshold_overrides: ThresholdTable,
}

fn current_version() -> u32 {
    CURRENT_VERSION
}

fn default_accuracy_capacity() -> usize {
    DEFAULT_ACCURACY_CAPACITY
}

fn default_min_history_days() -> usize {
    DEFAULT_MIN_HISTORY_DAYS
}

fn default_max_optimizer_history() -> usize {
    DEFAULT_MAX_OPTIMIZER_HISTORY
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            confidence_level: ConfidenceLevel::default(),
            accuracy_capacity: DEFAULT_ACCURACY_CAPACITY,
            min_history_days: DEFAULT_MIN_HISTORY_DAYS,
            max_optimizer_history: DEFAULT_MAX_OPTIMIZER_HISTORY,
            threshold_overrides: ThresholdTable::default(),
        }
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError + '_ {
    move |source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    }
}

pub fn load_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(io_error(path))?;
    parse_config(&contents)
}

/// Parse a config document, migrating older shapes first.
pub fn parse_config(contents: &str) -> Result<EngineConfig, ConfigError> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .map_or(CURRENT_VERSION, |v| v as u32);

    let migrated = migrate(json, on_disk_version)?;
    Ok(serde_json::from_value(migrated)?)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
fn migrate(json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, ConfigError> {
    if from_version > CURRENT_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    if !json.is_object() {
        return Err(ConfigError::NotAnObject);
    }

    // v1 is the first shipped shape; later versions add their steps here,
    // each guarded by `if from_version < N`.

    Ok(json)
}

pub fn save_config(path: &Path, config: &EngineConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(io_error(dir))?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes()).map_err(io_error(&tmp_path))?;
    std::fs::rename(&tmp_path, path).map_err(io_error(path))?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
