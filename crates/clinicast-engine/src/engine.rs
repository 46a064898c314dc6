use std::sync::Arc;

use clinicast_core::error::CoreError;
use clinicast_core::models::accuracy::{AccuracySample, AccuracyStats};
use clinicast_core::models::forecast::ForecastResult;
use clinicast_core::models::parameters::{ParameterSource, SmoothingParameters};
use clinicast_core::models::reading::{self, Reading};
use clinicast_core::models::regression::{Prediction, RegressionModel};
use clinicast_core::models::score::{ClinicalScore, VitalsSnapshot};
use clinicast_core::models::signal::{SignalType, ValueRange};
use clinicast_core::models::trigger::{Trigger, TrendResult};
use clinicast_core::store_keys;
use clinicast_forecast::accuracy::AccuracyLedger;
use clinicast_forecast::features::{PainDataset, pain_dataset};
use clinicast_forecast::smoothing::ForecastOptions;
use clinicast_forecast::{optimizer, predict, regression, smoothing};
use clinicast_scoring::error::ScoringError;
use clinicast_scoring::standards::{mews::Mews, news2::News2};
use clinicast_scoring::{EarlyWarningStandard, get_standard};
use clinicast_store::KeyedStore;
use clinicast_store::memory::MemoryStore;
use clinicast_triggers::{detect, trend};
use jiff::Timestamp;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::error::EngineError;

/// The caches the engine reads and writes. Injected by the host, which
/// decides their lifetime, locking and persistence.
#[derive(Clone)]
pub struct EngineStores {
    pub models: Arc<dyn KeyedStore<RegressionModel>>,
    pub parameters: Arc<dyn KeyedStore<SmoothingParameters>>,
    pub accuracy: Arc<dyn KeyedStore<AccuracyLedger>>,
}

impl EngineStores {
    pub fn in_memory() -> Self {
        Self {
            models: Arc::new(MemoryStore::new()),
            parameters: Arc::new(MemoryStore::new()),
            accuracy: Arc::new(MemoryStore::new()),
        }
    }
}

/// What to project for one reading window.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub signal_type: SignalType,
    pub horizon: u32,
    pub step_interval_hours: f64,
    pub parameters: ParameterSource,
}

pub struct Engine {
    config: EngineConfig,
    stores: EngineStores,
}

impl Engine {
    pub fn new(config: EngineConfig, stores: EngineStores) -> Self {
        Self { config, stores }
    }

    pub fn in_memory(config: EngineConfig) -> Self {
        Self::new(config, EngineStores::in_memory())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // -- regression --------------------------------------------------------

    pub fn train_regression(
        &self,
        features: &[Vec<f64>],
        targets: &[f64],
        feature_names: &[String],
    ) -> Result<RegressionModel, EngineError> {
        let model = regression::train(features, targets, feature_names)?;
        if model.degenerate {
            warn!(rows = features.len(), "regression fit was singular, using mean-only model");
        }
        Ok(model)
    }

    pub fn predict(
        &self,
        model: &RegressionModel,
        features: &[f64],
        domain: ValueRange,
    ) -> Result<Prediction, EngineError> {
        Ok(predict::predict(model, features, domain)?)
    }

    /// Train on a subject's pain history and cache the model under the
    /// subject, replacing any earlier one.
    pub fn train_pain_model(
        &self,
        subject_id: Uuid,
        readings: &[Reading],
    ) -> Result<RegressionModel, EngineError> {
        let dataset = self.pain_history(subject_id, readings)?;
        if dataset.distinct_days < self.config.min_history_days {
            return Err(EngineError::InsufficientHistory {
                required: self.config.min_history_days,
                found: dataset.distinct_days,
            });
        }

        let model = self.train_regression(
            &dataset.features,
            &dataset.targets,
            &PainDataset::feature_names(),
        )?;
        self.stores
            .models
            .put(&store_keys::regression_model(subject_id), model.clone())?;

        info!(
            subject = %subject_id,
            days = dataset.distinct_days,
            r_squared = model.r_squared,
            degenerate = model.degenerate,
            "pain model trained"
        );
        Ok(model)
    }

    /// Predict the next day's pain from the cached model.
    pub fn predict_next_pain(
        &self,
        subject_id: Uuid,
        readings: &[Reading],
    ) -> Result<Prediction, EngineError> {
        let model = self
            .cached_model(subject_id)?
            .ok_or(EngineError::NoModel(subject_id))?;
        let dataset = self.pain_history(subject_id, readings)?;
        let next_day = dataset
            .next_day
            .ok_or(EngineError::InsufficientHistory {
                required: 1,
                found: 0,
            })?;

        self.predict(
            &model,
            &next_day,
            SignalType::PainIntensity.physiological_bounds(),
        )
    }

    pub fn cached_model(&self, subject_id: Uuid) -> Result<Option<RegressionModel>, EngineError> {
        Ok(self
            .stores
            .models
            .get(&store_keys::regression_model(subject_id))?)
    }

    fn pain_history(&self, subject_id: Uuid, readings: &[Reading]) -> Result<PainDataset, EngineError> {
        let ordered = reading::ordered_window(readings)?;
        if let Some(other) = ordered
            .iter()
            .find(|r| r.subject_id != subject_id || r.signal_type != SignalType::PainIntensity)
        {
            return Err(CoreError::MalformedReadings(format!(
                "expected pain readings for {subject_id}, got {}/{}",
                other.subject_id, other.signal_type
            ))
            .into());
        }
        Ok(pain_dataset(&ordered))
    }

    // -- smoothing ---------------------------------------------------------

    pub fn forecast(
        &self,
        readings: &[Reading],
        request: &ForecastRequest,
    ) -> Result<ForecastResult, EngineError> {
        let ordered = reading::ordered_window(readings)?;
        if let Some(other) = ordered.iter().find(|r| r.signal_type != request.signal_type) {
            return Err(CoreError::MalformedReadings(format!(
                "requested a {} forecast over {} readings",
                request.signal_type, other.signal_type
            ))
            .into());
        }

        let parameters = match request.parameters {
            ParameterSource::Defaults => None,
            ParameterSource::Explicit(params) => Some(params),
            ParameterSource::Cached => match ordered.first() {
                Some(first) => self.cached_parameters(first.subject_id, request.signal_type)?,
                None => None,
            },
        };

        let options = ForecastOptions {
            signal_type: request.signal_type,
            horizon: request.horizon,
            step_interval_hours: request.step_interval_hours,
            origin: ordered.last().map_or(Timestamp::UNIX_EPOCH, |r| r.timestamp),
            confidence_level: self.config.confidence_level,
            parameters,
        };

        let result = smoothing::forecast(&reading::values(&ordered), &options)?;
        debug!(
            signal = %request.signal_type,
            method = ?result.method,
            points = result.forecast_points.len(),
            "forecast computed"
        );
        Ok(result)
    }

    /// Grid-search smoothing constants over the most recent values.
    /// Pure: nothing is cached.
    pub fn optimize_parameters(&self, values: &[f64]) -> SmoothingParameters {
        let recent = &values[values.len().saturating_sub(self.config.max_optimizer_history)..];
        optimizer::optimize(recent).parameters
    }

    /// Optimize over a subject's window and cache the result for later
    /// `ParameterSource::Cached` forecasts, replacing any earlier value.
    pub fn optimize_for_subject(&self, readings: &[Reading]) -> Result<SmoothingParameters, EngineError> {
        let ordered = reading::ordered_window(readings)?;
        let Some(first) = ordered.first() else {
            return Ok(SmoothingParameters::DEFAULT);
        };

        let parameters = self.optimize_parameters(&reading::values(&ordered));
        self.stores.parameters.put(
            &store_keys::smoothing_parameters(first.subject_id, first.signal_type),
            parameters,
        )?;

        info!(
            subject = %first.subject_id,
            signal = %first.signal_type,
            alpha = parameters.alpha,
            beta = parameters.beta,
            "smoothing parameters cached"
        );
        Ok(parameters)
    }

    pub fn cached_parameters(
        &self,
        subject_id: Uuid,
        signal: SignalType,
    ) -> Result<Option<SmoothingParameters>, EngineError> {
        Ok(self
            .stores
            .parameters
            .get(&store_keys::smoothing_parameters(subject_id, signal))?)
    }

    // -- scoring -----------------------------------------------------------

    pub fn score_news2(&self, vitals: &VitalsSnapshot) -> ClinicalScore {
        News2.score(vitals)
    }

    pub fn score_mews(&self, vitals: &VitalsSnapshot) -> ClinicalScore {
        Mews.score(vitals)
    }

    /// Score with a standard looked up by id.
    pub fn score(&self, standard_id: &str, vitals: &VitalsSnapshot) -> Result<ClinicalScore, EngineError> {
        let standard = get_standard(standard_id)
            .ok_or_else(|| ScoringError::UnknownStandard(standard_id.to_string()))?;
        Ok(standard.score(vitals))
    }

    // -- triggers ----------------------------------------------------------

    pub fn detect_triggers(&self, readings: &[Reading]) -> Result<Vec<Trigger>, EngineError> {
        let triggers = detect::detect_triggers(readings, &self.config.threshold_overrides)?;
        for trigger in &triggers {
            info!(
                signal = %trigger.signal_type,
                kind = ?trigger.kind,
                severity = ?trigger.severity,
                value = trigger.current_value,
                "trigger raised"
            );
        }
        Ok(triggers)
    }

    pub fn classify_trend(&self, readings: &[Reading]) -> Result<TrendResult, EngineError> {
        Ok(trend::classify_trend(readings)?)
    }

    // -- accuracy ----------------------------------------------------------

    pub fn record_accuracy(
        &self,
        key: &str,
        predicted: f64,
        actual: f64,
        method: &str,
    ) -> Result<(), EngineError> {
        let capacity = self.config.accuracy_capacity;
        let sample = AccuracySample {
            predicted,
            actual,
            method: method.to_string(),
        };

        let mut pending = Some(sample);
        self.stores
            .accuracy
            .update(&store_keys::accuracy(key, method), &mut |ledger: Option<AccuracyLedger>| {
                let mut ledger = ledger.unwrap_or_else(|| AccuracyLedger::new(capacity));
                // The config may have changed since the ledger was created.
                ledger.set_capacity(capacity);
                if let Some(sample) = pending.take() {
                    ledger.push(sample);
                }
                ledger
            })?;
        Ok(())
    }

    pub fn accuracy(&self, key: &str, method: &str) -> Result<AccuracyStats, EngineError> {
        Ok(self
            .stores
            .accuracy
            .get(&store_keys::accuracy(key, method))?
            .map(|ledger| ledger.stats())
            .unwrap_or_default())
    }
}
