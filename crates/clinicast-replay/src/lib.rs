//! clinicast-replay
//!
//! Runs a recorded batch of readings and bedside snapshots through the
//! engine and collects one report. The binary wraps this with env-driven
//! setup and JSON output.

pub mod report;

use std::collections::BTreeMap;

use clinicast_core::models::accuracy::AccuracyStats;
use clinicast_core::models::parameters::ParameterSource;
use clinicast_core::models::reading::{self, Reading};
use clinicast_core::models::signal::SignalType;
use clinicast_core::store_keys;
use clinicast_engine::engine::{Engine, ForecastRequest};
use clinicast_engine::error::EngineError;
use uuid::Uuid;

use report::{
    PainReport, ReplayInput, ReplayReport, SeriesReport, SkippedSeries, VitalsReport,
};

/// Replay every (subject, signal) series and score every snapshot. A
/// series the engine rejects is logged and listed under `skipped`; it
/// does not stop the rest of the run.
pub fn replay(
    engine: &Engine,
    input: ReplayInput,
    horizon: u32,
    step_interval_hours: f64,
) -> ReplayReport {
    let mut series = Vec::new();
    let mut skipped = Vec::new();
    for ((subject_id, signal_type), readings) in group(input.readings) {
        match replay_series(
            engine,
            subject_id,
            signal_type,
            &readings,
            horizon,
            step_interval_hours,
        ) {
            Ok(report) => series.push(report),
            Err(e) => {
                tracing::warn!(
                    subject = %subject_id,
                    signal = %signal_type,
                    error = %e,
                    "series skipped"
                );
                skipped.push(SkippedSeries {
                    subject_id,
                    signal_type,
                    reason: e.to_string(),
                });
            }
        }
    }

    let vitals = input
        .vitals
        .iter()
        .map(|v| VitalsReport {
            subject_id: v.subject_id,
            news2: engine.score_news2(&v.snapshot),
            mews: engine.score_mews(&v.snapshot),
        })
        .collect();

    ReplayReport {
        series,
        skipped,
        vitals,
    }
}

fn group(readings: Vec<Reading>) -> BTreeMap<(Uuid, SignalType), Vec<Reading>> {
    let mut groups: BTreeMap<(Uuid, SignalType), Vec<Reading>> = BTreeMap::new();
    for reading in readings {
        groups
            .entry((reading.subject_id, reading.signal_type))
            .or_default()
            .push(reading);
    }
    groups
}

fn replay_series(
    engine: &Engine,
    subject_id: Uuid,
    signal_type: SignalType,
    readings: &[Reading],
    horizon: u32,
    step_interval_hours: f64,
) -> Result<SeriesReport, EngineError> {
    let ordered = reading::ordered_window(readings)?;
    let request = ForecastRequest {
        signal_type,
        horizon,
        step_interval_hours,
        parameters: ParameterSource::Cached,
    };

    let holdout = holdout_accuracy(engine, &ordered, &request)?;
    let parameters = engine.optimize_for_subject(&ordered)?;
    let forecast = engine.forecast(&ordered, &request)?;
    let trend = engine.classify_trend(&ordered)?;
    let triggers = engine.detect_triggers(&ordered)?;
    let pain = (signal_type == SignalType::PainIntensity)
        .then(|| replay_pain(engine, subject_id, &ordered))
        .transpose()?;

    Ok(SeriesReport {
        subject_id,
        signal_type,
        reading_count: ordered.len(),
        parameters,
        forecast,
        trend,
        triggers,
        holdout,
        pain,
    })
}

/// Forecast the final reading from the ones before it and record the miss.
fn holdout_accuracy(
    engine: &Engine,
    ordered: &[Reading],
    request: &ForecastRequest,
) -> Result<Option<AccuracyStats>, EngineError> {
    let Some((last, earlier)) = ordered.split_last() else {
        return Ok(None);
    };
    if earlier.is_empty() {
        return Ok(None);
    }

    let result = engine.forecast(
        earlier,
        &ForecastRequest {
            horizon: 1,
            parameters: ParameterSource::Defaults,
            ..request.clone()
        },
    )?;
    let Some(point) = result.forecast_points.first() else {
        return Ok(None);
    };

    let key = store_keys::subject_signal(last.subject_id, last.signal_type);
    let method = result.method.as_str();
    engine.record_accuracy(&key, point.value, last.value, method)?;
    Ok(Some(engine.accuracy(&key, method)?))
}

fn replay_pain(
    engine: &Engine,
    subject_id: Uuid,
    readings: &[Reading],
) -> Result<PainReport, EngineError> {
    match engine.train_pain_model(subject_id, readings) {
        Ok(model) => {
            let next_day = engine.predict_next_pain(subject_id, readings)?;
            Ok(PainReport::Trained { model, next_day })
        }
        Err(err @ EngineError::InsufficientHistory { .. }) => {
            tracing::warn!(subject = %subject_id, error = %err, "pain model skipped");
            Ok(PainReport::Skipped {
                reason: err.to_string(),
            })
        }
        Err(err) => Err(err),
    }
}
