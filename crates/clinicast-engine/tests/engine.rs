use std::sync::Arc;

use clinicast_core::models::forecast::ForecastMethod;
use clinicast_core::models::parameters::{ParameterSource, SmoothingParameters};
use clinicast_core::models::reading::Reading;
use clinicast_core::models::score::{Consciousness, RiskTier, Spo2Scale, VitalsSnapshot};
use clinicast_core::models::signal::SignalType;
use clinicast_core::models::trigger::TriggerKind;
use clinicast_engine::config::EngineConfig;
use clinicast_engine::engine::{Engine, EngineStores, ForecastRequest};
use clinicast_engine::error::EngineError;
use clinicast_store::KeyedStore;
use clinicast_store::error::StoreError;
use jiff::Timestamp;
use uuid::Uuid;

const BASE: i64 = 1_767_571_200;

fn series(subject_id: Uuid, signal_type: SignalType, values: &[f64], step_secs: i64) -> Vec<Reading> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| Reading {
            subject_id,
            signal_type,
            value,
            timestamp: Timestamp::from_second(BASE + i as i64 * step_secs).unwrap(),
        })
        .collect()
}

fn request(signal_type: SignalType, parameters: ParameterSource) -> ForecastRequest {
    ForecastRequest {
        signal_type,
        horizon: 4,
        step_interval_hours: 1.0,
        parameters,
    }
}

fn noisy_heart_rate() -> Vec<f64> {
    (0..30)
        .map(|i| 72.0 + 0.4 * i as f64 + ((i * 7) % 5) as f64)
        .collect()
}

#[test]
fn cached_parameters_are_used_only_when_asked() {
    let engine = Engine::in_memory(EngineConfig::default());
    let id = Uuid::new_v4();
    let readings = series(id, SignalType::HeartRate, &noisy_heart_rate(), 3600);

    let optimized = engine.optimize_for_subject(&readings).unwrap();
    assert_eq!(
        engine.cached_parameters(id, SignalType::HeartRate).unwrap(),
        Some(optimized)
    );

    let cached = engine
        .forecast(&readings, &request(SignalType::HeartRate, ParameterSource::Cached))
        .unwrap();
    assert_eq!(cached.parameters, optimized);

    let defaults = engine
        .forecast(&readings, &request(SignalType::HeartRate, ParameterSource::Defaults))
        .unwrap();
    assert_eq!(defaults.parameters, SmoothingParameters::DEFAULT);
    assert_eq!(defaults.method, ForecastMethod::DoubleExponential);
}

#[test]
fn forecast_is_idempotent() {
    let engine = Engine::in_memory(EngineConfig::default());
    let readings = series(Uuid::new_v4(), SignalType::HeartRate, &noisy_heart_rate(), 3600);
    let req = request(SignalType::HeartRate, ParameterSource::Cached);
    assert_eq!(
        engine.forecast(&readings, &req).unwrap(),
        engine.forecast(&readings, &req).unwrap()
    );
}

#[test]
fn forecast_rejects_signal_mismatch() {
    let engine = Engine::in_memory(EngineConfig::default());
    let readings = series(Uuid::new_v4(), SignalType::Temperature, &[37.0, 37.2], 3600);
    assert!(matches!(
        engine.forecast(&readings, &request(SignalType::HeartRate, ParameterSource::Defaults)),
        Err(EngineError::Core(_))
    ));
}

#[test]
fn forecast_starts_after_latest_reading() {
    let engine = Engine::in_memory(EngineConfig::default());
    let mut readings = series(Uuid::new_v4(), SignalType::Temperature, &[37.0, 37.2, 37.4], 3600);
    readings.reverse();

    let result = engine
        .forecast(&readings, &request(SignalType::Temperature, ParameterSource::Defaults))
        .unwrap();
    let latest = Timestamp::from_second(BASE + 2 * 3600).unwrap();
    assert!(result.forecast_points.iter().all(|p| p.timestamp > latest));
}

#[test]
fn pain_model_needs_seven_days() {
    let engine = Engine::in_memory(EngineConfig::default());
    let id = Uuid::new_v4();
    let readings = series(id, SignalType::PainIntensity, &[6.0, 5.0, 5.5, 4.0, 4.5], 86_400);

    assert!(matches!(
        engine.train_pain_model(id, &readings),
        Err(EngineError::InsufficientHistory { required: 7, found: 5 })
    ));
    assert!(matches!(
        engine.predict_next_pain(id, &readings),
        Err(EngineError::NoModel(_))
    ));
}

#[test]
fn pain_model_is_cached_and_predicts_within_scale() {
    let engine = Engine::in_memory(EngineConfig::default());
    let id = Uuid::new_v4();
    let pain = [7.0, 6.5, 6.0, 6.5, 5.0, 5.5, 4.0, 4.5, 3.5, 4.0, 3.0, 3.5, 2.5, 3.0];
    let readings = series(id, SignalType::PainIntensity, &pain, 86_400);

    let model = engine.train_pain_model(id, &readings).unwrap();
    assert_eq!(model.feature_names.len(), 3);
    assert_eq!(engine.cached_model(id).unwrap(), Some(model));

    let prediction = engine.predict_next_pain(id, &readings).unwrap();
    assert!(prediction.lower <= prediction.value && prediction.value <= prediction.upper);
    assert!((0.0..=10.0).contains(&prediction.lower));
    assert!((0.0..=10.0).contains(&prediction.upper));
}

#[test]
fn pain_training_rejects_other_subjects() {
    let engine = Engine::in_memory(EngineConfig::default());
    let readings = series(Uuid::new_v4(), SignalType::PainIntensity, &[5.0; 8], 86_400);
    assert!(engine.train_pain_model(Uuid::new_v4(), &readings).is_err());
}

#[test]
fn accuracy_is_tracked_per_key_and_method() {
    let engine = Engine::in_memory(EngineConfig::default());
    for (p, a) in [(10.0, 12.0), (8.0, 8.0), (15.0, 10.0)] {
        engine.record_accuracy("subject-1/pain", p, a, "regression").unwrap();
    }
    engine.record_accuracy("subject-1/pain", 1.0, 9.0, "holt").unwrap();

    let stats = engine.accuracy("subject-1/pain", "regression").unwrap();
    assert_eq!(stats.sample_count, 3);
    assert!((stats.mae - 7.0 / 3.0).abs() < 1e-9);

    assert_eq!(engine.accuracy("subject-1/pain", "holt").unwrap().sample_count, 1);
    assert_eq!(engine.accuracy("unknown", "holt").unwrap().sample_count, 0);
}

#[test]
fn accuracy_ring_respects_configured_capacity() {
    let engine = Engine::in_memory(EngineConfig {
        accuracy_capacity: 5,
        ..EngineConfig::default()
    });
    for i in 0..12 {
        engine.record_accuracy("k", i as f64, i as f64, "m").unwrap();
    }
    assert_eq!(engine.accuracy("k", "m").unwrap().sample_count, 5);
}

#[test]
fn scoring_by_id_and_directly_agree() {
    let engine = Engine::in_memory(EngineConfig::default());
    let vitals = VitalsSnapshot {
        respiratory_rate: 26.0,
        oxygen_saturation: 90.0,
        spo2_scale: Spo2Scale::Scale1,
        on_supplemental_oxygen: true,
        systolic_bp: 88.0,
        heart_rate: 135.0,
        temperature: 39.5,
        consciousness: Consciousness::Voice,
    };

    let news2 = engine.score_news2(&vitals);
    assert_eq!(news2, engine.score("news2", &vitals).unwrap());
    assert_eq!(news2.risk_tier, RiskTier::High);

    let mews = engine.score_mews(&vitals);
    assert_eq!(mews, engine.score("mews", &vitals).unwrap());
    assert_eq!(mews.risk_tier, RiskTier::Critical);

    assert!(matches!(
        engine.score("qsofa", &vitals),
        Err(EngineError::Scoring(_))
    ));
}

#[test]
fn triggers_use_configured_thresholds() {
    let engine = Engine::in_memory(EngineConfig::default());
    let readings = series(Uuid::new_v4(), SignalType::HeartRate, &[80.0, 115.0], 45 * 60);

    let kinds: Vec<TriggerKind> = engine
        .detect_triggers(&readings)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(kinds, vec![TriggerKind::ThresholdBreach, TriggerKind::RapidChange]);

    let trend = engine.classify_trend(&readings).unwrap();
    assert_eq!(trend.sample_count, 2);
}

#[test]
fn optimizer_history_is_capped() {
    let engine = Engine::in_memory(EngineConfig {
        max_optimizer_history: 9,
        ..EngineConfig::default()
    });
    // Only nine values reach the search, which is too few to run it.
    assert_eq!(
        engine.optimize_parameters(&noisy_heart_rate()),
        SmoothingParameters::DEFAULT
    );
}

/// Reads find nothing and every write fails, like a backend that is down.
struct UnavailableStore;

impl<V: Clone + Send + Sync> KeyedStore<V> for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<V>, StoreError> {
        Ok(None)
    }

    fn put(&self, key: &str, _value: V) -> Result<(), StoreError> {
        Err(StoreError::Backend(format!("cannot write {key}")))
    }

    fn remove(&self, _key: &str) -> Result<Option<V>, StoreError> {
        Ok(None)
    }
}

#[test]
fn store_failures_surface_as_engine_errors() {
    let stores = EngineStores {
        accuracy: Arc::new(UnavailableStore),
        ..EngineStores::in_memory()
    };
    let engine = Engine::new(EngineConfig::default(), stores);

    assert!(matches!(
        engine.record_accuracy("k", 1.0, 2.0, "m"),
        Err(EngineError::Store(StoreError::Backend(_)))
    ));
    assert_eq!(engine.accuracy("k", "m").unwrap().sample_count, 0);
}

#[test]
fn existing_ledgers_follow_a_changed_capacity() {
    let stores = EngineStores::in_memory();
    let before = Engine::new(EngineConfig::default(), stores.clone());
    for i in 0..20 {
        before.record_accuracy("k", i as f64, i as f64, "m").unwrap();
    }
    assert_eq!(before.accuracy("k", "m").unwrap().sample_count, 20);

    let after = Engine::new(
        EngineConfig {
            accuracy_capacity: 5,
            ..EngineConfig::default()
        },
        stores,
    );
    after.record_accuracy("k", 1.0, 1.0, "m").unwrap();
    assert_eq!(after.accuracy("k", "m").unwrap().sample_count, 5);
}
