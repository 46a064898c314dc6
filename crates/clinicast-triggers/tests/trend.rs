use clinicast_core::models::reading::Reading;
use clinicast_core::models::signal::SignalType;
use clinicast_core::models::trigger::TrendDirection;
use clinicast_triggers::trend::{classify_trend, classify_values};
use jiff::Timestamp;
use uuid::Uuid;

fn direction(signal: SignalType, values: &[f64]) -> TrendDirection {
    classify_values(Some(signal), values).direction
}

#[test]
fn rising_saturation_improves() {
    assert_eq!(
        direction(SignalType::OxygenSaturation, &[90.0, 91.0, 93.0, 94.0, 96.0]),
        TrendDirection::Improving
    );
    assert_eq!(
        direction(SignalType::OxygenSaturation, &[98.0, 96.0, 94.0, 92.0]),
        TrendDirection::Worsening
    );
}

#[test]
fn temperature_is_judged_against_thirty_seven() {
    assert_eq!(
        direction(SignalType::Temperature, &[39.5, 39.0, 38.4, 37.8]),
        TrendDirection::Improving
    );
    assert_eq!(
        direction(SignalType::Temperature, &[37.0, 37.6, 38.2, 38.9]),
        TrendDirection::Worsening
    );
    assert_eq!(
        direction(SignalType::Temperature, &[35.0, 35.6, 36.2, 36.8]),
        TrendDirection::Improving
    );
}

#[test]
fn heart_rate_is_judged_against_normal_range() {
    assert_eq!(
        direction(SignalType::HeartRate, &[130.0, 120.0, 110.0, 100.0]),
        TrendDirection::Improving
    );
    assert_eq!(
        direction(SignalType::HeartRate, &[90.0, 100.0, 110.0, 120.0]),
        TrendDirection::Worsening
    );
    assert_eq!(
        direction(SignalType::HeartRate, &[40.0, 45.0, 50.0, 55.0]),
        TrendDirection::Improving
    );
}

#[test]
fn movement_inside_normal_range_is_stable() {
    assert_eq!(
        direction(SignalType::HeartRate, &[72.0, 80.0, 88.0, 96.0]),
        TrendDirection::Stable
    );
    assert_eq!(
        direction(SignalType::HeartRate, &[96.0, 88.0, 80.0, 72.0]),
        TrendDirection::Stable
    );
}

#[test]
fn falling_pain_improves() {
    assert_eq!(
        direction(SignalType::PainIntensity, &[8.0, 6.0, 5.0, 3.0, 2.0]),
        TrendDirection::Improving
    );
}

#[test]
fn flat_noisy_series_fluctuates() {
    assert_eq!(
        direction(SignalType::BloodGlucose, &[120.0, 180.0, 80.0, 170.0, 90.0, 175.0, 115.0]),
        TrendDirection::Fluctuating
    );
    assert_eq!(
        direction(SignalType::HeartRate, &[80.0, 81.0, 79.0, 80.0, 80.5]),
        TrendDirection::Stable
    );
}

#[test]
fn short_windows_are_stable() {
    let result = classify_values(Some(SignalType::HeartRate), &[80.0, 130.0]);
    assert_eq!(result.direction, TrendDirection::Stable);
    assert_eq!(result.sample_count, 2);

    let empty = classify_trend(&[]).unwrap();
    assert_eq!(empty.direction, TrendDirection::Stable);
    assert_eq!(empty.signal_type, None);
}

#[test]
fn readings_are_ordered_before_fitting() {
    let id = Uuid::new_v4();
    let readings: Vec<Reading> = [(3, 95.0), (0, 99.0), (2, 96.0), (1, 98.0)]
        .into_iter()
        .map(|(hour, value)| Reading {
            subject_id: id,
            signal_type: SignalType::OxygenSaturation,
            value,
            timestamp: Timestamp::from_second(1_767_225_600 + hour * 3600).unwrap(),
        })
        .collect();

    let result = classify_trend(&readings).unwrap();
    assert_eq!(result.direction, TrendDirection::Worsening);
    assert!(result.slope < 0.0);
}
