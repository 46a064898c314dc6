use clinicast_core::models::signal::SignalType;
use clinicast_engine::config::EngineConfig;
use clinicast_engine::engine::Engine;
use clinicast_replay::replay;
use clinicast_replay::report::ReplayInput;

const SUBJECT: &str = "6f1c2a4e-8b3d-4c5e-9f00-112233445566";

fn input() -> ReplayInput {
    let json = format!(
        r#"{{
            "readings": [
                {{ "subject_id": "{SUBJECT}", "signal_type": "heart_rate", "value": 78, "timestamp": "2026-01-05T08:00:00Z" }},
                {{ "subject_id": "{SUBJECT}", "signal_type": "heart_rate", "value": 80, "timestamp": "2026-01-05T09:00:00Z" }},
                {{ "subject_id": "{SUBJECT}", "signal_type": "heart_rate", "value": 79, "timestamp": "2026-01-05T10:00:00Z" }},
                {{ "subject_id": "{SUBJECT}", "signal_type": "temperature", "value": 37.1, "timestamp": "2026-01-05T08:00:00Z" }},
                {{ "subject_id": "{SUBJECT}", "signal_type": "temperature", "value": 37.4, "timestamp": "2026-01-05T08:00:00Z" }}
            ],
            "vitals": [
                {{
                    "subject_id": "{SUBJECT}",
                    "snapshot": {{
                        "respiratory_rate": 16,
                        "oxygen_saturation": 97,
                        "systolic_bp": 120,
                        "heart_rate": 79,
                        "temperature": 37.1,
                        "consciousness": "alert"
                    }}
                }}
            ]
        }}"#
    );
    serde_json::from_str(&json).unwrap()
}

#[test]
fn rejected_series_is_skipped_and_the_rest_is_reported() {
    let engine = Engine::in_memory(EngineConfig::default());
    let report = replay(&engine, input(), 3, 1.0);

    assert_eq!(report.series.len(), 1);
    let heart = &report.series[0];
    assert_eq!(heart.signal_type, SignalType::HeartRate);
    assert_eq!(heart.reading_count, 3);
    assert_eq!(heart.forecast.forecast_points.len(), 3);
    assert!(heart.triggers.is_empty());
    assert_eq!(heart.holdout.as_ref().map(|h| h.sample_count), Some(1));
    assert!(heart.pain.is_none());

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].signal_type, SignalType::Temperature);
    assert!(report.skipped[0].reason.contains("duplicate timestamp"));

    assert_eq!(report.vitals.len(), 1);
    assert_eq!(report.vitals[0].news2.total_score, 0);
}

#[test]
fn short_pain_history_is_reported_as_skipped_model() {
    let json = format!(
        r#"{{ "readings": [
            {{ "subject_id": "{SUBJECT}", "signal_type": "pain_intensity", "value": 6, "timestamp": "2026-01-05T08:00:00Z" }},
            {{ "subject_id": "{SUBJECT}", "signal_type": "pain_intensity", "value": 5, "timestamp": "2026-01-06T08:00:00Z" }}
        ] }}"#
    );
    let input: ReplayInput = serde_json::from_str(&json).unwrap();
    let engine = Engine::in_memory(EngineConfig::default());

    let report = replay(&engine, input, 2, 24.0);
    assert!(report.skipped.is_empty());
    let json = serde_json::to_value(&report.series[0]).unwrap();
    assert_eq!(json["pain"]["status"], "skipped");
}
