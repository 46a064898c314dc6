use std::collections::BTreeMap;

use clinicast_core::models::score::{Consciousness, RiskTier, Spo2Scale, VitalsSnapshot};

use crate::EarlyWarningStandard;
use crate::scoring::{Factor, Step, at_most, step_score};

/// NEWS2: National Early Warning Score 2.
/// Seven factors. Each scores 0–3 except supplemental oxygen (0 or 2).
pub struct News2;

/// A single factor at this value escalates the tier on its own.
pub const RED_SCORE: u32 = 3;

const RESPIRATORY_RATE: [Step; 4] = [
    at_most(8.0, 3),
    at_most(11.0, 1),
    at_most(20.0, 0),
    at_most(24.0, 2),
];

const SPO2_SCALE_1: [Step; 3] = [at_most(91.0, 3), at_most(93.0, 2), at_most(95.0, 1)];

const SPO2_SCALE_2_LOW: [Step; 4] = [
    at_most(83.0, 3),
    at_most(85.0, 2),
    at_most(87.0, 1),
    at_most(92.0, 0),
];

const SPO2_SCALE_2_ON_OXYGEN: [Step; 2] = [at_most(94.0, 1), at_most(96.0, 2)];

const SYSTOLIC_BP: [Step; 4] = [
    at_most(90.0, 3),
    at_most(100.0, 2),
    at_most(110.0, 1),
    at_most(219.0, 0),
];

const HEART_RATE: [Step; 5] = [
    at_most(40.0, 3),
    at_most(50.0, 1),
    at_most(90.0, 0),
    at_most(110.0, 1),
    at_most(130.0, 2),
];

const TEMPERATURE: [Step; 4] = [
    at_most(35.0, 3),
    at_most(36.0, 1),
    at_most(38.0, 0),
    at_most(39.0, 1),
];

pub fn respiratory_rate_points(rate: f64) -> u32 {
    step_score(rate, &RESPIRATORY_RATE, 3)
}

pub fn spo2_points(saturation: f64, scale: Spo2Scale, on_oxygen: bool) -> u32 {
    if saturation.is_nan() {
        return 3;
    }
    match scale {
        Spo2Scale::Scale1 => step_score(saturation, &SPO2_SCALE_1, 0),
        Spo2Scale::Scale2 => {
            if SPO2_SCALE_2_LOW.iter().any(|s| s.cutoff.admits(saturation)) {
                step_score(saturation, &SPO2_SCALE_2_LOW, 0)
            } else if on_oxygen {
                step_score(saturation, &SPO2_SCALE_2_ON_OXYGEN, 3)
            } else {
                0
            }
        }
    }
}

pub fn supplemental_oxygen_points(on_oxygen: bool) -> u32 {
    if on_oxygen { 2 } else { 0 }
}

pub fn systolic_bp_points(systolic: f64) -> u32 {
    step_score(systolic, &SYSTOLIC_BP, 3)
}

pub fn heart_rate_points(rate: f64) -> u32 {
    step_score(rate, &HEART_RATE, 3)
}

pub fn consciousness_points(level: Consciousness) -> u32 {
    match level {
        Consciousness::Alert => 0,
        Consciousness::NewConfusion
        | Consciousness::Voice
        | Consciousness::Pain
        | Consciousness::Unresponsive => 3,
    }
}

pub fn temperature_points(celsius: f64) -> u32 {
    step_score(celsius, &TEMPERATURE, 2)
}

impl EarlyWarningStandard for News2 {
    fn id(&self) -> &str {
        "news2"
    }

    fn name(&self) -> &str {
        "NEWS2"
    }

    fn factors(&self) -> &[Factor] {
        static FACTORS: std::sync::LazyLock<Vec<Factor>> = std::sync::LazyLock::new(|| {
            vec![
                Factor::new("respiratory_rate", "Respiratory rate", 3),
                Factor {
                    description: Some(
                        "Scale 2 applies only to patients with a prescribed 88-92% target"
                            .to_string(),
                    ),
                    ..Factor::new("oxygen_saturation", "SpO2", 3)
                },
                Factor::new("supplemental_oxygen", "Air or oxygen", 2),
                Factor::new("systolic_bp", "Systolic blood pressure", 3),
                Factor::new("heart_rate", "Pulse", 3),
                Factor {
                    description: Some("ACVPU; any level other than alert scores 3".to_string()),
                    ..Factor::new("consciousness", "Consciousness", 3)
                },
                Factor::new("temperature", "Temperature", 3),
            ]
        });
        &FACTORS
    }

    fn component_scores(&self, vitals: &VitalsSnapshot) -> BTreeMap<String, u32> {
        [
            ("respiratory_rate", respiratory_rate_points(vitals.respiratory_rate)),
            (
                "oxygen_saturation",
                spo2_points(
                    vitals.oxygen_saturation,
                    vitals.spo2_scale,
                    vitals.on_supplemental_oxygen,
                ),
            ),
            (
                "supplemental_oxygen",
                supplemental_oxygen_points(vitals.on_supplemental_oxygen),
            ),
            ("systolic_bp", systolic_bp_points(vitals.systolic_bp)),
            ("heart_rate", heart_rate_points(vitals.heart_rate)),
            ("consciousness", consciousness_points(vitals.consciousness)),
            ("temperature", temperature_points(vitals.temperature)),
        ]
        .into_iter()
        .map(|(id, points)| (id.to_string(), points))
        .collect()
    }

    fn risk_tier(&self, total: u32, components: &BTreeMap<String, u32>) -> RiskTier {
        if total >= 7 {
            RiskTier::High
        } else if total >= 5 || components.values().any(|&p| p >= RED_SCORE) {
            RiskTier::Medium
        } else if total >= 1 {
            RiskTier::Low
        } else {
            RiskTier::None
        }
    }

    fn response(&self, tier: RiskTier) -> (&'static str, &'static str) {
        match tier {
            RiskTier::None => ("Continue routine NEWS2 monitoring.", "Minimum 12-hourly"),
            RiskTier::Low => (
                "Inform the registered nurse, who must assess the patient and decide whether \
                 increased monitoring or escalation is required.",
                "Minimum 4-6 hourly",
            ),
            RiskTier::Medium => (
                "Registered nurse to urgently inform the medical team; urgent assessment by a \
                 clinician with core competencies in acute illness.",
                "Minimum 1-hourly",
            ),
            RiskTier::High | RiskTier::Critical => (
                "Emergency assessment by a critical care outreach team; consider transfer to a \
                 higher level of care.",
                "Continuous monitoring of vital signs",
            ),
        }
    }
}
