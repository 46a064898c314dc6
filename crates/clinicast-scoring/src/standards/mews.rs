use std::collections::BTreeMap;

use clinicast_core::models::score::{Consciousness, RiskTier, VitalsSnapshot};

use crate::EarlyWarningStandard;
use crate::scoring::{Factor, Step, at_most, below, step_score};

/// MEWS: Modified Early Warning Score.
/// Five factors, each 0–3. Consciousness uses AVPU; new confusion scores
/// as "responds to voice".
pub struct Mews;

const SYSTOLIC_BP: [Step; 4] = [
    at_most(70.0, 3),
    at_most(80.0, 2),
    at_most(100.0, 1),
    at_most(199.0, 0),
];

const HEART_RATE: [Step; 5] = [
    at_most(40.0, 2),
    at_most(50.0, 1),
    at_most(100.0, 0),
    at_most(110.0, 1),
    at_most(129.0, 2),
];

const RESPIRATORY_RATE: [Step; 4] = [
    below(9.0, 2),
    at_most(14.0, 0),
    at_most(20.0, 1),
    at_most(29.0, 2),
];

const TEMPERATURE: [Step; 2] = [below(35.0, 2), at_most(38.4, 0)];

pub fn systolic_bp_points(systolic: f64) -> u32 {
    step_score(systolic, &SYSTOLIC_BP, 2)
}

pub fn heart_rate_points(rate: f64) -> u32 {
    step_score(rate, &HEART_RATE, 3)
}

pub fn respiratory_rate_points(rate: f64) -> u32 {
    step_score(rate, &RESPIRATORY_RATE, 3)
}

pub fn temperature_points(celsius: f64) -> u32 {
    step_score(celsius, &TEMPERATURE, 2)
}

pub fn avpu_points(level: Consciousness) -> u32 {
    match level {
        Consciousness::Alert => 0,
        Consciousness::NewConfusion | Consciousness::Voice => 1,
        Consciousness::Pain => 2,
        Consciousness::Unresponsive => 3,
    }
}

impl EarlyWarningStandard for Mews {
    fn id(&self) -> &str {
        "mews"
    }

    fn name(&self) -> &str {
        "MEWS"
    }

    fn factors(&self) -> &[Factor] {
        static FACTORS: std::sync::LazyLock<Vec<Factor>> = std::sync::LazyLock::new(|| {
            vec![
                Factor::new("systolic_bp", "Systolic blood pressure", 3),
                Factor::new("heart_rate", "Heart rate", 3),
                Factor::new("respiratory_rate", "Respiratory rate", 3),
                Factor::new("temperature", "Temperature", 2),
                Factor::new("consciousness", "AVPU", 3),
            ]
        });
        &FACTORS
    }

    fn component_scores(&self, vitals: &VitalsSnapshot) -> BTreeMap<String, u32> {
        [
            ("systolic_bp", systolic_bp_points(vitals.systolic_bp)),
            ("heart_rate", heart_rate_points(vitals.heart_rate)),
            ("respiratory_rate", respiratory_rate_points(vitals.respiratory_rate)),
            ("temperature", temperature_points(vitals.temperature)),
            ("consciousness", avpu_points(vitals.consciousness)),
        ]
        .into_iter()
        .map(|(id, points)| (id.to_string(), points))
        .collect()
    }

    fn risk_tier(&self, total: u32, _components: &BTreeMap<String, u32>) -> RiskTier {
        match total {
            5.. => RiskTier::Critical,
            4 => RiskTier::High,
            2..=3 => RiskTier::Medium,
            _ => RiskTier::Low,
        }
    }

    fn response(&self, tier: RiskTier) -> (&'static str, &'static str) {
        match tier {
            RiskTier::Critical => (
                "Immediate medical review; consider critical care referral.",
                "Continuous monitoring",
            ),
            RiskTier::High => (
                "Urgent medical review within 30 minutes.",
                "Every 30 minutes",
            ),
            RiskTier::Medium => (
                "Inform the nurse in charge and increase observation frequency.",
                "Every 1-2 hours",
            ),
            RiskTier::Low | RiskTier::None => ("Continue routine observations.", "Every 4-6 hours"),
        }
    }
}
