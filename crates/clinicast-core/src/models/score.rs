use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Level of consciousness on the ACVPU scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Consciousness {
    Alert,
    /// New-onset confusion, disorientation or agitation.
    NewConfusion,
    Voice,
    Pain,
    Unresponsive,
}

/// Which oxygen saturation scale applies to the patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Spo2Scale {
    /// Standard target range.
    #[default]
    Scale1,
    /// Prescribed 88–92% target, e.g. hypercapnic respiratory failure.
    Scale2,
}

/// A single observation set taken at the bedside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalsSnapshot {
    pub respiratory_rate: f64,
    pub oxygen_saturation: f64,
    #[serde(default)]
    pub spo2_scale: Spo2Scale,
    #[serde(default)]
    pub on_supplemental_oxygen: bool,
    pub systolic_bp: f64,
    pub heart_rate: f64,
    pub temperature: f64,
    pub consciousness: Consciousness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    None,
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalScore {
    /// Identifier of the standard that produced this score.
    pub standard: String,
    pub total_score: u32,
    pub risk_tier: RiskTier,
    /// Factor id to its sub-score.
    pub component_scores: BTreeMap<String, u32>,
    pub recommended_response: String,
    pub monitoring_frequency: String,
}
