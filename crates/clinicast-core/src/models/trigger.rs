use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::signal::SignalType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TriggerKind {
    ThresholdBreach,
    RapidChange,
    TrendDeterioration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Warning,
    Urgent,
    Critical,
}

/// An alert raised from the latest reading(s). Not deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Trigger {
    pub kind: TriggerKind,
    pub signal_type: SignalType,
    pub current_value: f64,
    pub threshold: Option<f64>,
    pub severity: Severity,
    pub message: String,
    pub timestamp: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TrendDirection {
    Improving,
    Worsening,
    Stable,
    Fluctuating,
}

/// Linear-trend classification over a whole reading window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendResult {
    pub signal_type: Option<SignalType>,
    pub direction: TrendDirection,
    /// Change per reading, from a least-squares line over index.
    pub slope: f64,
    /// `slope / |mean|`.
    pub relative_slope: f64,
    pub coefficient_of_variation: f64,
    pub sample_count: usize,
    pub description: String,
}
