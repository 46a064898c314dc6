use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::parameters::SmoothingParameters;
use super::signal::SignalType;

/// One projected step. Always satisfies `lower_bound <= value <= upper_bound`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForecastPoint {
    pub timestamp: jiff::Timestamp,
    pub value: f64,
    pub upper_bound: f64,
    pub lower_bound: f64,
    pub horizon_steps: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ForecastMethod {
    /// No history was supplied; nothing is projected.
    NoHistory,
    /// Flat projection of the final smoothed level.
    SimpleExponential,
    /// Holt's level + trend projection.
    DoubleExponential,
}

impl ForecastMethod {
    /// Matches the serde name; used as the accuracy-tracking method key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastMethod::NoHistory => "no_history",
            ForecastMethod::SimpleExponential => "simple_exponential",
            ForecastMethod::DoubleExponential => "double_exponential",
        }
    }
}

/// Short-term direction of the most recent values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

/// Coverage of the statistical band drawn around each forecast point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ConfidenceLevel {
    #[serde(rename = "90")]
    P90,
    #[default]
    #[serde(rename = "95")]
    P95,
    #[serde(rename = "99")]
    P99,
}

impl ConfidenceLevel {
    pub fn z(&self) -> f64 {
        match self {
            ConfidenceLevel::P90 => 1.645,
            ConfidenceLevel::P95 => 1.96,
            ConfidenceLevel::P99 => 2.576,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForecastResult {
    pub signal_type: SignalType,
    pub method: ForecastMethod,
    /// Parameters the projection actually ran with.
    pub parameters: SmoothingParameters,
    pub forecast_points: Vec<ForecastPoint>,
    pub trend: Trend,
    /// History-length heuristic in `[0, 1]`: `min(sample_size / 20, 1)`.
    /// Not derived from forecast error.
    pub confidence: f64,
}
