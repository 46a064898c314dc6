use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A forecast paired with the value eventually observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AccuracySample {
    pub predicted: f64,
    pub actual: f64,
    pub method: String,
}

/// Aggregate error over the retained samples. All zero when empty.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AccuracyStats {
    pub mae: f64,
    /// Percent. Samples whose actual value is zero contribute zero.
    pub mape: f64,
    pub rmse: f64,
    pub sample_count: usize,
}
