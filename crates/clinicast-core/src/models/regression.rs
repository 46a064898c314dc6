use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An ordinary-least-squares fit. Immutable once trained; a retrain
/// replaces the whole model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegressionModel {
    pub weights: Vec<f64>,
    pub bias: f64,
    /// Floored at zero.
    pub r_squared: f64,
    pub feature_names: Vec<String>,
    pub residual_std_dev: f64,
    /// True when the normal equations were singular and the model fell
    /// back to predicting the target mean.
    pub degenerate: bool,
}

/// A clamped point estimate with its 95% band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Prediction {
    pub value: f64,
    pub lower: f64,
    pub upper: f64,
}
