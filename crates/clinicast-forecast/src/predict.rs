use clinicast_core::models::regression::{Prediction, RegressionModel};
use clinicast_core::models::signal::ValueRange;

use crate::error::ForecastError;
use crate::regression::dot;
use crate::stats::{clamp, round1};

/// Fixed 95% multiplier. Not adjusted for sample size.
pub const Z_95: f64 = 1.96;

/// Apply a trained model to one feature vector, clamping the estimate and
/// its band into `domain`.
pub fn predict(
    model: &RegressionModel,
    features: &[f64],
    domain: ValueRange,
) -> Result<Prediction, ForecastError> {
    if features.len() != model.weights.len() {
        return Err(ForecastError::ShapeMismatch(format!(
            "model has {} weights, got {} features",
            model.weights.len(),
            features.len()
        )));
    }

    let raw = dot(features, &model.weights) + model.bias;
    let margin = Z_95 * model.residual_std_dev;
    let bound = |v: f64| clamp(round1(v), domain.min, domain.max);

    Ok(Prediction {
        value: bound(raw),
        lower: bound(raw - margin),
        upper: bound(raw + margin),
    })
}
