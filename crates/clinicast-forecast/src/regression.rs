use clinicast_core::models::regression::RegressionModel;
use tracing::debug;

use crate::error::{ForecastError, LinalgError};
use crate::linalg;
use crate::stats;

/// Fit `targets ≈ features · weights + bias` by the normal equations.
///
/// A singular `XᵀX` does not fail: the result is a zero-weight model that
/// predicts the target mean, flagged `degenerate`. Empty input or ragged
/// rows are errors.
pub fn train(
    features: &[Vec<f64>],
    targets: &[f64],
    feature_names: &[String],
) -> Result<RegressionModel, ForecastError> {
    let n = features.len();
    let p = features.first().map_or(0, Vec::len);
    if n == 0 || p == 0 {
        return Err(ForecastError::InsufficientData(format!(
            "regression needs at least one row and one feature (got {n}x{p})"
        )));
    }
    if targets.len() != n {
        return Err(ForecastError::ShapeMismatch(format!(
            "{n} feature rows but {} targets",
            targets.len()
        )));
    }
    if let Some((i, row)) = features.iter().enumerate().find(|(_, row)| row.len() != p) {
        return Err(ForecastError::ShapeMismatch(format!(
            "row {i} has {} features, expected {p}",
            row.len()
        )));
    }
    if feature_names.len() != p {
        return Err(ForecastError::ShapeMismatch(format!(
            "{} feature names for {p} features",
            feature_names.len()
        )));
    }

    let design: Vec<Vec<f64>> = features
        .iter()
        .map(|row| row.iter().copied().chain(std::iter::once(1.0)).collect())
        .collect();
    let design_t = linalg::transpose(&design);
    let xtx = linalg::multiply(&design_t, &design)?;
    let xty = linalg::mat_vec(&design_t, targets)?;

    let (weights, bias, degenerate) = match linalg::invert(&xtx) {
        Ok(inverse) => {
            let mut w = linalg::mat_vec(&inverse, &xty)?;
            let bias = w.pop().unwrap_or(0.0);
            (w, bias, false)
        }
        Err(LinalgError::Singular) => {
            debug!(rows = n, features = p, "normal equations singular, using mean-only model");
            (vec![0.0; p], stats::mean(targets), true)
        }
        Err(e) => return Err(e.into()),
    };

    let residuals: Vec<f64> = features
        .iter()
        .zip(targets)
        .map(|(row, y)| y - (dot(row, &weights) + bias))
        .collect();

    let r_squared = if degenerate {
        0.0
    } else {
        let y_mean = stats::mean(targets);
        let rss: f64 = residuals.iter().map(|r| r * r).sum();
        let tss: f64 = targets.iter().map(|y| (y - y_mean).powi(2)).sum();
        if tss == 0.0 {
            0.0
        } else {
            (1.0 - rss / tss).max(0.0)
        }
    };

    Ok(RegressionModel {
        weights,
        bias,
        r_squared,
        feature_names: feature_names.to_vec(),
        residual_std_dev: stats::std_dev(&residuals),
        degenerate,
    })
}

pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
