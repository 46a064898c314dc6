//! Grid search for Holt smoothing constants against a held-out tail of
//! the history.

use clinicast_core::models::parameters::SmoothingParameters;
use tracing::debug;

use crate::smoothing::{DOUBLE_MIN_POINTS, project_double};

pub const TRAIN_FRACTION: f64 = 0.7;

/// Outcome of a grid search. `test_mse` is `None` when the history was too
/// short and defaults were returned without searching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Optimization {
    pub parameters: SmoothingParameters,
    pub test_mse: Option<f64>,
    pub candidates: usize,
}

/// `0.1, 0.2, ..., 0.9`
pub fn alpha_grid() -> impl Iterator<Item = f64> {
    (1..=9).map(|i| f64::from(i) / 10.0)
}

/// `0.05, 0.10, ..., 0.50`
pub fn beta_grid() -> impl Iterator<Item = f64> {
    (1..=10).map(|i| f64::from(i * 5) / 100.0)
}

/// Split `history` into the leading 70% and the trailing remainder.
pub fn train_test_split(history: &[f64]) -> (&[f64], &[f64]) {
    let train_len = (history.len() as f64 * TRAIN_FRACTION).floor() as usize;
    history.split_at(train_len.min(history.len()))
}

/// Mean squared error of a Holt projection fitted on the train split and
/// scored on the test split. `None` if either split is empty.
pub fn split_mse(history: &[f64], params: SmoothingParameters) -> Option<f64> {
    let (train, test) = train_test_split(history);
    if train.is_empty() || test.is_empty() {
        return None;
    }

    let projected = project_double(train, params, test.len());
    let sse: f64 = projected
        .iter()
        .zip(test)
        .map(|(p, a)| (p - a).powi(2))
        .sum();
    Some(sse / test.len() as f64)
}

/// Pick the `(alpha, beta)` pair minimizing test-split MSE. Ties keep the
/// first pair visited. Fewer than ten values returns the defaults.
pub fn optimize(history: &[f64]) -> Optimization {
    if history.len() < DOUBLE_MIN_POINTS {
        return Optimization {
            parameters: SmoothingParameters::DEFAULT,
            test_mse: None,
            candidates: 0,
        };
    }

    let mut best: Option<(SmoothingParameters, f64)> = None;
    let mut candidates = 0;

    for alpha in alpha_grid() {
        for beta in beta_grid() {
            let params = SmoothingParameters { alpha, beta };
            let Some(mse) = split_mse(history, params) else {
                continue;
            };
            candidates += 1;
            if best.is_none_or(|(_, best_mse)| mse < best_mse) {
                best = Some((params, mse));
            }
        }
    }

    match best {
        Some((parameters, mse)) => {
            debug!(
                alpha = parameters.alpha,
                beta = parameters.beta,
                mse,
                candidates,
                "grid search complete"
            );
            Optimization {
                parameters,
                test_mse: Some(mse),
                candidates,
            }
        }
        None => Optimization {
            parameters: SmoothingParameters::DEFAULT,
            test_mse: None,
            candidates,
        },
    }
}
