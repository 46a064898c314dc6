//! Exponential smoothing forecaster.
//!
//! Method depends on history length:
//! - 10 or more values: double exponential smoothing (Holt), projecting
//!   `level + i * trend`.
//! - 3 to 9 values: simple exponential smoothing with `alpha = 0.3`, flat
//!   projection.
//! - 1 or 2 values: simple exponential smoothing with `alpha = 0.5`.
//!
//! Every projected value and band edge is clamped to the signal's
//! physiological bounds.

use clinicast_core::models::forecast::{
    ConfidenceLevel, ForecastMethod, ForecastPoint, ForecastResult, Trend,
};
use clinicast_core::models::parameters::SmoothingParameters;
use clinicast_core::models::signal::SignalType;
use jiff::{SignedDuration, Timestamp};

use crate::error::ForecastError;
use crate::stats;

pub const DOUBLE_MIN_POINTS: usize = 10;
pub const SIMPLE_MIN_POINTS: usize = 3;
pub const SIMPLE_ALPHA: f64 = 0.3;
pub const SPARSE_ALPHA: f64 = 0.5;

/// Relative slope at or below which the recent trend is stable.
pub const STABLE_RELATIVE_SLOPE: f64 = 0.02;

/// Sample size at which the confidence heuristic saturates.
pub const FULL_CONFIDENCE_SAMPLES: f64 = 20.0;

#[derive(Debug, Clone)]
pub struct ForecastOptions {
    pub signal_type: SignalType,
    pub horizon: u32,
    pub step_interval_hours: f64,
    /// Timestamp of the latest value; step `i` lands at
    /// `origin + i * step_interval_hours`.
    pub origin: Timestamp,
    pub confidence_level: ConfidenceLevel,
    /// Overrides the Holt defaults. Ignored by the simple methods.
    pub parameters: Option<SmoothingParameters>,
}

/// Final level of simple exponential smoothing. Expects at least one value.
pub fn simple_level(values: &[f64], alpha: f64) -> f64 {
    let Some((&first, rest)) = values.split_first() else {
        return 0.0;
    };
    rest.iter()
        .fold(first, |level, &v| alpha * v + (1.0 - alpha) * level)
}

/// Final `(level, trend)` of Holt's method. With a single value the trend
/// is zero.
pub fn double_state(values: &[f64], params: SmoothingParameters) -> (f64, f64) {
    match values {
        [] => (0.0, 0.0),
        [only] => (*only, 0.0),
        [first, second, ..] => {
            let mut level = *first;
            let mut trend = second - first;
            for &v in &values[1..] {
                let prev_level = level;
                level = params.alpha * v + (1.0 - params.alpha) * (prev_level + trend);
                trend = params.beta * (level - prev_level) + (1.0 - params.beta) * trend;
            }
            (level, trend)
        }
    }
}

/// Holt projection for steps `1..=steps`.
pub fn project_double(values: &[f64], params: SmoothingParameters, steps: usize) -> Vec<f64> {
    let (level, trend) = double_state(values, params);
    (1..=steps).map(|i| level + i as f64 * trend).collect()
}

/// Direction of the last three values, judged by slope relative to their
/// mean.
pub fn recent_trend(values: &[f64]) -> Trend {
    let recent = &values[values.len().saturating_sub(3)..];
    if recent.len() < 2 {
        return Trend::Stable;
    }

    let slope = (recent[recent.len() - 1] - recent[0]) / (recent.len() - 1) as f64;
    let mean = stats::mean(recent);
    let relative = if mean.abs() < f64::EPSILON {
        slope
    } else {
        slope / mean.abs()
    };

    if relative.abs() <= STABLE_RELATIVE_SLOPE {
        Trend::Stable
    } else if relative > 0.0 {
        Trend::Increasing
    } else {
        Trend::Decreasing
    }
}

/// `min(n / 20, 1)`. A history-length heuristic, not an error measure.
pub fn model_confidence(sample_size: usize) -> f64 {
    (sample_size as f64 / FULL_CONFIDENCE_SAMPLES).min(1.0)
}

pub fn forecast(values: &[f64], options: &ForecastOptions) -> Result<ForecastResult, ForecastError> {
    let hours = options.step_interval_hours;
    if !hours.is_finite() || hours <= 0.0 {
        return Err(ForecastError::InvalidInterval(hours));
    }

    if values.is_empty() {
        return Ok(ForecastResult {
            signal_type: options.signal_type,
            method: ForecastMethod::NoHistory,
            parameters: options.parameters.unwrap_or_default(),
            forecast_points: Vec::new(),
            trend: Trend::Stable,
            confidence: 0.0,
        });
    }

    let steps = options.horizon as usize;
    let (method, parameters, raw) = if values.len() >= DOUBLE_MIN_POINTS {
        let params = options.parameters.unwrap_or_default();
        (
            ForecastMethod::DoubleExponential,
            params,
            project_double(values, params, steps),
        )
    } else {
        let alpha = if values.len() >= SIMPLE_MIN_POINTS {
            SIMPLE_ALPHA
        } else {
            SPARSE_ALPHA
        };
        let level = simple_level(values, alpha);
        (
            ForecastMethod::SimpleExponential,
            SmoothingParameters { alpha, beta: 0.0 },
            vec![level; steps],
        )
    };

    let bounds = options.signal_type.physiological_bounds();
    let margin = options.confidence_level.z() * stats::std_dev(values);
    let bound = |v: f64| bounds.clamp(stats::round1(v));

    let mut forecast_points = Vec::with_capacity(steps);
    for (i, value) in raw.into_iter().enumerate() {
        let step = i as u32 + 1;
        let offset = SignedDuration::try_from_secs_f64(hours * 3600.0 * f64::from(step))?;
        forecast_points.push(ForecastPoint {
            timestamp: options.origin.checked_add(offset)?,
            value: bound(value),
            upper_bound: bound(value + margin),
            lower_bound: bound(value - margin),
            horizon_steps: step,
        });
    }

    Ok(ForecastResult {
        signal_type: options.signal_type,
        method,
        parameters,
        forecast_points,
        trend: recent_trend(values),
        confidence: model_confidence(values.len()),
    })
}
