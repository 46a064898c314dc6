use clinicast_core::models::reading::{self, Reading};
use clinicast_core::models::signal::SignalType;
use clinicast_core::models::trigger::{TrendDirection, TrendResult};
use clinicast_forecast::stats;

use crate::error::TriggerError;

pub const MIN_TREND_READINGS: usize = 3;

/// Relative slope per reading at or below which the line is flat.
pub const FLAT_RELATIVE_SLOPE: f64 = 0.01;

/// Coefficient of variation above which a flat series is fluctuating.
pub const FLUCTUATING_CV: f64 = 0.15;

const TARGET_TEMPERATURE: f64 = 37.0;

/// Classify a reading window by fitting a line through index vs value.
pub fn classify_trend(readings: &[Reading]) -> Result<TrendResult, TriggerError> {
    let ordered = reading::ordered_window(readings)?;
    let signal = ordered.first().map(|r| r.signal_type);
    Ok(classify_values(signal, &reading::values(&ordered)))
}

pub fn classify_values(signal: Option<SignalType>, values: &[f64]) -> TrendResult {
    let n = values.len();
    let Some(signal_type) = signal.filter(|_| n >= MIN_TREND_READINGS) else {
        return TrendResult {
            signal_type: signal,
            direction: TrendDirection::Stable,
            slope: 0.0,
            relative_slope: 0.0,
            coefficient_of_variation: 0.0,
            sample_count: n,
            description: format!("Only {n} readings; at least {MIN_TREND_READINGS} needed for a trend"),
        };
    };

    let (slope, intercept) = stats::linear_fit(values);
    let mean = stats::mean(values);
    let scale = mean.abs();
    let (relative_slope, cv) = if scale < f64::EPSILON {
        (slope, 0.0)
    } else {
        (slope / scale, stats::std_dev(values) / scale)
    };

    let direction = if relative_slope.abs() <= FLAT_RELATIVE_SLOPE {
        if cv > FLUCTUATING_CV {
            TrendDirection::Fluctuating
        } else {
            TrendDirection::Stable
        }
    } else {
        let start = intercept;
        let end = intercept + slope * (n - 1) as f64;
        match improvement(signal_type, start, end) {
            Some(true) => TrendDirection::Improving,
            Some(false) => TrendDirection::Worsening,
            None => TrendDirection::Stable,
        }
    };

    let description = match direction {
        TrendDirection::Improving => format!("{} improving over {n} readings", signal_type.label()),
        TrendDirection::Worsening => format!("{} worsening over {n} readings", signal_type.label()),
        TrendDirection::Stable => format!("{} stable over {n} readings", signal_type.label()),
        TrendDirection::Fluctuating => format!(
            "{} fluctuating over {n} readings (CV {:.0}%)",
            signal_type.label(),
            cv * 100.0
        ),
    };

    TrendResult {
        signal_type: Some(signal_type),
        direction,
        slope,
        relative_slope,
        coefficient_of_variation: cv,
        sample_count: n,
        description,
    }
}

/// Whether moving from `start` to `end` is better for this signal.
/// `None` when neither is better.
fn improvement(signal: SignalType, start: f64, end: f64) -> Option<bool> {
    let (before, after) = match signal {
        // Higher is better.
        SignalType::OxygenSaturation => (-start, -end),
        // Lower is better.
        SignalType::PainIntensity => (start, end),
        SignalType::Temperature => (
            (start - TARGET_TEMPERATURE).abs(),
            (end - TARGET_TEMPERATURE).abs(),
        ),
        // Closer to the normal range is better; movement inside it is
        // neither.
        _ => {
            let normal = signal.normal_range();
            (normal.distance(start), normal.distance(end))
        }
    };

    match after.partial_cmp(&before) {
        Some(std::cmp::Ordering::Less) => Some(true),
        Some(std::cmp::Ordering::Greater) => Some(false),
        _ => None,
    }
}
