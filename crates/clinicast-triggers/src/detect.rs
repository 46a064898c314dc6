use clinicast_core::models::reading::{self, Reading};
use clinicast_core::models::signal::ValueRange;
use clinicast_core::models::trigger::{Severity, TrendDirection, Trigger, TriggerKind};

use crate::error::TriggerError;
use crate::thresholds::{RAPID_CHANGE_WINDOW, ThresholdTable};
use crate::trend::{MIN_TREND_READINGS, classify_values};

/// Compare the latest reading against its signal's band. Critical wins
/// over warning; at most one trigger is returned.
pub fn threshold_breach(latest: &Reading, table: &ThresholdTable) -> Option<Trigger> {
    let band = table.band(latest.signal_type);

    [
        (Severity::Critical, band.critical),
        (Severity::Warning, band.warning),
    ]
    .into_iter()
    .find_map(|(severity, range)| breach(latest, severity, range))
}

fn breach(latest: &Reading, severity: Severity, range: ValueRange) -> Option<Trigger> {
    let (threshold, side) = if latest.value < range.min {
        (range.min, "below")
    } else if latest.value > range.max {
        (range.max, "above")
    } else {
        return None;
    };

    Some(Trigger {
        kind: TriggerKind::ThresholdBreach,
        signal_type: latest.signal_type,
        current_value: latest.value,
        threshold: Some(threshold),
        severity,
        message: format!(
            "{} {} is {side} the {} threshold of {}",
            latest.signal_type.label(),
            latest.value,
            match severity {
                Severity::Critical => "critical",
                _ => "warning",
            },
            threshold
        ),
        timestamp: latest.timestamp,
    })
}

/// Compare two consecutive readings. Fires when the absolute change
/// exceeds the signal's threshold and the readings are at most two hours
/// apart. The delta is not scaled by elapsed time.
pub fn rapid_change(previous: &Reading, latest: &Reading) -> Option<Trigger> {
    let threshold = latest.signal_type.rapid_change_threshold();
    let delta = latest.value - previous.value;
    let elapsed = latest.timestamp.duration_since(previous.timestamp);

    if delta.abs() <= threshold || elapsed > RAPID_CHANGE_WINDOW || elapsed.is_negative() {
        return None;
    }

    Some(Trigger {
        kind: TriggerKind::RapidChange,
        signal_type: latest.signal_type,
        current_value: latest.value,
        threshold: Some(threshold),
        severity: Severity::Urgent,
        message: format!(
            "{} {} by {:.1} in {} minutes (from {} to {})",
            latest.signal_type.label(),
            if delta > 0.0 { "rose" } else { "fell" },
            delta.abs(),
            elapsed.as_secs() / 60,
            previous.value,
            latest.value
        ),
        timestamp: latest.timestamp,
    })
}

/// Run every detector over a reading window. The window is sorted
/// ascending first; mixed or ambiguous windows are rejected.
pub fn detect_triggers(
    readings: &[Reading],
    table: &ThresholdTable,
) -> Result<Vec<Trigger>, TriggerError> {
    let ordered = reading::ordered_window(readings)?;
    let Some(latest) = ordered.last() else {
        return Ok(Vec::new());
    };

    let mut triggers = Vec::new();
    triggers.extend(threshold_breach(latest, table));

    if let [.., previous, latest] = ordered.as_slice() {
        triggers.extend(rapid_change(previous, latest));
    }

    if ordered.len() >= MIN_TREND_READINGS {
        let trend = classify_values(Some(latest.signal_type), &reading::values(&ordered));
        if trend.direction == TrendDirection::Worsening {
            triggers.push(Trigger {
                kind: TriggerKind::TrendDeterioration,
                signal_type: latest.signal_type,
                current_value: latest.value,
                threshold: None,
                severity: Severity::Warning,
                message: trend.description,
                timestamp: latest.timestamp,
            });
        }
    }

    Ok(triggers)
}
