use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::signal::SignalType;
use crate::error::CoreError;

/// A single recorded measurement. Never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Reading {
    pub subject_id: Uuid,
    pub signal_type: SignalType,
    pub value: f64,
    pub timestamp: jiff::Timestamp,
}

/// Return a copy of `readings` sorted ascending by timestamp.
///
/// Callers are not trusted to pass an ordered window. The window must
/// belong to one subject and one signal type, and no two readings may
/// share a timestamp, otherwise sequencing is ambiguous.
pub fn ordered_window(readings: &[Reading]) -> Result<Vec<Reading>, CoreError> {
    let Some(first) = readings.first() else {
        return Ok(Vec::new());
    };

    if let Some(other) = readings
        .iter()
        .find(|r| r.subject_id != first.subject_id || r.signal_type != first.signal_type)
    {
        return Err(CoreError::MalformedReadings(format!(
            "window mixes {}/{} with {}/{}",
            first.subject_id, first.signal_type, other.subject_id, other.signal_type
        )));
    }

    let mut ordered = readings.to_vec();
    ordered.sort_by_key(|r| r.timestamp);

    if let Some(pair) = ordered.windows(2).find(|w| w[0].timestamp == w[1].timestamp) {
        return Err(CoreError::MalformedReadings(format!(
            "duplicate timestamp {} for {}",
            pair[0].timestamp, first.signal_type
        )));
    }

    Ok(ordered)
}

/// Values of an ordered window, oldest first.
pub fn values(readings: &[Reading]) -> Vec<f64> {
    readings.iter().map(|r| r.value).collect()
}
