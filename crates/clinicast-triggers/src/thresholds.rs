use std::collections::BTreeMap;

use clinicast_core::models::signal::{SignalType, ThresholdBand};
use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

/// Two consecutive readings further apart than this never count as a
/// rapid change, whatever the delta.
pub const RAPID_CHANGE_WINDOW: SignedDuration = SignedDuration::from_hours(2);

/// Per-signal alert bands. Signals without an override use the built-in
/// band from [`SignalType::threshold_band`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThresholdTable {
    overrides: BTreeMap<SignalType, ThresholdBand>,
}

impl ThresholdTable {
    pub fn with_overrides(overrides: BTreeMap<SignalType, ThresholdBand>) -> Self {
        Self { overrides }
    }

    pub fn set(&mut self, signal: SignalType, band: ThresholdBand) {
        self.overrides.insert(signal, band);
    }

    pub fn band(&self, signal: SignalType) -> ThresholdBand {
        self.overrides
            .get(&signal)
            .copied()
            .unwrap_or_else(|| signal.threshold_band())
    }
}
