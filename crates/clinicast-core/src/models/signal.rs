use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A physiological or patient-reported signal the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SignalType {
    /// Beats per minute.
    HeartRate,
    /// Breaths per minute.
    RespiratoryRate,
    /// Peripheral oxygen saturation, percent.
    OxygenSaturation,
    /// Systolic blood pressure, mmHg.
    SystolicBp,
    /// Diastolic blood pressure, mmHg.
    DiastolicBp,
    /// Core temperature, degrees Celsius.
    Temperature,
    /// Patient-reported pain on a 0–10 scale.
    PainIntensity,
    /// Capillary blood glucose, mg/dL.
    BloodGlucose,
}

/// A closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Distance from `value` to the nearest edge; zero when inside.
    pub fn distance(&self, value: f64) -> f64 {
        if value < self.min {
            self.min - value
        } else if value > self.max {
            value - self.max
        } else {
            0.0
        }
    }
}

/// Four-level alert band. A value breaches a level when it is strictly
/// below `low` or strictly above `high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ThresholdBand {
    pub warning: ValueRange,
    pub critical: ValueRange,
}

impl SignalType {
    pub const ALL: [SignalType; 8] = [
        SignalType::HeartRate,
        SignalType::RespiratoryRate,
        SignalType::OxygenSaturation,
        SignalType::SystolicBp,
        SignalType::DiastolicBp,
        SignalType::Temperature,
        SignalType::PainIntensity,
        SignalType::BloodGlucose,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalType::HeartRate => "heart_rate",
            SignalType::RespiratoryRate => "respiratory_rate",
            SignalType::OxygenSaturation => "oxygen_saturation",
            SignalType::SystolicBp => "systolic_bp",
            SignalType::DiastolicBp => "diastolic_bp",
            SignalType::Temperature => "temperature",
            SignalType::PainIntensity => "pain_intensity",
            SignalType::BloodGlucose => "blood_glucose",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SignalType::HeartRate => "Heart rate",
            SignalType::RespiratoryRate => "Respiratory rate",
            SignalType::OxygenSaturation => "Oxygen saturation",
            SignalType::SystolicBp => "Systolic blood pressure",
            SignalType::DiastolicBp => "Diastolic blood pressure",
            SignalType::Temperature => "Temperature",
            SignalType::PainIntensity => "Pain intensity",
            SignalType::BloodGlucose => "Blood glucose",
        }
    }

    /// Hard plausibility limits. Forecasts are clamped into this range no
    /// matter what the smoothing arithmetic produces.
    pub fn physiological_bounds(&self) -> ValueRange {
        match self {
            SignalType::HeartRate => ValueRange::new(20.0, 250.0),
            SignalType::RespiratoryRate => ValueRange::new(4.0, 60.0),
            SignalType::OxygenSaturation => ValueRange::new(50.0, 100.0),
            SignalType::SystolicBp => ValueRange::new(50.0, 250.0),
            SignalType::DiastolicBp => ValueRange::new(30.0, 150.0),
            SignalType::Temperature => ValueRange::new(30.0, 45.0),
            SignalType::PainIntensity => ValueRange::new(0.0, 10.0),
            SignalType::BloodGlucose => ValueRange::new(20.0, 600.0),
        }
    }

    /// Adult reference range, used to decide whether a trend is moving
    /// towards or away from normal.
    pub fn normal_range(&self) -> ValueRange {
        match self {
            SignalType::HeartRate => ValueRange::new(60.0, 100.0),
            SignalType::RespiratoryRate => ValueRange::new(12.0, 20.0),
            SignalType::OxygenSaturation => ValueRange::new(96.0, 100.0),
            SignalType::SystolicBp => ValueRange::new(100.0, 140.0),
            SignalType::DiastolicBp => ValueRange::new(60.0, 90.0),
            SignalType::Temperature => ValueRange::new(36.5, 37.5),
            SignalType::PainIntensity => ValueRange::new(0.0, 3.0),
            SignalType::BloodGlucose => ValueRange::new(70.0, 140.0),
        }
    }

    pub fn threshold_band(&self) -> ThresholdBand {
        let (warning, critical) = match self {
            SignalType::HeartRate => ((50.0, 110.0), (40.0, 130.0)),
            SignalType::RespiratoryRate => ((10.0, 24.0), (8.0, 30.0)),
            SignalType::OxygenSaturation => ((94.0, 100.0), (90.0, 100.0)),
            SignalType::SystolicBp => ((100.0, 160.0), (90.0, 180.0)),
            SignalType::DiastolicBp => ((60.0, 100.0), (50.0, 110.0)),
            SignalType::Temperature => ((36.0, 38.0), (35.0, 39.5)),
            SignalType::PainIntensity => ((0.0, 7.0), (0.0, 9.0)),
            SignalType::BloodGlucose => ((70.0, 180.0), (54.0, 250.0)),
        };
        ThresholdBand {
            warning: ValueRange::new(warning.0, warning.1),
            critical: ValueRange::new(critical.0, critical.1),
        }
    }

    /// Absolute change between two consecutive readings that counts as rapid.
    pub fn rapid_change_threshold(&self) -> f64 {
        match self {
            SignalType::HeartRate => 30.0,
            SignalType::RespiratoryRate => 8.0,
            SignalType::OxygenSaturation => 5.0,
            SignalType::SystolicBp => 40.0,
            SignalType::DiastolicBp => 25.0,
            SignalType::Temperature => 1.5,
            SignalType::PainIntensity => 4.0,
            SignalType::BloodGlucose => 80.0,
        }
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignalType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SignalType::ALL
            .into_iter()
            .find(|signal| signal.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSignal(s.to_string()))
    }
}
